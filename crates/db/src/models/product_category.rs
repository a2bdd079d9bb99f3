//! Product category model and DTO. A category may carry a display colour.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `product_categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub colour_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryDto {
    pub id: Option<DbId>,
    #[validate(required, length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub colour_id: Option<DbId>,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(row: ProductCategory) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            colour_id: row.colour_id,
        }
    }
}

pub const PRODUCT_CATEGORY_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("name", "name", FieldKind::Text),
    FieldSpec::own("description", "description", FieldKind::Text),
    FieldSpec::own("colourId", "colour_id", FieldKind::Long),
];
