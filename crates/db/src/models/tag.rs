//! Tag model and DTO.
//!
//! Tags are attached to products through `rel_product__tag`; the product
//! side owns the association, tags only expose it as a filter.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: Option<DbId>,
    #[validate(required, length(min = 2, max = 50))]
    pub name: Option<String>,
}

impl From<Tag> for TagDto {
    fn from(row: Tag) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
        }
    }
}

pub const TAG_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("name", "name", FieldKind::Text),
    FieldSpec::joined("productId", "rel_product__tag", "tag_id", "product_id", FieldKind::Long),
];
