//! Product image model and DTO.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `product_images` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductImage {
    pub id: DbId,
    pub url: String,
    pub alt_text: Option<String>,
    pub sort_order: Option<i32>,
    pub product_id: DbId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageDto {
    pub id: Option<DbId>,
    #[validate(required, length(min = 1, max = 500))]
    pub url: Option<String>,
    #[validate(length(max = 255))]
    pub alt_text: Option<String>,
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
    #[validate(required)]
    pub product_id: Option<DbId>,
}

impl From<ProductImage> for ProductImageDto {
    fn from(row: ProductImage) -> Self {
        Self {
            id: Some(row.id),
            url: Some(row.url),
            alt_text: row.alt_text,
            sort_order: row.sort_order,
            product_id: Some(row.product_id),
        }
    }
}

pub const PRODUCT_IMAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("url", "url", FieldKind::Text),
    FieldSpec::own("altText", "alt_text", FieldKind::Text),
    FieldSpec::own("sortOrder", "sort_order", FieldKind::Integer),
    FieldSpec::own("productId", "product_id", FieldKind::Long),
];
