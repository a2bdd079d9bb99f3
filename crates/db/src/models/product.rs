//! Product model and DTO.
//!
//! Products belong to an optional category and own the many-to-many
//! association with tags (`rel_product__tag`). The DTO carries the tag
//! association as a sorted id list.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

use crate::models::search::Searchable;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub available: bool,
    pub product_category_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Option<DbId>,
    #[validate(required, length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required, range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(required)]
    pub available: Option<bool>,
    pub product_category_id: Option<DbId>,
    /// `None` on input leaves associations alone (PATCH) or clears them (PUT).
    pub tag_ids: Option<Vec<DbId>>,
}

impl ProductDto {
    /// Attach the product's tag ids.
    pub fn with_tags(mut self, mut tag_ids: Vec<DbId>) -> Self {
        tag_ids.sort_unstable();
        self.tag_ids = Some(tag_ids);
        self
    }
}

impl From<Product> for ProductDto {
    fn from(row: Product) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            price: Some(row.price),
            available: Some(row.available),
            product_category_id: row.product_category_id,
            tag_ids: Some(Vec::new()),
        }
    }
}

impl Searchable for ProductDto {
    const ENTITY_TYPE: &'static str = "product";

    fn search_text(&self) -> String {
        [self.name.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub const PRODUCT_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("name", "name", FieldKind::Text),
    FieldSpec::own("description", "description", FieldKind::Text),
    FieldSpec::own("price", "price", FieldKind::Double),
    FieldSpec::own("available", "available", FieldKind::Boolean),
    FieldSpec::own("productCategoryId", "product_category_id", FieldKind::Long),
    FieldSpec::joined("tagId", "rel_product__tag", "product_id", "tag_id", FieldKind::Long),
];
