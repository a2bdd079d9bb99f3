//! Product comment model and DTO. Comments are mirrored into the search index.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::{DbId, EntityUuid, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::search::Searchable;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub body: String,
    pub rating: Option<i32>,
    pub created_at: Timestamp,
    pub product_id: DbId,
    pub user_id: Option<EntityUuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Option<DbId>,
    #[validate(required, length(min = 1, max = 2000))]
    pub body: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[validate(required)]
    pub created_at: Option<Timestamp>,
    #[validate(required)]
    pub product_id: Option<DbId>,
    pub user_id: Option<EntityUuid>,
}

impl From<Comment> for CommentDto {
    fn from(row: Comment) -> Self {
        Self {
            id: Some(row.id),
            body: Some(row.body),
            rating: row.rating,
            created_at: Some(row.created_at),
            product_id: Some(row.product_id),
            user_id: row.user_id,
        }
    }
}

impl Searchable for CommentDto {
    const ENTITY_TYPE: &'static str = "comment";

    fn search_text(&self) -> String {
        self.body.clone().unwrap_or_default()
    }
}

pub const COMMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("body", "body", FieldKind::Text),
    FieldSpec::own("rating", "rating", FieldKind::Integer),
    FieldSpec::own("createdAt", "created_at", FieldKind::Instant),
    FieldSpec::own("productId", "product_id", FieldKind::Long),
    FieldSpec::own("userId", "user_id", FieldKind::Uuid),
];
