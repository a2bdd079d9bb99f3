//! Conversation model and DTO.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::{EntityUuid, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `conversations` table.
#[derive(Debug, Clone, FromRow)]
pub struct Conversation {
    pub id: EntityUuid,
    pub title: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDto {
    pub id: Option<EntityUuid>,
    #[validate(length(max = 200))]
    pub title: Option<String>,
    #[validate(required)]
    pub created_at: Option<Timestamp>,
}

impl From<Conversation> for ConversationDto {
    fn from(row: Conversation) -> Self {
        Self {
            id: Some(row.id),
            title: row.title,
            created_at: Some(row.created_at),
        }
    }
}

pub const CONVERSATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Uuid),
    FieldSpec::own("title", "title", FieldKind::Text),
    FieldSpec::own("createdAt", "created_at", FieldKind::Instant),
];
