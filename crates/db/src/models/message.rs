//! Message model and DTO.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::{EntityUuid, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: EntityUuid,
    pub content: String,
    pub sent_at: Timestamp,
    pub read: bool,
    pub conversation_id: EntityUuid,
    pub sender_id: EntityUuid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: Option<EntityUuid>,
    #[validate(required, length(min = 1, max = 4000))]
    pub content: Option<String>,
    #[validate(required)]
    pub sent_at: Option<Timestamp>,
    #[validate(required)]
    pub read: Option<bool>,
    #[validate(required)]
    pub conversation_id: Option<EntityUuid>,
    #[validate(required)]
    pub sender_id: Option<EntityUuid>,
}

impl From<Message> for MessageDto {
    fn from(row: Message) -> Self {
        Self {
            id: Some(row.id),
            content: Some(row.content),
            sent_at: Some(row.sent_at),
            read: Some(row.read),
            conversation_id: Some(row.conversation_id),
            sender_id: Some(row.sender_id),
        }
    }
}

pub const MESSAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Uuid),
    FieldSpec::own("content", "content", FieldKind::Text),
    FieldSpec::own("sentAt", "sent_at", FieldKind::Instant),
    FieldSpec::own("read", "read", FieldKind::Boolean),
    FieldSpec::own("conversationId", "conversation_id", FieldKind::Uuid),
    FieldSpec::own("senderId", "sender_id", FieldKind::Uuid),
];
