//! Participant model and DTO: a user's membership in a conversation.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::{DbId, EntityUuid, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `participants` table.
#[derive(Debug, Clone, FromRow)]
pub struct Participant {
    pub id: DbId,
    pub joined_at: Timestamp,
    pub admin: bool,
    pub conversation_id: EntityUuid,
    pub user_id: EntityUuid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub id: Option<DbId>,
    #[validate(required)]
    pub joined_at: Option<Timestamp>,
    #[validate(required)]
    pub admin: Option<bool>,
    #[validate(required)]
    pub conversation_id: Option<EntityUuid>,
    #[validate(required)]
    pub user_id: Option<EntityUuid>,
}

impl From<Participant> for ParticipantDto {
    fn from(row: Participant) -> Self {
        Self {
            id: Some(row.id),
            joined_at: Some(row.joined_at),
            admin: Some(row.admin),
            conversation_id: Some(row.conversation_id),
            user_id: Some(row.user_id),
        }
    }
}

pub const PARTICIPANT_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("joinedAt", "joined_at", FieldKind::Instant),
    FieldSpec::own("admin", "admin", FieldKind::Boolean),
    FieldSpec::own("conversationId", "conversation_id", FieldKind::Uuid),
    FieldSpec::own("userId", "user_id", FieldKind::Uuid),
];
