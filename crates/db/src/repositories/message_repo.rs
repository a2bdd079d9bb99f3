//! Repository for the `messages` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::EntityUuid;
use sqlx::PgPool;
use uuid::Uuid;

use crate::criteria::{count_matching, fetch_page};
use crate::models::message::{Message, MessageDto};

const COLUMNS: &str = "id, content, sent_at, read, conversation_id, sender_id";

const TABLE: &str = "messages";

/// Provides CRUD operations for messages.
pub struct MessageRepo;

impl MessageRepo {
    pub async fn create(pool: &PgPool, input: &MessageDto) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (id, content, sent_at, read, conversation_id, sender_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.content)
            .bind(input.sent_at)
            .bind(input.read)
            .bind(input.conversation_id)
            .bind(input.sender_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: EntityUuid) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<Message>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        id: EntityUuid,
        input: &MessageDto,
    ) -> Result<Option<Message>, sqlx::Error> {
        let query = format!(
            "UPDATE messages SET
                content = $2, sent_at = $3, read = $4, conversation_id = $5, sender_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(input.sent_at)
            .bind(input.read)
            .bind(input.conversation_id)
            .bind(input.sender_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: EntityUuid,
        input: &MessageDto,
    ) -> Result<Option<Message>, sqlx::Error> {
        let query = format!(
            "UPDATE messages SET
                content = COALESCE($2, content),
                sent_at = COALESCE($3, sent_at),
                read = COALESCE($4, read),
                conversation_id = COALESCE($5, conversation_id),
                sender_id = COALESCE($6, sender_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(input.sent_at)
            .bind(input.read)
            .bind(input.conversation_id)
            .bind(input.sender_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: EntityUuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
