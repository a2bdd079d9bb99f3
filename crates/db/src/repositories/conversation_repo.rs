//! Repository for the `conversations` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::EntityUuid;
use sqlx::PgPool;
use uuid::Uuid;

use crate::criteria::{count_matching, fetch_page};
use crate::models::conversation::{Conversation, ConversationDto};

const COLUMNS: &str = "id, title, created_at";

const TABLE: &str = "conversations";

/// Provides CRUD operations for conversations.
pub struct ConversationRepo;

impl ConversationRepo {
    pub async fn create(pool: &PgPool, input: &ConversationDto) -> Result<Conversation, sqlx::Error> {
        let query = format!(
            "INSERT INTO conversations (id, title, created_at) VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conversation>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityUuid,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conversations WHERE id = $1");
        sqlx::query_as::<_, Conversation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<Conversation>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        id: EntityUuid,
        input: &ConversationDto,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!(
            "UPDATE conversations SET title = $2, created_at = $3 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conversation>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.created_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: EntityUuid,
        input: &ConversationDto,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!(
            "UPDATE conversations SET
                title = COALESCE($2, title),
                created_at = COALESCE($3, created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conversation>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.created_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a conversation together with its participants and messages.
    pub async fn delete(pool: &PgPool, id: EntityUuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
