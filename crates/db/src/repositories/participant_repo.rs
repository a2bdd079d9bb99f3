//! Repository for the `participants` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::criteria::{count_matching, fetch_page};
use crate::models::participant::{Participant, ParticipantDto};

const COLUMNS: &str = "id, joined_at, admin, conversation_id, user_id";

const TABLE: &str = "participants";

/// Provides CRUD operations for conversation participants.
pub struct ParticipantRepo;

impl ParticipantRepo {
    pub async fn create(pool: &PgPool, input: &ParticipantDto) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO participants (joined_at, admin, conversation_id, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(input.joined_at)
            .bind(input.admin)
            .bind(input.conversation_id)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants WHERE id = $1");
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<Participant>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ParticipantDto,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "UPDATE participants SET
                joined_at = $2, admin = $3, conversation_id = $4, user_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .bind(input.joined_at)
            .bind(input.admin)
            .bind(input.conversation_id)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        input: &ParticipantDto,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "UPDATE participants SET
                joined_at = COALESCE($2, joined_at),
                admin = COALESCE($3, admin),
                conversation_id = COALESCE($4, conversation_id),
                user_id = COALESCE($5, user_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .bind(input.joined_at)
            .bind(input.admin)
            .bind(input.conversation_id)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
