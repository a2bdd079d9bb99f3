//! Repository for the `comments` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::criteria::{count_matching, fetch_page};
use crate::models::comment::{Comment, CommentDto};

const COLUMNS: &str = "id, body, rating, created_at, product_id, user_id";

const TABLE: &str = "comments";

/// Provides CRUD operations for product comments.
pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(pool: &PgPool, input: &CommentDto) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (body, rating, created_at, product_id, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.body)
            .bind(input.rating)
            .bind(input.created_at)
            .bind(input.product_id)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every comment id, ascending.
    pub async fn all_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM comments ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<Comment>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CommentDto,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET
                body = $2, rating = $3, created_at = $4, product_id = $5, user_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.body)
            .bind(input.rating)
            .bind(input.created_at)
            .bind(input.product_id)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        input: &CommentDto,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET
                body = COALESCE($2, body),
                rating = COALESCE($3, rating),
                created_at = COALESCE($4, created_at),
                product_id = COALESCE($5, product_id),
                user_id = COALESCE($6, user_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.body)
            .bind(input.rating)
            .bind(input.created_at)
            .bind(input.product_id)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
