//! Repository for the `colours` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::criteria::{count_matching, fetch_page};
use crate::models::colour::{Colour, ColourDto};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, hex_code";

const TABLE: &str = "colours";

/// Provides CRUD operations for colours.
pub struct ColourRepo;

impl ColourRepo {
    /// Insert a new colour, returning the created row.
    pub async fn create(pool: &PgPool, input: &ColourDto) -> Result<Colour, sqlx::Error> {
        let query = format!(
            "INSERT INTO colours (name, hex_code) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Colour>(&query)
            .bind(&input.name)
            .bind(&input.hex_code)
            .fetch_one(pool)
            .await
    }

    /// Find a colour by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Colour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colours WHERE id = $1");
        sqlx::query_as::<_, Colour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of colours matching `criteria`.
    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<Colour>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    /// Count colours matching `criteria`.
    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    /// Replace every column. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ColourDto,
    ) -> Result<Option<Colour>, sqlx::Error> {
        let query = format!(
            "UPDATE colours SET name = $2, hex_code = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Colour>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.hex_code)
            .fetch_optional(pool)
            .await
    }

    /// Apply only the non-`None` fields of `input`.
    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        input: &ColourDto,
    ) -> Result<Option<Colour>, sqlx::Error> {
        let query = format!(
            "UPDATE colours SET
                name = COALESCE($2, name),
                hex_code = COALESCE($3, hex_code)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Colour>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.hex_code)
            .fetch_optional(pool)
            .await
    }

    /// Delete a colour by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM colours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
