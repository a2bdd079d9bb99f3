//! Repository shared by the `order_statuses`, `invoice_statuses` and
//! `shipment_statuses` lookup tables.
//!
//! Table names come from [`StatusTable::table`], never from user input,
//! so they are interpolated directly into the SQL.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::criteria::{count_matching, fetch_page};
use crate::models::status::{Status, StatusDto, StatusTable};

const COLUMNS: &str = "id, code, description";

/// Provides CRUD operations for the status lookup tables.
pub struct StatusRepo;

impl StatusRepo {
    /// Insert a status. Codes are unique per table.
    pub async fn create(
        pool: &PgPool,
        table: StatusTable,
        input: &StatusDto,
    ) -> Result<Status, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (code, description) VALUES ($1, $2) RETURNING {COLUMNS}",
            table.table()
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        table: StatusTable,
        id: DbId,
    ) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", table.table());
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        table: StatusTable,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<Status>, sqlx::Error> {
        fetch_page(pool, table.table(), COLUMNS, criteria, page).await
    }

    pub async fn count(
        pool: &PgPool,
        table: StatusTable,
        criteria: &Criteria,
    ) -> Result<i64, sqlx::Error> {
        count_matching(pool, table.table(), criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        table: StatusTable,
        id: DbId,
        input: &StatusDto,
    ) -> Result<Option<Status>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET code = $2, description = $3 WHERE id = $1 RETURNING {COLUMNS}",
            table.table()
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        table: StatusTable,
        id: DbId,
        input: &StatusDto,
    ) -> Result<Option<Status>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET
                code = COALESCE($2, code),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}",
            table.table()
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, table: StatusTable, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", table.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
