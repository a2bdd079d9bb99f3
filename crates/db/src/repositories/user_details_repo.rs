//! Repository for the `user_details` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::criteria::{count_matching, fetch_page};
use crate::models::user_details::{UserDetails, UserDetailsDto};

const COLUMNS: &str = "id, phone, address_line, city, country, birth_date, user_id";

const TABLE: &str = "user_details";

/// Provides CRUD operations for user details. One row per user
/// (`uq_user_details_user_id`).
pub struct UserDetailsRepo;

impl UserDetailsRepo {
    pub async fn create(pool: &PgPool, input: &UserDetailsDto) -> Result<UserDetails, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_details (phone, address_line, city, country, birth_date, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserDetails>(&query)
            .bind(&input.phone)
            .bind(&input.address_line)
            .bind(&input.city)
            .bind(&input.country)
            .bind(input.birth_date)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_details WHERE id = $1");
        sqlx::query_as::<_, UserDetails>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<UserDetails>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UserDetailsDto,
    ) -> Result<Option<UserDetails>, sqlx::Error> {
        let query = format!(
            "UPDATE user_details SET
                phone = $2, address_line = $3, city = $4, country = $5,
                birth_date = $6, user_id = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserDetails>(&query)
            .bind(id)
            .bind(&input.phone)
            .bind(&input.address_line)
            .bind(&input.city)
            .bind(&input.country)
            .bind(input.birth_date)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        input: &UserDetailsDto,
    ) -> Result<Option<UserDetails>, sqlx::Error> {
        let query = format!(
            "UPDATE user_details SET
                phone = COALESCE($2, phone),
                address_line = COALESCE($3, address_line),
                city = COALESCE($4, city),
                country = COALESCE($5, country),
                birth_date = COALESCE($6, birth_date),
                user_id = COALESCE($7, user_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserDetails>(&query)
            .bind(id)
            .bind(&input.phone)
            .bind(&input.address_line)
            .bind(&input.city)
            .bind(&input.country)
            .bind(input.birth_date)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_details WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
