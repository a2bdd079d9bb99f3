//! Repository for the `users` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::EntityUuid;
use sqlx::PgPool;
use uuid::Uuid;

use crate::criteria::{count_matching, fetch_page};
use crate::models::user::{User, UserDto};

const COLUMNS: &str = "id, login, email, first_name, last_name, activated";

const TABLE: &str = "users";

/// Provides CRUD operations for users. IDs are generated on insert.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user with a fresh v4 UUID. Duplicate logins violate `uq_users_login`.
    pub async fn create(pool: &PgPool, input: &UserDto) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, login, email, first_name, last_name, activated)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.login)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.activated)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: EntityUuid) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<User>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        id: EntityUuid,
        input: &UserDto,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                login = $2, email = $3, first_name = $4, last_name = $5, activated = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.login)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.activated)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: EntityUuid,
        input: &UserDto,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                login = COALESCE($2, login),
                email = COALESCE($3, email),
                first_name = COALESCE($4, first_name),
                last_name = COALESCE($5, last_name),
                activated = COALESCE($6, activated)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.login)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.activated)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user. Details, participations and sent messages cascade;
    /// authored comments keep their text with `user_id` cleared.
    pub async fn delete(pool: &PgPool, id: EntityUuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
