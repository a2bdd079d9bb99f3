//! Repository for the `product_categories` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::criteria::{count_matching, fetch_page};
use crate::models::product_category::{ProductCategory, ProductCategoryDto};

const COLUMNS: &str = "id, name, description, colour_id";

const TABLE: &str = "product_categories";

/// Provides CRUD operations for product categories.
pub struct ProductCategoryRepo;

impl ProductCategoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &ProductCategoryDto,
    ) -> Result<ProductCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_categories (name, description, colour_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.colour_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_categories WHERE id = $1");
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<ProductCategory>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductCategoryDto,
    ) -> Result<Option<ProductCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE product_categories SET name = $2, description = $3, colour_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.colour_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        input: &ProductCategoryDto,
    ) -> Result<Option<ProductCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE product_categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                colour_id = COALESCE($4, colour_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.colour_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
