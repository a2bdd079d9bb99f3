//! Repository for the `product_images` table.

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::criteria::{count_matching, fetch_page};
use crate::models::product_image::{ProductImage, ProductImageDto};

const COLUMNS: &str = "id, url, alt_text, sort_order, product_id";

const TABLE: &str = "product_images";

/// Provides CRUD operations for product images.
pub struct ProductImageRepo;

impl ProductImageRepo {
    pub async fn create(
        pool: &PgPool,
        input: &ProductImageDto,
    ) -> Result<ProductImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_images (url, alt_text, sort_order, product_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(&input.url)
            .bind(&input.alt_text)
            .bind(input.sort_order)
            .bind(input.product_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_images WHERE id = $1");
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<ProductImage>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductImageDto,
    ) -> Result<Option<ProductImage>, sqlx::Error> {
        let query = format!(
            "UPDATE product_images SET url = $2, alt_text = $3, sort_order = $4, product_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(id)
            .bind(&input.url)
            .bind(&input.alt_text)
            .bind(input.sort_order)
            .bind(input.product_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        input: &ProductImageDto,
    ) -> Result<Option<ProductImage>, sqlx::Error> {
        let query = format!(
            "UPDATE product_images SET
                url = COALESCE($2, url),
                alt_text = COALESCE($3, alt_text),
                sort_order = COALESCE($4, sort_order),
                product_id = COALESCE($5, product_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(id)
            .bind(&input.url)
            .bind(&input.alt_text)
            .bind(input.sort_order)
            .bind(input.product_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
