//! Repository for the `products` table and its `rel_product__tag` join table.

use std::collections::HashMap;

use souk_core::criteria::Criteria;
use souk_core::paging::{Page, PageRequest};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::criteria::{count_matching, fetch_page};
use crate::models::product::{Product, ProductDto};

const COLUMNS: &str = "id, name, description, price, available, product_category_id";

const TABLE: &str = "products";

/// Provides CRUD operations for products, including tag associations.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product and its tag associations in one transaction.
    pub async fn create(pool: &PgPool, input: &ProductDto) -> Result<Product, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO products (name, description, price, available, product_category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.available)
            .bind(input.product_category_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(tag_ids) = &input.tag_ids {
            Self::set_tags_inner(&mut tx, product.id, tag_ids).await?;
        }

        tx.commit().await?;
        Ok(product)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        criteria: &Criteria,
        page: &PageRequest,
    ) -> Result<Page<Product>, sqlx::Error> {
        fetch_page(pool, TABLE, COLUMNS, criteria, page).await
    }

    pub async fn count(pool: &PgPool, criteria: &Criteria) -> Result<i64, sqlx::Error> {
        count_matching(pool, TABLE, criteria).await
    }

    /// Replace every column and the full tag set (`None` clears the tags).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductDto,
    ) -> Result<Option<Product>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE products SET
                name = $2, description = $3, price = $4, available = $5,
                product_category_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.available)
            .bind(input.product_category_id)
            .fetch_optional(&mut *tx)
            .await?;

        if product.is_some() {
            let tag_ids = input.tag_ids.as_deref().unwrap_or_default();
            Self::set_tags_inner(&mut tx, id, tag_ids).await?;
        }

        tx.commit().await?;
        Ok(product)
    }

    /// Apply only the non-`None` fields. Tags are replaced only when supplied.
    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        input: &ProductDto,
    ) -> Result<Option<Product>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                available = COALESCE($5, available),
                product_category_id = COALESCE($6, product_category_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.available)
            .bind(input.product_category_id)
            .fetch_optional(&mut *tx)
            .await?;

        if let (Some(_), Some(tag_ids)) = (&product, &input.tag_ids) {
            Self::set_tags_inner(&mut tx, id, tag_ids).await?;
        }

        tx.commit().await?;
        Ok(product)
    }

    /// Delete a product together with its comments.
    ///
    /// Returns the ids of the removed comments, or `None` when no product
    /// has this id. The product row is locked first, so a comment added
    /// concurrently either lands before the lock and is returned here, or
    /// fails its foreign key. Images and tag associations cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Vec<DbId>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked = sqlx::query_scalar::<_, DbId>("SELECT id FROM products WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let mut comment_ids = sqlx::query_scalar::<_, DbId>(
            "DELETE FROM comments WHERE product_id = $1 RETURNING id",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;
        comment_ids.sort_unstable();

        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(comment_ids))
    }

    /// Every product id, ascending.
    pub async fn all_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM products ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Tag ids attached to one product, ascending.
    pub async fn tag_ids(pool: &PgPool, product_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT tag_id FROM rel_product__tag WHERE product_id = $1 ORDER BY tag_id",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await
    }

    /// Tag ids for a batch of products, keyed by product id.
    ///
    /// Products without tags are absent from the map.
    pub async fn tag_ids_for(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<DbId>>, sqlx::Error> {
        let rows: Vec<(DbId, DbId)> = sqlx::query_as(
            "SELECT product_id, tag_id FROM rel_product__tag
             WHERE product_id = ANY($1)
             ORDER BY product_id, tag_id",
        )
        .bind(product_ids)
        .fetch_all(pool)
        .await?;

        let mut map: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for (product_id, tag_id) in rows {
            map.entry(product_id).or_default().push(tag_id);
        }
        Ok(map)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Replace tag associations within an existing transaction.
    async fn set_tags_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        product_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM rel_product__tag WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut **tx)
            .await?;

        // Duplicate ids in the request collapse to one row.
        for &tag_id in tag_ids {
            sqlx::query(
                "INSERT INTO rel_product__tag (product_id, tag_id) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(product_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
