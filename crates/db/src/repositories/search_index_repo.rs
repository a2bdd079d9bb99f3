//! Repository for the `search_documents` mirror.
//!
//! Only the background indexer writes here; `_search` endpoints read.

use souk_core::paging::{Page, PageRequest};
use sqlx::PgPool;

use crate::models::search::SearchDocument;

/// Provides upsert / delete / full-text query over indexed documents.
pub struct SearchIndexRepo;

impl SearchIndexRepo {
    /// Insert or replace the document for `(entity_type, entity_id)`.
    pub async fn upsert(
        pool: &PgPool,
        entity_type: &str,
        entity_id: &str,
        document: &serde_json::Value,
        content: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO search_documents (entity_type, entity_id, document, content)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (entity_type, entity_id) DO UPDATE SET
                document = EXCLUDED.document,
                content = EXCLUDED.content,
                indexed_at = NOW()",
        )
        .bind(entity_type)
        .bind(entity_id)
        .bind(document)
        .bind(content)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a document. Returns `true` if one was indexed.
    pub async fn delete(
        pool: &PgPool,
        entity_type: &str,
        entity_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM search_documents WHERE entity_type = $1 AND entity_id = $2")
                .bind(entity_type)
                .bind(entity_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Drop every document of `entity_type` whose id is not in `entity_ids`.
    ///
    /// Returns the number of documents removed.
    pub async fn retain(
        pool: &PgPool,
        entity_type: &str,
        entity_ids: &[String],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM search_documents
             WHERE entity_type = $1 AND NOT (entity_id = ANY($2))",
        )
        .bind(entity_type)
        .bind(entity_ids)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Number of documents indexed for an entity type.
    pub async fn count(pool: &PgPool, entity_type: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM search_documents WHERE entity_type = $1")
            .bind(entity_type)
            .fetch_one(pool)
            .await
    }

    /// Fetch a single indexed document.
    pub async fn find(
        pool: &PgPool,
        entity_type: &str,
        entity_id: &str,
    ) -> Result<Option<serde_json::Value>, sqlx::Error> {
        sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT document FROM search_documents WHERE entity_type = $1 AND entity_id = $2",
        )
        .bind(entity_type)
        .bind(entity_id)
        .fetch_optional(pool)
        .await
    }

    /// Run a prepared `tsquery` against one entity type.
    ///
    /// Hits are ordered by rank, then by id (numeric ids sort numerically).
    /// `page.sort` is ignored.
    pub async fn search(
        pool: &PgPool,
        entity_type: &str,
        tsquery: &str,
        page: &PageRequest,
    ) -> Result<Page<serde_json::Value>, sqlx::Error> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM search_documents
             WHERE entity_type = $1 AND search_vector @@ to_tsquery('simple', $2)",
        )
        .bind(entity_type)
        .bind(tsquery)
        .fetch_one(pool)
        .await?;

        let rows = sqlx::query_as::<_, SearchDocument>(
            "SELECT entity_id, document FROM search_documents
             WHERE entity_type = $1 AND search_vector @@ to_tsquery('simple', $2)
             ORDER BY ts_rank(search_vector, to_tsquery('simple', $2)) DESC,
                      length(entity_id), entity_id
             LIMIT $3 OFFSET $4",
        )
        .bind(entity_type)
        .bind(tsquery)
        .bind(page.size)
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(Page {
            items: rows.into_iter().map(|row| row.document).collect(),
            total,
            page: page.page,
            size: page.size,
        })
    }
}
