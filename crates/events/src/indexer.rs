//! Search index mirror service.
//!
//! [`SearchIndexer`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! and brings the `search_documents` row of every changed entity in line
//! with the primary tables. It runs as a long-lived background task and
//! shuts down when the bus sender is dropped.
//!
//! Each event only names an entity. Handling it reloads the current row:
//! a row that exists is (re)indexed, a missing one is removed. Since
//! events are published after the write commits, the last event for an
//! entity always observes its final state.

use souk_core::search::{is_searchable, SEARCHABLE_ENTITY_TYPES};
use souk_core::types::DbId;
use souk_db::models::comment::CommentDto;
use souk_db::models::product::ProductDto;
use souk_db::models::search::Searchable;
use souk_db::repositories::{CommentRepo, ProductRepo, SearchIndexRepo};
use souk_db::DbPool;
use tokio::sync::broadcast;

use crate::bus::EntityEvent;

/// Why the index could not be brought up to date.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to serialize {entity_type} document: {source}")]
    Serialize {
        entity_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Background service that keeps the search index in step with writes.
pub struct SearchIndexer;

impl SearchIndexer {
    /// Run the indexing loop until the channel closes.
    ///
    /// When the receiver falls behind and events are dropped, the whole
    /// index is reconciled against the primary tables.
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<EntityEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = Self::apply(&pool, &event).await {
                        tracing::error!(
                            error = %e,
                            entity_type = %event.entity_type,
                            entity_id = %event.entity_id,
                            "Failed to update search index"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Search indexer lagged, reconciling index");
                    if let Err(e) = Self::reconcile(&pool).await {
                        tracing::error!(error = %e, "Failed to reconcile search index");
                    }
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, search indexer shutting down");
                    break;
                }
            }
        }
    }

    /// Apply a single event to the index.
    ///
    /// Events for entity types that are not mirrored, or with ids that
    /// cannot name a row, are ignored.
    pub async fn apply(pool: &DbPool, event: &EntityEvent) -> Result<(), IndexError> {
        let entity_type = event.entity_type.as_str();
        if !is_searchable(entity_type) {
            tracing::warn!(%entity_type, "Ignoring event for unindexed entity type");
            return Ok(());
        }
        let Ok(id) = event.entity_id.parse::<DbId>() else {
            tracing::warn!(%entity_type, entity_id = %event.entity_id, "Ignoring event with malformed id");
            return Ok(());
        };
        Self::refresh(pool, entity_type, id).await
    }

    /// Rebuild the index from the primary tables.
    ///
    /// Documents whose entity no longer exists are dropped and every
    /// existing entity is indexed again.
    pub async fn reconcile(pool: &DbPool) -> Result<(), IndexError> {
        for &entity_type in SEARCHABLE_ENTITY_TYPES {
            let ids = Self::primary_ids(pool, entity_type).await?;
            let keys: Vec<String> = ids.iter().map(ToString::to_string).collect();
            let removed = SearchIndexRepo::retain(pool, entity_type, &keys).await?;

            for &id in &ids {
                Self::refresh(pool, entity_type, id).await?;
            }
            tracing::info!(%entity_type, indexed = ids.len(), removed, "Search index reconciled");
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn refresh(pool: &DbPool, entity_type: &str, id: DbId) -> Result<(), IndexError> {
        if entity_type == ProductDto::ENTITY_TYPE {
            let product = match ProductRepo::find_by_id(pool, id).await? {
                Some(row) => {
                    let tag_ids = ProductRepo::tag_ids(pool, id).await?;
                    Some(ProductDto::from(row).with_tags(tag_ids))
                }
                None => None,
            };
            Self::store(pool, id, product).await
        } else if entity_type == CommentDto::ENTITY_TYPE {
            let comment = CommentRepo::find_by_id(pool, id).await?.map(CommentDto::from);
            Self::store(pool, id, comment).await
        } else {
            Ok(())
        }
    }

    /// Index the current state of an entity, or remove it when gone.
    async fn store<T: Searchable>(
        pool: &DbPool,
        id: DbId,
        current: Option<T>,
    ) -> Result<(), IndexError> {
        let entity_id = id.to_string();
        let Some(dto) = current else {
            let removed = SearchIndexRepo::delete(pool, T::ENTITY_TYPE, &entity_id).await?;
            tracing::debug!(entity_type = T::ENTITY_TYPE, %entity_id, removed, "Removed document from index");
            return Ok(());
        };

        let document = serde_json::to_value(&dto).map_err(|source| IndexError::Serialize {
            entity_type: T::ENTITY_TYPE,
            source,
        })?;
        SearchIndexRepo::upsert(pool, T::ENTITY_TYPE, &entity_id, &document, &dto.search_text())
            .await?;
        tracing::debug!(entity_type = T::ENTITY_TYPE, %entity_id, "Indexed document");
        Ok(())
    }

    async fn primary_ids(pool: &DbPool, entity_type: &str) -> Result<Vec<DbId>, sqlx::Error> {
        if entity_type == ProductDto::ENTITY_TYPE {
            ProductRepo::all_ids(pool).await
        } else if entity_type == CommentDto::ENTITY_TYPE {
            CommentRepo::all_ids(pool).await
        } else {
            Ok(Vec::new())
        }
    }
}
