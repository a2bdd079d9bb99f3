//! Full-text search over the index mirror, and the helpers handlers use
//! to keep it up to date.
//!
//! Writes are mirrored asynchronously: handlers publish an
//! [`EntityEvent`] naming the entity after the database commit, and the
//! background [`SearchIndexer`](souk_events::SearchIndexer) reloads it.
//! A `_search` issued right after a write may not see it yet.

use axum::extract::{OriginalUri, State};
use axum::response::Response;
use souk_core::criteria::FieldSpec;
use souk_core::paging::Page;
use souk_core::search::build_prefix_tsquery;
use souk_db::models::comment::{CommentDto, COMMENT_FIELDS};
use souk_db::models::product::{ProductDto, PRODUCT_FIELDS};
use souk_db::models::search::Searchable;
use souk_db::repositories::SearchIndexRepo;
use souk_events::{EntityEvent, EventBus};

use crate::error::AppResult;
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

/// Queue a reindex of one entity after its write has committed.
pub(crate) fn publish_change<T: Searchable>(bus: &EventBus, id: impl ToString) {
    bus.publish(EntityEvent::changed::<T>(id));
}

/// GET /api/products/_search?query=
pub async fn search_products(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    search::<ProductDto>(&state, &uri, &params, PRODUCT_FIELDS).await
}

/// GET /api/comments/_search?query=
pub async fn search_comments(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    search::<CommentDto>(&state, &uri, &params, COMMENT_FIELDS).await
}

async fn search<T: Searchable>(
    state: &AppState,
    uri: &axum::http::Uri,
    params: &ListParams,
    fields: &[FieldSpec],
) -> AppResult<Response> {
    // Sort names are still checked so typos are reported, but hits are
    // always ranked by relevance.
    let page = params.page(fields)?;

    let Some(tsquery) = params.get("query").and_then(build_prefix_tsquery) else {
        let empty: Page<serde_json::Value> = Page {
            items: Vec::new(),
            total: 0,
            page: page.page,
            size: page.size,
        };
        return Ok(paged_response(uri, empty));
    };

    let hits = SearchIndexRepo::search(&state.pool, T::ENTITY_TYPE, &tsquery, &page).await?;
    Ok(paged_response(uri, hits))
}
