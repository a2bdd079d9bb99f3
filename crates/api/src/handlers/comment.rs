//! Handlers for `/api/comments`.
//!
//! Comments are mirrored into the search index: every successful write
//! publishes a change notice after the database call returns.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::comment::{CommentDto, COMMENT_FIELDS};
use souk_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::search::publish_change;
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "comment";

/// POST /api/comments
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CommentDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = CommentRepo::create(&state.pool, &input).await?;
    let id = row.id;
    let comment = CommentDto::from(row);
    publish_change::<CommentDto>(&state.event_bus, id);

    tracing::info!(comment_id = id, product_id = ?comment.product_id, "Comment created");
    Ok(created("comments", id, comment))
}

/// PUT /api/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<CommentDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, CommentRepo::update(&state.pool, id, &input).await?)?;
    let comment = CommentDto::from(row);
    publish_change::<CommentDto>(&state.event_bus, id);

    tracing::info!(comment_id = id, "Comment updated");
    Ok(Json(comment))
}

/// PATCH /api/comments/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<CommentDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, CommentRepo::partial_update(&state.pool, id, &input).await?)?;
    let comment = CommentDto::from(row);
    publish_change::<CommentDto>(&state.event_bus, id);

    tracing::info!(comment_id = id, "Comment patched");
    Ok(Json(comment))
}

/// GET /api/comments
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(COMMENT_FIELDS)?;
    let page = params.page(COMMENT_FIELDS)?;
    let comments = CommentRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, comments.map(CommentDto::from)))
}

/// GET /api/comments/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(COMMENT_FIELDS)?;
    Ok(Json(CommentRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/comments/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Comment", id))?;
    Ok(Json(CommentDto::from(comment)))
}

/// DELETE /api/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CommentRepo::delete(&state.pool, id).await?;
    publish_change::<CommentDto>(&state.event_bus, id);

    tracing::info!(comment_id = id, deleted, "Comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
