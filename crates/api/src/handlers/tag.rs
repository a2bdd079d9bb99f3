//! Handlers for `/api/tags`.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::tag::{TagDto, TAG_FIELDS};
use souk_db::repositories::TagRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "tag";

/// POST /api/tags
///
/// Duplicate names are rejected with 409 (`uq_tags_name`).
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<TagDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let tag = TagRepo::create(&state.pool, &input).await?;
    tracing::info!(tag_id = tag.id, "Tag created");
    Ok(created("tags", tag.id, TagDto::from(tag)))
}

/// PUT /api/tags/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<TagDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let tag = updated(ENTITY, TagRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(tag_id = id, "Tag updated");
    Ok(Json(TagDto::from(tag)))
}

/// PATCH /api/tags/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<TagDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let tag = updated(ENTITY, TagRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(tag_id = id, "Tag patched");
    Ok(Json(TagDto::from(tag)))
}

/// GET /api/tags
///
/// Filterable by `id`, `name` and `productId` (tags attached to a product).
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(TAG_FIELDS)?;
    let page = params.page(TAG_FIELDS)?;
    let tags = TagRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, tags.map(TagDto::from)))
}

/// GET /api/tags/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(TAG_FIELDS)?;
    Ok(Json(TagRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/tags/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Tag", id))?;
    Ok(Json(TagDto::from(tag)))
}

/// DELETE /api/tags/{id}
///
/// Also detaches the tag from every product.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TagRepo::delete(&state.pool, id).await?;
    tracing::info!(tag_id = id, deleted, "Tag deleted");
    Ok(StatusCode::NO_CONTENT)
}
