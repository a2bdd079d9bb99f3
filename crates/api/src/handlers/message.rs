//! Handlers for `/api/messages`.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::EntityUuid;
use souk_db::models::message::{MessageDto, MESSAGE_FIELDS};
use souk_db::repositories::MessageRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "message";

/// POST /api/messages
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<MessageDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = MessageRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = %row.id, "Message created");
    Ok(created("messages", row.id, MessageDto::from(row)))
}

/// PUT /api/messages/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
    ValidatedJson(input): ValidatedJson<MessageDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, MessageRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(message_id = %id, "Message updated");
    Ok(Json(MessageDto::from(row)))
}

/// PATCH /api/messages/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
    PatchJson(input): PatchJson<MessageDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, MessageRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(message_id = %id, "Message patched");
    Ok(Json(MessageDto::from(row)))
}

/// GET /api/messages
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(MESSAGE_FIELDS)?;
    let page = params.page(MESSAGE_FIELDS)?;
    let rows = MessageRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(MessageDto::from)))
}

/// GET /api/messages/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(MESSAGE_FIELDS)?;
    Ok(Json(MessageRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/messages/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
) -> AppResult<impl IntoResponse> {
    let row = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Message", id))?;
    Ok(Json(MessageDto::from(row)))
}

/// DELETE /api/messages/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
) -> AppResult<impl IntoResponse> {
    let deleted = MessageRepo::delete(&state.pool, id).await?;
    tracing::info!(message_id = %id, deleted, "Message deleted");
    Ok(StatusCode::NO_CONTENT)
}
