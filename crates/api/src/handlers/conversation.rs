//! Handlers for `/api/conversations`.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::EntityUuid;
use souk_db::models::conversation::{ConversationDto, CONVERSATION_FIELDS};
use souk_db::repositories::ConversationRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "conversation";

/// POST /api/conversations
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ConversationDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = ConversationRepo::create(&state.pool, &input).await?;
    tracing::info!(conversation_id = %row.id, "Conversation created");
    Ok(created("conversations", row.id, ConversationDto::from(row)))
}

/// PUT /api/conversations/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
    ValidatedJson(input): ValidatedJson<ConversationDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ConversationRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(conversation_id = %id, "Conversation updated");
    Ok(Json(ConversationDto::from(row)))
}

/// PATCH /api/conversations/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
    PatchJson(input): PatchJson<ConversationDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ConversationRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(conversation_id = %id, "Conversation patched");
    Ok(Json(ConversationDto::from(row)))
}

/// GET /api/conversations
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(CONVERSATION_FIELDS)?;
    let page = params.page(CONVERSATION_FIELDS)?;
    let rows = ConversationRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(ConversationDto::from)))
}

/// GET /api/conversations/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(CONVERSATION_FIELDS)?;
    Ok(Json(ConversationRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/conversations/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
) -> AppResult<impl IntoResponse> {
    let row = ConversationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Conversation", id))?;
    Ok(Json(ConversationDto::from(row)))
}

/// DELETE /api/conversations/{id}
///
/// Removes the conversation's participants and messages too.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
) -> AppResult<impl IntoResponse> {
    let deleted = ConversationRepo::delete(&state.pool, id).await?;
    tracing::info!(conversation_id = %id, deleted, "Conversation deleted");
    Ok(StatusCode::NO_CONTENT)
}
