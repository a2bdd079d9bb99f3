//! Handlers for `/api/participants`.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::participant::{ParticipantDto, PARTICIPANT_FIELDS};
use souk_db::repositories::ParticipantRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "participant";

/// POST /api/participants
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ParticipantDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = ParticipantRepo::create(&state.pool, &input).await?;
    tracing::info!(participant_id = %row.id, "Participant created");
    Ok(created("participants", row.id, ParticipantDto::from(row)))
}

/// PUT /api/participants/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<ParticipantDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ParticipantRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(participant_id = %id, "Participant updated");
    Ok(Json(ParticipantDto::from(row)))
}

/// PATCH /api/participants/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<ParticipantDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ParticipantRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(participant_id = %id, "Participant patched");
    Ok(Json(ParticipantDto::from(row)))
}

/// GET /api/participants
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(PARTICIPANT_FIELDS)?;
    let page = params.page(PARTICIPANT_FIELDS)?;
    let rows = ParticipantRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(ParticipantDto::from)))
}

/// GET /api/participants/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(PARTICIPANT_FIELDS)?;
    Ok(Json(ParticipantRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/participants/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ParticipantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Participant", id))?;
    Ok(Json(ParticipantDto::from(row)))
}

/// DELETE /api/participants/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ParticipantRepo::delete(&state.pool, id).await?;
    tracing::info!(participant_id = %id, deleted, "Participant deleted");
    Ok(StatusCode::NO_CONTENT)
}
