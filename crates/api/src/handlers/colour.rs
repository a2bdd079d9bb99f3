//! Handlers for `/api/colours`.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::colour::{ColourDto, COLOUR_FIELDS};
use souk_db::repositories::ColourRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "colour";

/// POST /api/colours
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ColourDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = ColourRepo::create(&state.pool, &input).await?;
    tracing::info!(colour_id = %row.id, "Colour created");
    Ok(created("colours", row.id, ColourDto::from(row)))
}

/// PUT /api/colours/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<ColourDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ColourRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(colour_id = %id, "Colour updated");
    Ok(Json(ColourDto::from(row)))
}

/// PATCH /api/colours/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<ColourDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ColourRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(colour_id = %id, "Colour patched");
    Ok(Json(ColourDto::from(row)))
}

/// GET /api/colours
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(COLOUR_FIELDS)?;
    let page = params.page(COLOUR_FIELDS)?;
    let rows = ColourRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(ColourDto::from)))
}

/// GET /api/colours/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(COLOUR_FIELDS)?;
    Ok(Json(ColourRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/colours/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ColourRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Colour", id))?;
    Ok(Json(ColourDto::from(row)))
}

/// DELETE /api/colours/{id}
///
/// Categories using the colour keep existing with no colour.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ColourRepo::delete(&state.pool, id).await?;
    tracing::info!(colour_id = %id, deleted, "Colour deleted");
    Ok(StatusCode::NO_CONTENT)
}
