//! Handlers for `/api/user-details`.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::user_details::{UserDetailsDto, USER_DETAILS_FIELDS};
use souk_db::repositories::UserDetailsRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "userDetails";

/// POST /api/user-details
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UserDetailsDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = UserDetailsRepo::create(&state.pool, &input).await?;
    tracing::info!(user_details_id = %row.id, "UserDetails created");
    Ok(created("user-details", row.id, UserDetailsDto::from(row)))
}

/// PUT /api/user-details/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UserDetailsDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, UserDetailsRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(user_details_id = %id, "UserDetails updated");
    Ok(Json(UserDetailsDto::from(row)))
}

/// PATCH /api/user-details/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<UserDetailsDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, UserDetailsRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(user_details_id = %id, "UserDetails patched");
    Ok(Json(UserDetailsDto::from(row)))
}

/// GET /api/user-details
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(USER_DETAILS_FIELDS)?;
    let page = params.page(USER_DETAILS_FIELDS)?;
    let rows = UserDetailsRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(UserDetailsDto::from)))
}

/// GET /api/user-details/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(USER_DETAILS_FIELDS)?;
    Ok(Json(UserDetailsRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/user-details/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = UserDetailsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("UserDetails", id))?;
    Ok(Json(UserDetailsDto::from(row)))
}

/// DELETE /api/user-details/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = UserDetailsRepo::delete(&state.pool, id).await?;
    tracing::info!(user_details_id = %id, deleted, "UserDetails deleted");
    Ok(StatusCode::NO_CONTENT)
}
