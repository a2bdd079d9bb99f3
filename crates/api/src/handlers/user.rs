//! Handlers for `/api/users`.
//!
//! User ids are UUIDs generated by the server on create.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::EntityUuid;
use souk_db::models::user::{UserDto, USER_FIELDS};
use souk_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "user";

/// POST /api/users
///
/// Logins are unique; a duplicate is rejected with 409.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UserDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = %row.id, "User created");
    Ok(created("users", row.id, UserDto::from(row)))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
    ValidatedJson(input): ValidatedJson<UserDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, UserRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(user_id = %id, "User updated");
    Ok(Json(UserDto::from(row)))
}

/// PATCH /api/users/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
    PatchJson(input): PatchJson<UserDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, UserRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(user_id = %id, "User patched");
    Ok(Json(UserDto::from(row)))
}

/// GET /api/users
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(USER_FIELDS)?;
    let page = params.page(USER_FIELDS)?;
    let rows = UserRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(UserDto::from)))
}

/// GET /api/users/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(USER_FIELDS)?;
    Ok(Json(UserRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/users/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
) -> AppResult<impl IntoResponse> {
    let row = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("User", id))?;
    Ok(Json(UserDto::from(row)))
}

/// DELETE /api/users/{id}
///
/// Cascades to the user's details, participations and sent messages.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<EntityUuid>,
) -> AppResult<impl IntoResponse> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = %id, deleted, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
