//! Handlers shared by `/api/order-statuses`, `/api/invoice-statuses` and
//! `/api/shipment-statuses`.
//!
//! The three lookups are identical apart from their table, so each handler
//! is generic over a [`StatusResource`] marker chosen at routing time.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::status::{StatusDto, StatusTable, STATUS_FIELDS};
use souk_db::repositories::StatusRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

/// Binds a status table to its URL segment.
pub trait StatusResource: Send + Sync + 'static {
    const TABLE: StatusTable;
    /// Resource segment under `/api`.
    const PATH: &'static str;
}

pub struct OrderStatuses;
pub struct InvoiceStatuses;
pub struct ShipmentStatuses;

impl StatusResource for OrderStatuses {
    const TABLE: StatusTable = StatusTable::Order;
    const PATH: &'static str = "order-statuses";
}

impl StatusResource for InvoiceStatuses {
    const TABLE: StatusTable = StatusTable::Invoice;
    const PATH: &'static str = "invoice-statuses";
}

impl StatusResource for ShipmentStatuses {
    const TABLE: StatusTable = StatusTable::Shipment;
    const PATH: &'static str = "shipment-statuses";
}

/// POST /api/{statuses}
pub async fn create<R: StatusResource>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<StatusDto>,
) -> AppResult<Response> {
    let entity = R::TABLE.entity_name();
    ensure_new(entity, input.id)?;
    let row = StatusRepo::create(&state.pool, R::TABLE, &input).await?;
    tracing::info!(table = R::TABLE.table(), status_id = row.id, code = %row.code, "Status created");
    Ok(created(R::PATH, row.id, StatusDto::from(row)))
}

/// PUT /api/{statuses}/{id}
pub async fn update<R: StatusResource>(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<StatusDto>,
) -> AppResult<impl IntoResponse> {
    let entity = R::TABLE.entity_name();
    ensure_same_id(entity, &id, input.id.as_ref())?;
    let row = updated(entity, StatusRepo::update(&state.pool, R::TABLE, id, &input).await?)?;
    tracing::info!(table = R::TABLE.table(), status_id = id, "Status updated");
    Ok(Json(StatusDto::from(row)))
}

/// PATCH /api/{statuses}/{id}
pub async fn partial_update<R: StatusResource>(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<StatusDto>,
) -> AppResult<impl IntoResponse> {
    let entity = R::TABLE.entity_name();
    ensure_same_id(entity, &id, input.id.as_ref())?;
    let row = updated(
        entity,
        StatusRepo::partial_update(&state.pool, R::TABLE, id, &input).await?,
    )?;
    tracing::info!(table = R::TABLE.table(), status_id = id, "Status patched");
    Ok(Json(StatusDto::from(row)))
}

/// GET /api/{statuses}
pub async fn list<R: StatusResource>(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(STATUS_FIELDS)?;
    let page = params.page(STATUS_FIELDS)?;
    let rows = StatusRepo::list(&state.pool, R::TABLE, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(StatusDto::from)))
}

/// GET /api/{statuses}/count
pub async fn count<R: StatusResource>(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(STATUS_FIELDS)?;
    Ok(Json(StatusRepo::count(&state.pool, R::TABLE, &criteria).await?))
}

/// GET /api/{statuses}/{id}
pub async fn get<R: StatusResource>(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = StatusRepo::find_by_id(&state.pool, R::TABLE, id)
        .await?
        .ok_or(CoreError::not_found(R::TABLE.entity_name(), id))?;
    Ok(Json(StatusDto::from(row)))
}

/// DELETE /api/{statuses}/{id}
pub async fn delete<R: StatusResource>(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = StatusRepo::delete(&state.pool, R::TABLE, id).await?;
    tracing::info!(table = R::TABLE.table(), status_id = id, deleted, "Status deleted");
    Ok(StatusCode::NO_CONTENT)
}
