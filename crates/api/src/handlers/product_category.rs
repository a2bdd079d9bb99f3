//! Handlers for `/api/product-categories`.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::product_category::{ProductCategoryDto, PRODUCT_CATEGORY_FIELDS};
use souk_db::repositories::ProductCategoryRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "productCategory";

/// POST /api/product-categories
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductCategoryDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = ProductCategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(product_category_id = %row.id, "ProductCategory created");
    Ok(created("product-categories", row.id, ProductCategoryDto::from(row)))
}

/// PUT /api/product-categories/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<ProductCategoryDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ProductCategoryRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(product_category_id = %id, "ProductCategory updated");
    Ok(Json(ProductCategoryDto::from(row)))
}

/// PATCH /api/product-categories/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<ProductCategoryDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ProductCategoryRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(product_category_id = %id, "ProductCategory patched");
    Ok(Json(ProductCategoryDto::from(row)))
}

/// GET /api/product-categories
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(PRODUCT_CATEGORY_FIELDS)?;
    let page = params.page(PRODUCT_CATEGORY_FIELDS)?;
    let rows = ProductCategoryRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(ProductCategoryDto::from)))
}

/// GET /api/product-categories/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(PRODUCT_CATEGORY_FIELDS)?;
    Ok(Json(ProductCategoryRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/product-categories/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ProductCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("ProductCategory", id))?;
    Ok(Json(ProductCategoryDto::from(row)))
}

/// DELETE /api/product-categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProductCategoryRepo::delete(&state.pool, id).await?;
    tracing::info!(product_category_id = %id, deleted, "ProductCategory deleted");
    Ok(StatusCode::NO_CONTENT)
}
