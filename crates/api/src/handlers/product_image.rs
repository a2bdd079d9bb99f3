//! Handlers for `/api/product-images`.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::product_image::{ProductImageDto, PRODUCT_IMAGE_FIELDS};
use souk_db::repositories::ProductImageRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "productImage";

/// POST /api/product-images
///
/// `productId` must reference an existing product (400 otherwise).
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductImageDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = ProductImageRepo::create(&state.pool, &input).await?;
    tracing::info!(product_image_id = %row.id, "ProductImage created");
    Ok(created("product-images", row.id, ProductImageDto::from(row)))
}

/// PUT /api/product-images/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<ProductImageDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ProductImageRepo::update(&state.pool, id, &input).await?)?;
    tracing::info!(product_image_id = %id, "ProductImage updated");
    Ok(Json(ProductImageDto::from(row)))
}

/// PATCH /api/product-images/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<ProductImageDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ProductImageRepo::partial_update(&state.pool, id, &input).await?)?;
    tracing::info!(product_image_id = %id, "ProductImage patched");
    Ok(Json(ProductImageDto::from(row)))
}

/// GET /api/product-images
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(PRODUCT_IMAGE_FIELDS)?;
    let page = params.page(PRODUCT_IMAGE_FIELDS)?;
    let rows = ProductImageRepo::list(&state.pool, &criteria, &page).await?;
    Ok(paged_response(&uri, rows.map(ProductImageDto::from)))
}

/// GET /api/product-images/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(PRODUCT_IMAGE_FIELDS)?;
    Ok(Json(ProductImageRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/product-images/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ProductImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("ProductImage", id))?;
    Ok(Json(ProductImageDto::from(row)))
}

/// DELETE /api/product-images/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProductImageRepo::delete(&state.pool, id).await?;
    tracing::info!(product_image_id = %id, deleted, "ProductImage deleted");
    Ok(StatusCode::NO_CONTENT)
}
