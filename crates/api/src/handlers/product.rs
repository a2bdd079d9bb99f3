//! Handlers for `/api/products`.
//!
//! Products carry their tag ids (`tagIds`). Single-product responses always
//! include them; list responses only when `eagerload=true`. Writes are
//! mirrored into the search index.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use souk_core::error::CoreError;
use souk_core::types::DbId;
use souk_db::models::comment::CommentDto;
use souk_db::models::product::{Product, ProductDto, PRODUCT_FIELDS};
use souk_db::repositories::ProductRepo;
use souk_db::DbPool;

use crate::error::AppResult;
use crate::extract::{IdPath, PatchJson, ValidatedJson};
use crate::handlers::search::publish_change;
use crate::handlers::{created, ensure_new, ensure_same_id, updated};
use crate::pagination::paged_response;
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "product";

/// Attach the stored tag ids to a product row.
async fn with_tags(pool: &DbPool, product: Product) -> Result<ProductDto, sqlx::Error> {
    let tag_ids = ProductRepo::tag_ids(pool, product.id).await?;
    Ok(ProductDto::from(product).with_tags(tag_ids))
}

/// POST /api/products
///
/// Unknown `tagIds` or `productCategoryId` reject the whole request (400).
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> AppResult<Response> {
    ensure_new(ENTITY, input.id)?;
    let row = ProductRepo::create(&state.pool, &input).await?;
    let id = row.id;
    let product = with_tags(&state.pool, row).await?;
    publish_change::<ProductDto>(&state.event_bus, id);

    tracing::info!(product_id = id, tags = ?product.tag_ids, "Product created");
    Ok(created("products", id, product))
}

/// PUT /api/products/{id}
///
/// Replaces the tag set as well; omitting `tagIds` clears it.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ProductRepo::update(&state.pool, id, &input).await?)?;
    let product = with_tags(&state.pool, row).await?;
    publish_change::<ProductDto>(&state.event_bus, id);

    tracing::info!(product_id = id, "Product updated");
    Ok(Json(product))
}

/// PATCH /api/products/{id}
///
/// `tagIds`, when present, replaces the tag set.
pub async fn partial_update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    PatchJson(input): PatchJson<ProductDto>,
) -> AppResult<impl IntoResponse> {
    ensure_same_id(ENTITY, &id, input.id.as_ref())?;
    let row = updated(ENTITY, ProductRepo::partial_update(&state.pool, id, &input).await?)?;
    let product = with_tags(&state.pool, row).await?;
    publish_change::<ProductDto>(&state.event_bus, id);

    tracing::info!(product_id = id, "Product patched");
    Ok(Json(product))
}

/// GET /api/products
///
/// `eagerload=true` fills `tagIds` on every element.
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: ListParams,
) -> AppResult<Response> {
    let criteria = params.criteria(PRODUCT_FIELDS)?;
    let page = params.page(PRODUCT_FIELDS)?;
    let rows = ProductRepo::list(&state.pool, &criteria, &page).await?;

    if !params.flag("eagerload") {
        return Ok(paged_response(&uri, rows.map(ProductDto::from)));
    }

    let ids: Vec<DbId> = rows.items.iter().map(|p| p.id).collect();
    let mut tags = ProductRepo::tag_ids_for(&state.pool, &ids).await?;
    let products = rows.map(|row| {
        let tag_ids = tags.remove(&row.id).unwrap_or_default();
        ProductDto::from(row).with_tags(tag_ids)
    });
    Ok(paged_response(&uri, products))
}

/// GET /api/products/count
pub async fn count(
    State(state): State<AppState>,
    params: ListParams,
) -> AppResult<impl IntoResponse> {
    let criteria = params.criteria(PRODUCT_FIELDS)?;
    Ok(Json(ProductRepo::count(&state.pool, &criteria).await?))
}

/// GET /api/products/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Product", id))?;
    Ok(Json(with_tags(&state.pool, row).await?))
}

/// DELETE /api/products/{id}
///
/// Images and comments go with the product; the comments are also
/// evicted from the search index.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = ProductRepo::delete(&state.pool, id).await?;

    publish_change::<ProductDto>(&state.event_bus, id);
    let comment_ids = removed.as_deref().unwrap_or_default();
    for comment_id in comment_ids {
        publish_change::<CommentDto>(&state.event_bus, comment_id);
    }

    tracing::info!(
        product_id = id,
        deleted = removed.is_some(),
        comments = comment_ids.len(),
        "Product deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
