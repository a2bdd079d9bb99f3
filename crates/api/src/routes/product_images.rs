//! Route definitions for product images.

use axum::routing::get;
use axum::Router;

use crate::handlers::product_image;
use crate::state::AppState;

/// Routes mounted at `/api/product-images`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /count      -> count
/// GET    /{id}       -> get
/// PUT    /{id}       -> update
/// PATCH  /{id}       -> partial_update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product_image::list).post(product_image::create))
        .route("/count", get(product_image::count))
        .route(
            "/{id}",
            get(product_image::get)
                .put(product_image::update)
                .patch(product_image::partial_update)
                .delete(product_image::delete),
        )
}
