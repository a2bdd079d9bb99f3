//! Route definitions for product categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::product_category;
use crate::state::AppState;

/// Routes mounted at `/api/product-categories`.
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
        .route("/", get(product_category::list).post(product_category::create))
        .route("/count", get(product_category::count))
        .route(
            "/{id}",
            get(product_category::get)
                .put(product_category::update)
                .patch(product_category::partial_update)
                .delete(product_category::delete),
        )
}
