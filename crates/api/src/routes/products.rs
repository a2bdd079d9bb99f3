//! Route definitions for products.

use axum::routing::get;
use axum::Router;

use crate::handlers::{product, search};
use crate::state::AppState;

/// Routes mounted at `/api/products`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /count      -> count
/// GET    /_search    -> search::search_products
/// GET    /{id}       -> get
/// PUT    /{id}       -> update
/// PATCH  /{id}       -> partial_update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/count", get(product::count))
        .route("/_search", get(search::search_products))
        .route(
            "/{id}",
            get(product::get)
                .put(product::update)
                .patch(product::partial_update)
                .delete(product::delete),
        )
}
