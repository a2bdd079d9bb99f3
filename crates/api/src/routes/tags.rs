//! Route definitions for tags.

use axum::routing::get;
use axum::Router;

use crate::handlers::tag;
use crate::state::AppState;

/// Routes mounted at `/api/tags`.
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
        .route("/", get(tag::list).post(tag::create))
        .route("/count", get(tag::count))
        .route(
            "/{id}",
            get(tag::get)
                .put(tag::update)
                .patch(tag::partial_update)
                .delete(tag::delete),
        )
}
