//! Route definitions for product comments.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comment, search};
use crate::state::AppState;

/// Routes mounted at `/api/comments`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /count      -> count
/// GET    /_search    -> search::search_comments
/// GET    /{id}       -> get
/// PUT    /{id}       -> update
/// PATCH  /{id}       -> partial_update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comment::list).post(comment::create))
        .route("/count", get(comment::count))
        .route("/_search", get(search::search_comments))
        .route(
            "/{id}",
            get(comment::get)
                .put(comment::update)
                .patch(comment::partial_update)
                .delete(comment::delete),
        )
}
