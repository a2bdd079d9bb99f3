//! Route definitions for colours.

use axum::routing::get;
use axum::Router;

use crate::handlers::colour;
use crate::state::AppState;

/// Routes mounted at `/api/colours`.
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
        .route("/", get(colour::list).post(colour::create))
        .route("/count", get(colour::count))
        .route(
            "/{id}",
            get(colour::get)
                .put(colour::update)
                .patch(colour::partial_update)
                .delete(colour::delete),
        )
}
