//! Route definitions for messages.

use axum::routing::get;
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/api/messages`.
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
        .route("/", get(message::list).post(message::create))
        .route("/count", get(message::count))
        .route(
            "/{id}",
            get(message::get)
                .put(message::update)
                .patch(message::partial_update)
                .delete(message::delete),
        )
}
