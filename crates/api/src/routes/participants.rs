//! Route definitions for conversation participants.

use axum::routing::get;
use axum::Router;

use crate::handlers::participant;
use crate::state::AppState;

/// Routes mounted at `/api/participants`.
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
        .route("/", get(participant::list).post(participant::create))
        .route("/count", get(participant::count))
        .route(
            "/{id}",
            get(participant::get)
                .put(participant::update)
                .patch(participant::partial_update)
                .delete(participant::delete),
        )
}
