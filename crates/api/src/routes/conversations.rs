//! Route definitions for conversations.

use axum::routing::get;
use axum::Router;

use crate::handlers::conversation;
use crate::state::AppState;

/// Routes mounted at `/api/conversations`.
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
        .route("/", get(conversation::list).post(conversation::create))
        .route("/count", get(conversation::count))
        .route(
            "/{id}",
            get(conversation::get)
                .put(conversation::update)
                .patch(conversation::partial_update)
                .delete(conversation::delete),
        )
}
