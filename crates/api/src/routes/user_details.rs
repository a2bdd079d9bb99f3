//! Route definitions for user details.

use axum::routing::get;
use axum::Router;

use crate::handlers::user_details;
use crate::state::AppState;

/// Routes mounted at `/api/user-details`.
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
        .route("/", get(user_details::list).post(user_details::create))
        .route("/count", get(user_details::count))
        .route(
            "/{id}",
            get(user_details::get)
                .put(user_details::update)
                .patch(user_details::partial_update)
                .delete(user_details::delete),
        )
}
