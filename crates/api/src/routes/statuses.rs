//! Route definitions for the status lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::status::{self, StatusResource};
use crate::state::AppState;

/// Routes for one status table, mounted at `/api/{R::PATH}`.
///
/// Same shape as every other resource: `/`, `/count`, `/{id}`.
pub fn router<R: StatusResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(status::list::<R>).post(status::create::<R>))
        .route("/count", get(status::count::<R>))
        .route(
            "/{id}",
            get(status::get::<R>)
                .put(status::update::<R>)
                .patch(status::partial_update::<R>)
                .delete(status::delete::<R>),
        )
}
