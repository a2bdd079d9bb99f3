//! HTTP handlers, one module per resource.
//!
//! Every resource exposes the same operations: create, full update,
//! partial update, list, count, get and delete. The helpers below hold the
//! id rules they share.

pub mod colour;
pub mod comment;
pub mod conversation;
pub mod message;
pub mod participant;
pub mod product;
pub mod product_category;
pub mod product_image;
pub mod search;
pub mod status;
pub mod tag;
pub mod user;
pub mod user_details;

use std::fmt::Display;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult, IdProblem};

/// A create request must not carry an id.
pub(crate) fn ensure_new<I>(entity: &'static str, body_id: Option<I>) -> AppResult<()> {
    match body_id {
        Some(_) => Err(AppError::invalid_id(entity, IdProblem::Exists)),
        None => Ok(()),
    }
}

/// An update request must carry the id named in the path.
pub(crate) fn ensure_same_id<I: PartialEq>(
    entity: &'static str,
    path_id: &I,
    body_id: Option<&I>,
) -> AppResult<()> {
    match body_id {
        None => Err(AppError::invalid_id(entity, IdProblem::Null)),
        Some(id) if id != path_id => Err(AppError::invalid_id(entity, IdProblem::Invalid)),
        Some(_) => Ok(()),
    }
}

/// Map a missing row on update to `idnotfound`.
pub(crate) fn updated<T>(entity: &'static str, row: Option<T>) -> AppResult<T> {
    row.ok_or(AppError::invalid_id(entity, IdProblem::NotFound))
}

/// `201 Created` with `Location: /api/{resource}/{id}` and the DTO as body.
pub(crate) fn created<T: Serialize>(resource: &str, id: impl Display, dto: T) -> Response {
    (
        StatusCode::CREATED,
        [(LOCATION, format!("/api/{resource}/{id}"))],
        Json(dto),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn create_with_id_is_rejected() {
        assert_matches!(
            ensure_new("tag", Some(3)),
            Err(AppError::InvalidId { problem: IdProblem::Exists, .. })
        );
        assert!(ensure_new::<i64>("tag", None).is_ok());
    }

    #[test]
    fn update_id_rules() {
        assert_matches!(
            ensure_same_id("tag", &1, None),
            Err(AppError::InvalidId { problem: IdProblem::Null, .. })
        );
        assert_matches!(
            ensure_same_id("tag", &1, Some(&2)),
            Err(AppError::InvalidId { problem: IdProblem::Invalid, .. })
        );
        assert!(ensure_same_id("tag", &1, Some(&1)).is_ok());
        assert_matches!(
            updated::<()>("tag", None),
            Err(AppError::InvalidId { problem: IdProblem::NotFound, .. })
        );
    }
}
