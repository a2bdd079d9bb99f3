//! Request extractors that report failures through [`AppError`].
//!
//! The body extractors accept `application/json` and any `+json` media type
//! (including `application/merge-patch+json`). Malformed bodies become
//! 400 responses in the usual `{error, code}` shape instead of axum's
//! plain-text rejections. [`IdPath`] does the same for path ids.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use souk_core::error::CoreError;
use validator::Validate;

use crate::error::{describe_validation_errors, AppError};

/// JSON body validated against every field constraint, including `required`.
///
/// Used by create (POST) and full update (PUT).
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// JSON merge-patch body. Absent fields are fine; the fields that are
/// present must still satisfy their constraints.
#[derive(Debug)]
pub struct PatchJson<T>(pub T);

impl<T, S> FromRequest<S> for PatchJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;
        validate_supplied(&value)?;
        Ok(Self(value))
    }
}

/// Entity id taken from the `{id}` path segment.
///
/// A segment that does not parse (`/api/tags/abc`) is a 400 `BAD_REQUEST`.
#[derive(Debug)]
pub struct IdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(Self(id))
    }
}

/// Validate only the values present in a partial DTO.
///
/// `required` failures are dropped: in a patch, an absent field means
/// "leave unchanged".
pub fn validate_supplied<T: Validate>(value: &T) -> Result<(), AppError> {
    let Err(errors) = value.validate() else {
        return Ok(());
    };
    let message = describe_validation_errors(&errors, |e| e.code != "required");
    if message.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(message).into())
    }
}

fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use souk_db::models::tag::TagDto;

    use super::*;

    #[test]
    fn patch_ignores_missing_required_fields() {
        let dto = TagDto { id: Some(1), name: None };
        assert!(validate_supplied(&dto).is_ok());
    }

    #[test]
    fn patch_rejects_supplied_values_that_break_constraints() {
        let dto = TagDto {
            id: Some(1),
            name: Some("A".into()),
        };
        assert_matches!(
            validate_supplied(&dto),
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "name: length"
        );
    }
}
