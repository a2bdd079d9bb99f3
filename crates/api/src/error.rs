use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use souk_core::error::CoreError;
use validator::ValidationErrors;

/// What is wrong with the `id` of a create or update request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdProblem {
    /// Create request carried an id.
    Exists,
    /// Update request carried no id.
    Null,
    /// Body id differs from the path id.
    Invalid,
    /// No row with the path id.
    NotFound,
}

impl IdProblem {
    /// Error key reported in the `code` field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Exists => "idexists",
            Self::Null => "idnull",
            Self::Invalid => "idinvalid",
            Self::NotFound => "idnotfound",
        }
    }

    fn message(self, entity: &str) -> String {
        match self {
            Self::Exists => format!("A new {entity} cannot already have an ID"),
            Self::Null => "Invalid id".to_string(),
            Self::Invalid => "Invalid ID".to_string(),
            Self::NotFound => "Entity not found".to_string(),
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `souk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field constraint failures on a request body.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body `id` is unusable for this operation.
    #[error("Invalid id for {entity}: {}", .problem.key())]
    InvalidId {
        entity: &'static str,
        problem: IdProblem,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn invalid_id(entity: &'static str, problem: IdProblem) -> Self {
        Self::InvalidId { entity, problem }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                describe_validation_errors(errors, |_| true),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidId { entity, problem } => {
                let body = json!({
                    "error": problem.message(entity),
                    "code": problem.key(),
                    "entityName": entity,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Render field errors as `field: code` pairs, sorted by field name.
///
/// Field names are reported as they appear in JSON (camelCase). Errors for
/// which `keep` returns `false` are left out.
pub fn describe_validation_errors(
    errors: &ValidationErrors,
    keep: impl Fn(&validator::ValidationError) -> bool,
) -> String {
    let keep = &keep;
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .filter(move |e| keep(e))
                .map(move |e| format!("{}: {}", json_field_name(&field), e.code))
        })
        .collect();
    parts.sort();
    parts.join(", ")
}

/// `sort_order` -> `sortOrder`.
fn json_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (23505) map to 409.
/// - Foreign key (23503), not-null (23502), check (23514) violations and
///   data exceptions (class 22) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                Some("23503") => (
                    StatusCode::BAD_REQUEST,
                    "BAD_REQUEST",
                    format!("Referenced entity does not exist: {constraint}"),
                ),
                Some("23502") | Some("23514") => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Value violates constraint: {constraint}"),
                ),
                Some(code) if code.starts_with("22") => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Value out of range for its column".to_string(),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
