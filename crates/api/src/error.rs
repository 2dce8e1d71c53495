use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use venuebook_core::error::CoreError;
use venuebook_core::validation::{ValidationReport, Violation};
use venuebook_db::constraints::violation_from_db_error;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `venuebook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request that could not be decoded: malformed body, path or query,
    /// or a malformed identity header.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationReport> for AppError {
    fn from(report: ValidationReport) -> Self {
        AppError::Core(CoreError::Rejected(report))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Status, machine-readable code, message and optional violation list.
struct ErrorParts {
    status: StatusCode,
    code: &'static str,
    message: String,
    violations: Option<Vec<Violation>>,
}

impl ErrorParts {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            violations: None,
        }
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred",
        )
    }

    fn from_report(report: &ValidationReport) -> Self {
        let conflict = report
            .violations()
            .iter()
            .any(|v| matches!(v, Violation::Duplicate { .. }));
        let (status, code) = if conflict {
            (StatusCode::CONFLICT, "CONFLICT")
        } else {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        };
        Self {
            status,
            code,
            message: report.to_string(),
            violations: Some(report.violations().to_vec()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let parts = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => ErrorParts::new(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Rejected(report) => ErrorParts::from_report(report),
                CoreError::Unauthorized(msg) => {
                    ErrorParts::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                ErrorParts::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
            }
        };

        let mut body = json!({
            "error": parts.message,
            "code": parts.code,
        });
        if let Some(violations) = parts.violations {
            body["violations"] = json!(violations);
        }

        (parts.status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP response.
///
/// - `RowNotFound` maps to 404.
/// - Known constraint failures become typed violations: duplicates map to
///   409, check failures to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    if let sqlx::Error::RowNotFound = err {
        return ErrorParts::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found");
    }
    if let Some(violation) = violation_from_db_error(err) {
        tracing::debug!(violation = %violation, "Write rejected by storage constraint");
        return ErrorParts::from_report(&ValidationReport::single(violation));
    }
    tracing::error!(error = %err, "Database error");
    ErrorParts::internal()
}
