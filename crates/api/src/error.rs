use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mindseye_core::error::CoreError;
use mindseye_mail::RelayError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "success": false, "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mindseye_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that could not be read as the expected JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The inquiry could not be relayed. The response points the submitter
    /// at `fallback_contact` instead.
    #[error("Relay failed: {source}")]
    Relay {
        fallback_contact: String,
        #[source]
        source: RelayError,
    },

    /// The SMTP connection check failed.
    #[error("SMTP unavailable: {0}")]
    SmtpUnavailable(#[source] RelayError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned in place of any 500-class detail.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::BadData(msg) => {
                    tracing::error!(error = %msg, "Stored data could not be decoded");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Relay errors ---
            AppError::Relay {
                fallback_contact,
                source,
            } => {
                tracing::error!(error = %source, "Failed to relay inquiry email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RELAY_ERROR",
                    format!("Failed to send email. Please contact {fallback_contact} directly."),
                )
            }

            AppError::SmtpUnavailable(source) => {
                tracing::error!(error = %source, "SMTP connection check failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RELAY_ERROR",
                    "SMTP connection failed".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Body rejections (malformed JSON, wrong field types, missing
/// `Content-Type`) all surface as 400 `BAD_REQUEST` in the JSON error shape.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
