use arena_cloud::CloudError;
use arena_core::error::CoreError;
use arena_db::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Message returned for every failure the caller cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error, please try again later";

/// Message returned when the token endpoint refuses an authorization code.
pub const INVALID_CODE_MESSAGE: &str =
    "Invalid authorization code. The code can only be exchanged once.";

/// Message returned when the token endpoint itself fails.
pub const TOKEN_ENDPOINT_FAILED_MESSAGE: &str =
    "Failed to get tokens from token endpoint, please try again later";

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, storage and collaborator errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{"error": message, "code": CODE}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `arena_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A player or ticket table failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A failure reported by the identity pool, matchmaker or token endpoint.
    #[error("Upstream error: {0}")]
    Cloud(#[from] CloudError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

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
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Storage errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                internal()
            }

            // --- Upstream errors ---
            AppError::Cloud(err) => classify_cloud_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}

/// Classify a collaborator error into an HTTP status, error code, and message.
///
/// - Rejected credentials and unknown upstream resources map to 400 with the
///   upstream message passed through.
/// - A refused authorization code keeps the token endpoint's 4xx status.
/// - A failing token endpoint maps to 500 with its own message.
/// - Everything else maps to 500 with a sanitized message.
fn classify_cloud_error(err: &CloudError) -> (StatusCode, &'static str, String) {
    match err {
        CloudError::NotAuthorized(msg) => {
            tracing::warn!(error = %msg, "Upstream rejected credential");
            (StatusCode::BAD_REQUEST, "NOT_AUTHORIZED", msg.clone())
        }
        CloudError::NotFound(msg) => {
            tracing::warn!(error = %msg, "Upstream resource not found");
            (StatusCode::BAD_REQUEST, "UPSTREAM_NOT_FOUND", msg.clone())
        }
        CloudError::Rejected { status, body } => {
            tracing::warn!(status, body = %body, "Token endpoint rejected code");
            let status = StatusCode::from_u16(*status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_REQUEST);
            (status, "INVALID_CODE", INVALID_CODE_MESSAGE.to_string())
        }
        CloudError::Unavailable { status } => {
            tracing::error!(status, "Token endpoint unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_ENDPOINT_ERROR",
                TOKEN_ENDPOINT_FAILED_MESSAGE.to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Upstream service error");
            internal()
        }
    }
}
