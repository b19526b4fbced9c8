//! Errors from managed-service collaborators.
//!
//! AWS SDK failures are classified by the error code in their metadata so
//! that callers can tell a rejected credential or a missing ticket apart from
//! a generic upstream failure.

use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;

/// Error code the identity service uses for invalid or expired credentials.
pub const NOT_AUTHORIZED_CODE: &str = "NotAuthorizedException";

/// Error code the matchmaking service uses for unknown tickets.
pub const NOT_FOUND_CODE: &str = "NotFoundException";

#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// The upstream service rejected the presented credential.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// The upstream service does not know the referenced resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The token endpoint refused the request with a 4xx status.
    #[error("Token endpoint rejected request with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The token endpoint failed with a 5xx status.
    #[error("Token endpoint unavailable (HTTP {status})")]
    Unavailable { status: u16 },

    /// Any other upstream failure, including SDK transport errors.
    #[error("Upstream service error: {0}")]
    Service(String),

    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream call succeeded but the response lacks a required field.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type CloudResult<T> = Result<T, CloudError>;

/// Map an SDK error onto [`CloudError`] using its error code.
pub fn classify_sdk_error<E>(err: E) -> CloudError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    match err.code() {
        Some(NOT_AUTHORIZED_CODE) => {
            CloudError::NotAuthorized(err.message().unwrap_or("Not authorized").to_string())
        }
        Some(NOT_FOUND_CODE) => {
            CloudError::NotFound(err.message().unwrap_or("Not found").to_string())
        }
        _ => CloudError::Service(DisplayErrorContext(&err).to_string()),
    }
}
