//! Request handlers, one module per resource.

pub mod matchmaking;
pub mod players;
pub mod tokens;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Parse a JSON request body, treating an empty body as `{}`.
///
/// Any parse failure is a 400 `Invalid JSON body`; required-field checks
/// are left to the handler so it can name the missing field.
pub fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &body[..]
    };

    serde_json::from_slice(raw).map_err(|e| {
        tracing::info!(error = %e, "Rejecting unparseable request body");
        AppError::BadRequest("Invalid JSON body".into())
    })
}

/// Unwrap a required body field or fail with `No '<name>' field`.
pub fn required_field<T>(value: Option<T>, name: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::BadRequest(format!("No '{name}' field")))
}
