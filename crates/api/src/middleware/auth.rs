//! Access-token extractors for Axum handlers.
//!
//! The `Authorization` header carries the identity pool's access token,
//! either raw or with a `Bearer ` prefix. Validation is delegated to the
//! identity pool: [`BearerToken`] only checks that a token was presented,
//! while [`AuthPlayer`] resolves it to the player's subject id.

use arena_core::error::CoreError;
use arena_core::types::PlayerId;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// The raw access token presented by the caller.
///
/// Used by operations that hand the token straight to the identity pool,
/// which then reports whether it is valid.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// A caller whose access token resolved to a player.
///
/// ```ignore
/// async fn my_handler(player: AuthPlayer) -> AppResult<Json<()>> {
///     tracing::info!(player_id = %player.player_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthPlayer {
    /// The identity subject, which is also the player table key.
    pub player_id: PlayerId,
    /// The access token the subject was resolved from.
    pub access_token: String,
}

/// Read the access token from the `Authorization` header.
pub fn access_token(parts: &Parts) -> Result<String, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    if token.is_empty() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Empty access token in Authorization header".into(),
        )));
    }
    Ok(token.to_string())
}

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        access_token(parts).map(BearerToken)
    }
}

impl FromRequestParts<AppState> for AuthPlayer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let access_token = access_token(parts)?;

        let player_id = state
            .identity
            .resolve_subject(&access_token)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Internal(
                    "User has no subject attribute in the identity pool".into(),
                ))
            })?;

        Ok(AuthPlayer {
            player_id,
            access_token,
        })
    }
}
