//! Handlers for the `/tokens` resource (code exchange, refresh, revoke).

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::{parse_json_body, required_field};
use crate::middleware::auth::BearerToken;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /tokens/exchange`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest {
    pub authz_code: Option<String>,
}

/// Request body for `POST /tokens/refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// Tokens issued for an authorization code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /tokens/exchange
///
/// Trade a single-use authorization code for access and refresh tokens.
pub async fn exchange(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ExchangeResponse>> {
    let input: ExchangeRequest = parse_json_body(&body)?;
    let code = required_field(input.authz_code, "authzCode")?;

    let tokens = state.token_endpoint.exchange_code(&code).await?;
    tracing::info!(expires_in = tokens.expires_in, "Authorization code exchanged");

    Ok(Json(ExchangeResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.expires_in,
    }))
}

/// POST /tokens/refresh
///
/// Trade a refresh token for a fresh access token. The caller must present
/// its current access token.
pub async fn refresh(
    State(state): State<AppState>,
    _token: BearerToken,
    body: Bytes,
) -> AppResult<Json<RefreshResponse>> {
    let input: RefreshRequest = parse_json_body(&body)?;
    let refresh_token = required_field(input.refresh_token, "refreshToken")?;

    let access_token = state
        .identity
        .refresh_access_token(&refresh_token)
        .await?
        .ok_or_else(|| {
            AppError::InternalError("Refresh-token auth returned no access token".into())
        })?;

    Ok(Json(RefreshResponse { access_token }))
}

/// POST /tokens/revoke
///
/// Sign the caller out everywhere, invalidating all of its tokens.
pub async fn revoke(
    State(state): State<AppState>,
    BearerToken(access_token): BearerToken,
) -> AppResult<StatusCode> {
    state.identity.global_sign_out(&access_token).await?;
    tracing::info!("Tokens revoked");
    Ok(StatusCode::OK)
}
