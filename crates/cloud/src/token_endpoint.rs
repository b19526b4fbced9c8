//! Authorization-code exchange at the hosted OAuth token endpoint.
//!
//! Codes are single use: a second exchange of the same code is rejected by
//! the endpoint with a 4xx status, surfaced as [`CloudError::Rejected`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::CognitoConfig;
use crate::error::{CloudError, CloudResult};

/// Grant type for trading an authorization code.
const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";

/// Tokens issued for an authorization code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Exchange a single-use authorization code for tokens.
    async fn exchange_code(&self, code: &str) -> CloudResult<TokenSet>;
}

/// [`TokenEndpoint`] talking to the identity pool's hosted domain.
pub struct HostedTokenEndpoint {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    redirect_uri: String,
}

impl HostedTokenEndpoint {
    pub fn new(token_url: String, client_id: String, redirect_uri: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_url,
            client_id,
            redirect_uri,
        }
    }

    pub fn from_config(config: &CognitoConfig) -> Self {
        Self::new(
            config.token_url(),
            config.client_id.clone(),
            config.callback_url.clone(),
        )
    }
}

#[async_trait]
impl TokenEndpoint for HostedTokenEndpoint {
    async fn exchange_code(&self, code: &str) -> CloudResult<TokenSet> {
        let params = [
            ("grant_type", AUTHORIZATION_CODE_GRANT),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("code", code),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "Token endpoint rejected code");
            return Err(CloudError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Token endpoint failed");
            return Err(CloudError::Unavailable {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<TokenSet>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
