/// Identity-pool settings used by the HTTP API.
#[derive(Debug, Clone)]
pub struct CognitoConfig {
    /// Hosted UI domain, e.g. `arena.auth.us-east-1.amazoncognito.com`.
    pub domain: String,
    /// App client id used for code exchange and refresh-token auth.
    pub client_id: String,
    /// Redirect URI registered for the app client.
    pub callback_url: String,
}

impl CognitoConfig {
    /// Load identity settings from environment variables.
    ///
    /// | Env Var                | Required |
    /// |------------------------|----------|
    /// | `COGNITO_DOMAIN`       | **yes**  |
    /// | `COGNITO_CLIENT_ID`    | **yes**  |
    /// | `COGNITO_CALLBACK_URL` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if any variable is missing or empty.
    pub fn from_env() -> Self {
        Self {
            domain: required_var("COGNITO_DOMAIN"),
            client_id: required_var("COGNITO_CLIENT_ID"),
            callback_url: required_var("COGNITO_CALLBACK_URL"),
        }
    }

    /// OAuth token endpoint of the hosted domain.
    pub fn token_url(&self) -> String {
        format!("https://{}/oauth2/token", self.domain.trim_end_matches('/'))
    }
}

/// Managed matchmaking settings.
#[derive(Debug, Clone)]
pub struct MatchmakingConfig {
    /// Name of the matchmaking configuration tickets are submitted to.
    pub configuration_name: String,
}

impl MatchmakingConfig {
    /// Load from `FLEXMATCH_CONFIG` (required).
    ///
    /// # Panics
    ///
    /// Panics if `FLEXMATCH_CONFIG` is missing or empty.
    pub fn from_env() -> Self {
        Self {
            configuration_name: required_var("FLEXMATCH_CONFIG"),
        }
    }
}

fn required_var(name: &str) -> String {
    let value = std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set in the environment"));
    assert!(!value.is_empty(), "{name} must not be empty");
    value
}
