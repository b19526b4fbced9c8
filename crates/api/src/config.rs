use arena_cloud::{CognitoConfig, MatchmakingConfig};
use arena_db::StorageConfig;

/// Server configuration loaded from environment variables.
///
/// Listener and middleware settings have defaults suitable for local
/// development; the identity and matchmaking settings have none and must be
/// provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Interval between expired-ticket sweeps in seconds (default: `300`).
    /// Only used by backends without native row expiry.
    pub ticket_sweep_interval_secs: u64,
    /// Player and ticket table backend.
    pub storage: StorageConfig,
    /// Identity pool app client and hosted domain.
    pub cognito: CognitoConfig,
    /// Managed matchmaking configuration.
    pub matchmaking: MatchmakingConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `HOST`                       | `0.0.0.0`               |
    /// | `PORT`                       | `3000`                  |
    /// | `CORS_ORIGINS`               | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                    |
    /// | `TICKET_SWEEP_INTERVAL_SECS` | `300`                   |
    ///
    /// See [`StorageConfig::from_env`], [`CognitoConfig::from_env`] and
    /// [`MatchmakingConfig::from_env`] for the remaining variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let ticket_sweep_interval_secs: u64 = std::env::var("TICKET_SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("TICKET_SWEEP_INTERVAL_SECS must be a valid u64");
        assert!(
            ticket_sweep_interval_secs > 0,
            "TICKET_SWEEP_INTERVAL_SECS must be greater than zero"
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            ticket_sweep_interval_secs,
            storage: StorageConfig::from_env(),
            cognito: CognitoConfig::from_env(),
            matchmaking: MatchmakingConfig::from_env(),
        }
    }
}
