use std::str::FromStr;

/// Which storage backend holds the player and ticket tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// DynamoDB tables with native TTL expiry (production default).
    DynamoDb,
    /// PostgreSQL tables; expiry by periodic sweep.
    Postgres,
    /// Process-local maps; expiry by periodic sweep.
    Memory,
}

impl StorageBackend {
    /// Whether expired tickets must be deleted by the application.
    pub fn needs_expiry_sweep(self) -> bool {
        !matches!(self, Self::DynamoDb)
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(Self::DynamoDb),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!(
                "Invalid storage backend '{other}'. Must be one of: dynamodb, postgres, memory"
            )),
        }
    }
}

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// DynamoDB player table name.
    pub player_table: String,
    /// DynamoDB ticket table name.
    pub ticket_table: String,
    /// PostgreSQL connection string, required by the postgres backend.
    pub database_url: Option<String>,
}

impl StorageConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default       |
    /// |--------------------|---------------|
    /// | `STORAGE_BACKEND`  | `dynamodb`    |
    /// | `DDB_PLAYER_TABLE` | `PlayerTable` |
    /// | `DDB_TICKET_TABLE` | `TicketTable` |
    /// | `DATABASE_URL`     | --            |
    ///
    /// # Panics
    ///
    /// Panics if `STORAGE_BACKEND` names an unknown backend.
    pub fn from_env() -> Self {
        let backend: StorageBackend = std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "dynamodb".into())
            .parse()
            .unwrap_or_else(|e: String| panic!("{e}"));

        let player_table =
            std::env::var("DDB_PLAYER_TABLE").unwrap_or_else(|_| "PlayerTable".into());
        let ticket_table =
            std::env::var("DDB_TICKET_TABLE").unwrap_or_else(|_| "TicketTable".into());
        let database_url = std::env::var("DATABASE_URL").ok();

        Self {
            backend,
            player_table,
            ticket_table,
            database_url,
        }
    }
}
