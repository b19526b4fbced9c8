/// Failure talking to, or decoding data from, a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A DynamoDB request failed (service error or transport).
    #[error("DynamoDB request failed: {0}")]
    Dynamo(String),

    /// An item could not be converted to or from its record type.
    #[error("Item conversion failed: {0}")]
    Item(#[from] serde_dynamo::Error),

    /// A PostgreSQL query failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Applying migrations failed at startup.
    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row holds a value the domain type cannot represent.
    #[error("Corrupt row: {0}")]
    Corrupt(String),

    /// The selected backend is missing required settings.
    #[error("Storage misconfigured: {0}")]
    Config(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
