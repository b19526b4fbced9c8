//! Arena storage layer.
//!
//! The player and ticket tables sit behind the [`PlayerStore`] and
//! [`TicketStore`] traits. [`Stores::connect`] picks the backend named by
//! [`StorageConfig`]: DynamoDB, PostgreSQL, or in-memory.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod dynamo;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use config::{StorageBackend, StorageConfig};
pub use error::{StoreError, StoreResult};
pub use store::{PlayerStore, TicketStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the pool is usable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Handles to both tables, shareable across tasks.
#[derive(Clone)]
pub struct Stores {
    pub players: Arc<dyn PlayerStore>,
    pub tickets: Arc<dyn TicketStore>,
}

impl Stores {
    /// Both tables backed by one in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::new());
        Self {
            players: store.clone(),
            tickets: store,
        }
    }

    /// Connect to the backend selected by `config`.
    ///
    /// The PostgreSQL backend is health-checked and migrated before use.
    pub async fn connect(
        config: &StorageConfig,
        sdk_config: &aws_config::SdkConfig,
    ) -> StoreResult<Self> {
        match config.backend {
            StorageBackend::DynamoDb => {
                tracing::info!(
                    player_table = %config.player_table,
                    ticket_table = %config.ticket_table,
                    "Using DynamoDB storage"
                );
                let store = Arc::new(dynamo::DynamoStore::new(
                    aws_sdk_dynamodb::Client::new(sdk_config),
                    config.player_table.clone(),
                    config.ticket_table.clone(),
                ));
                Ok(Self {
                    players: store.clone(),
                    tickets: store,
                })
            }
            StorageBackend::Postgres => {
                let url = config.database_url.as_deref().ok_or_else(|| {
                    StoreError::Config("DATABASE_URL must be set for the postgres backend".into())
                })?;
                let pool = create_pool(url).await?;
                health_check(&pool).await?;
                run_migrations(&pool).await?;
                tracing::info!("Using PostgreSQL storage");

                let store = Arc::new(postgres::PgStore::new(pool));
                Ok(Self {
                    players: store.clone(),
                    tickets: store,
                })
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Self::in_memory())
            }
        }
    }
}
