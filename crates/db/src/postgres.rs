//! PostgreSQL storage backend.
//!
//! Thin adapter from the store traits onto [`PlayerRepo`] and
//! [`TicketRepo`]. Expired tickets are hidden from queries and removed by
//! [`TicketStore::purge_expired`], which the API server calls periodically.

use arena_core::player::PlayerRecord;
use arena_core::ticket::TicketRecord;
use arena_core::types::EpochSecs;
use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreResult;
use crate::repositories::{PlayerRepo, TicketRepo};
use crate::store::{PlayerStore, TicketStore};
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerStore for PgStore {
    async fn put_player(&self, player: &PlayerRecord) -> StoreResult<()> {
        PlayerRepo::upsert(&self.pool, player).await?;
        Ok(())
    }

    async fn query_players(&self, player_id: &str) -> StoreResult<Vec<PlayerRecord>> {
        PlayerRepo::find_by_id(&self.pool, player_id)
            .await?
            .into_iter()
            .map(PlayerRecord::try_from)
            .collect()
    }
}

#[async_trait]
impl TicketStore for PgStore {
    async fn put_ticket(&self, ticket: &TicketRecord) -> StoreResult<()> {
        TicketRepo::upsert(&self.pool, ticket).await?;
        Ok(())
    }

    async fn query_tickets(&self, ticket_id: &str) -> StoreResult<Vec<TicketRecord>> {
        let now = Utc::now().timestamp();
        let rows = TicketRepo::find_live_by_id(&self.pool, ticket_id, now).await?;
        Ok(rows.into_iter().map(TicketRecord::from).collect())
    }

    async fn purge_expired(&self, now: EpochSecs) -> StoreResult<u64> {
        Ok(TicketRepo::delete_expired(&self.pool, now).await?)
    }
}

// ---------------------------------------------------------------------------
// Tests (require a running PostgreSQL reachable through DATABASE_URL)
// ---------------------------------------------------------------------------
