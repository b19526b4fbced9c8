//! Process-local storage backend.
//!
//! Used for local development (`STORAGE_BACKEND=memory`) and tests. Rows
//! live until the process exits or [`TicketStore::purge_expired`] drops them.

use std::collections::HashMap;

use arena_core::player::PlayerRecord;
use arena_core::ticket::TicketRecord;
use arena_core::types::EpochSecs;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::store::{PlayerStore, TicketStore};

/// Both tables held in memory, one map per table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: RwLock<HashMap<String, PlayerRecord>>,
    tickets: RwLock<HashMap<String, TicketRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticket rows currently held, expired or not.
    pub async fn ticket_count(&self) -> usize {
        self.tickets.read().await.len()
    }
}

#[async_trait]
impl PlayerStore for MemoryStore {
    async fn put_player(&self, player: &PlayerRecord) -> StoreResult<()> {
        self.players
            .write()
            .await
            .insert(player.id.clone(), player.clone());
        Ok(())
    }

    async fn query_players(&self, player_id: &str) -> StoreResult<Vec<PlayerRecord>> {
        Ok(self
            .players
            .read()
            .await
            .get(player_id)
            .cloned()
            .into_iter()
            .collect())
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn put_ticket(&self, ticket: &TicketRecord) -> StoreResult<()> {
        self.tickets
            .write()
            .await
            .insert(ticket.id.clone(), ticket.clone());
        Ok(())
    }

    async fn query_tickets(&self, ticket_id: &str) -> StoreResult<Vec<TicketRecord>> {
        let now = Utc::now().timestamp();
        Ok(self
            .tickets
            .read()
            .await
            .get(ticket_id)
            .filter(|t| !t.is_expired(now))
            .cloned()
            .into_iter()
            .collect())
    }

    async fn purge_expired(&self, now: EpochSecs) -> StoreResult<u64> {
        let mut tickets = self.tickets.write().await;
        let before = tickets.len();
        tickets.retain(|_, t| !t.is_expired(now));
        Ok((before - tickets.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
