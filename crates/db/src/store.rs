//! Storage traits for the player and ticket tables.
//!
//! Both tables are accessed only by primary key: single-row puts that
//! overwrite, and key queries that return every row stored under the key.
//! Callers decide what a row count other than one means.

use arena_core::player::PlayerRecord;
use arena_core::ticket::TicketRecord;
use arena_core::types::EpochSecs;
use async_trait::async_trait;

use crate::error::StoreResult;

#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Insert or overwrite the player keyed by `player.id`.
    async fn put_player(&self, player: &PlayerRecord) -> StoreResult<()>;

    /// All rows stored under `player_id`.
    async fn query_players(&self, player_id: &str) -> StoreResult<Vec<PlayerRecord>>;
}

#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Insert or overwrite the ticket keyed by `ticket.id`.
    async fn put_ticket(&self, ticket: &TicketRecord) -> StoreResult<()>;

    /// All unexpired rows stored under `ticket_id`.
    async fn query_tickets(&self, ticket_id: &str) -> StoreResult<Vec<TicketRecord>>;

    /// Delete rows whose TTL is at or before `now`, returning how many went.
    ///
    /// Backends with native TTL expiry return `Ok(0)` without doing anything.
    async fn purge_expired(&self, now: EpochSecs) -> StoreResult<u64>;
}
