//! Repository for the `tickets` table.

use arena_core::ticket::TicketRecord;
use arena_core::types::EpochSecs;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::ticket::TicketRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, ticket_type, ttl, players, game_session_info";

/// Provides key operations and expiry cleanup for ticket rows.
pub struct TicketRepo;

impl TicketRepo {
    /// Insert a ticket, replacing every column of an existing row.
    pub async fn upsert(pool: &PgPool, ticket: &TicketRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO tickets (id, ticket_type, ttl, players, game_session_info)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE
             SET ticket_type = EXCLUDED.ticket_type,
                 ttl = EXCLUDED.ttl,
                 players = EXCLUDED.players,
                 game_session_info = EXCLUDED.game_session_info",
        )
        .bind(&ticket.id)
        .bind(ticket.ticket_type.as_str())
        .bind(ticket.ttl)
        .bind(ticket.players.as_ref().map(Json))
        .bind(ticket.game_session_info.as_ref().map(Json))
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Rows keyed by `id` whose TTL is still in the future.
    pub async fn find_live_by_id(
        pool: &PgPool,
        id: &str,
        now: EpochSecs,
    ) -> Result<Vec<TicketRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = $1 AND ttl > $2");
        sqlx::query_as::<_, TicketRow>(&query)
            .bind(id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Delete expired rows. Returns the count of deleted rows.
    pub async fn delete_expired(pool: &PgPool, now: EpochSecs) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tickets WHERE ttl <= $1")
            .bind(now)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
