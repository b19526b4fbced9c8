//! Ticket row model.

use arena_core::ticket::{GameSessionEndpoint, PlayerSession, TicketRecord};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `tickets` table. Optional attributes are JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    pub id: String,
    pub ticket_type: String,
    pub ttl: i64,
    pub players: Option<Json<Vec<PlayerSession>>>,
    pub game_session_info: Option<Json<GameSessionEndpoint>>,
}

impl From<TicketRow> for TicketRecord {
    fn from(row: TicketRow) -> Self {
        TicketRecord {
            id: row.id,
            ticket_type: row.ticket_type.into(),
            ttl: row.ttl,
            players: row.players.map(|Json(players)| players),
            game_session_info: row.game_session_info.map(|Json(info)| info),
        }
    }
}
