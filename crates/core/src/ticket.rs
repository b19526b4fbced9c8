//! Ticket records and their client-facing projection.
//!
//! A [`TicketRecord`] is written by event ingestion and read by polling.
//! Rows expire on their own once [`TicketRecord::ttl`] passes; there is no
//! explicit delete path.

use serde::{Deserialize, Serialize};

use crate::matchmaking::MatchmakingEventType;
use crate::types::{EpochSecs, TicketId};

/// Lifetime of a ticket row, measured from processing time.
pub const TICKET_TTL_SECS: EpochSecs = 3600;

/// Expiry timestamp for a row written at `now`.
pub fn ticket_expiry(now: EpochSecs) -> EpochSecs {
    now + TICKET_TTL_SECS
}

// ---------------------------------------------------------------------------
// Stored shape
// ---------------------------------------------------------------------------

/// A row of the ticket table.
///
/// `players` and `game_session_info` are populated only when `ticket_type`
/// is [`MatchmakingEventType::MatchmakingSucceeded`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TicketRecord {
    pub id: TicketId,
    #[serde(rename = "Type")]
    pub ticket_type: MatchmakingEventType,
    #[serde(rename = "TTL")]
    pub ttl: EpochSecs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<PlayerSession>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_session_info: Option<GameSessionEndpoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerSession {
    pub player_id: String,
    pub player_session_id: String,
}

/// Where the matched players connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSessionEndpoint {
    pub ip_address: String,
    pub port: u16,
}

impl TicketRecord {
    /// A record carrying only identifier, status and expiry.
    pub fn status_only(
        id: impl Into<TicketId>,
        ticket_type: MatchmakingEventType,
        ttl: EpochSecs,
    ) -> Self {
        Self {
            id: id.into(),
            ticket_type,
            ttl,
            players: None,
            game_session_info: None,
        }
    }

    /// Whether the storage layer should already have dropped this row.
    pub fn is_expired(&self, now: EpochSecs) -> bool {
        self.ttl <= now
    }
}

// ---------------------------------------------------------------------------
// API projection
// ---------------------------------------------------------------------------

/// Ticket status as returned by the poll endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketOutput {
    pub ticket_id: TicketId,
    pub ticket_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<PlayerSessionOutput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_session_info: Option<GameSessionOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSessionOutput {
    pub player_id: String,
    pub player_session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSessionOutput {
    pub ip_address: String,
    pub port: u16,
}

impl From<&TicketRecord> for TicketOutput {
    fn from(record: &TicketRecord) -> Self {
        Self {
            ticket_id: record.id.clone(),
            ticket_type: record.ticket_type.as_str().to_string(),
            players: record.players.as_ref().map(|players| {
                players
                    .iter()
                    .map(|p| PlayerSessionOutput {
                        player_id: p.player_id.clone(),
                        player_session_id: p.player_session_id.clone(),
                    })
                    .collect()
            }),
            game_session_info: record
                .game_session_info
                .as_ref()
                .map(|info| GameSessionOutput {
                    ip_address: info.ip_address.clone(),
                    port: info.port,
                }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
