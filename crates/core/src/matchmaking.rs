//! Matchmaking lifecycle events and requests.
//!
//! The managed matchmaking service reports ticket progress through
//! asynchronous notifications. [`normalize_notification`] turns one
//! notification into the ticket rows it should produce. Intermediate phases
//! (searching, potential match, acceptance) produce nothing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::player::PlayerRecord;
use crate::ticket::{ticket_expiry, GameSessionEndpoint, PlayerSession, TicketRecord};
use crate::types::{EpochSecs, PlayerId};

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

/// The `detail.type` tag of a matchmaking notification.
///
/// Unknown tags are kept verbatim in [`Other`](Self::Other) so that new
/// service-side event types are still recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchmakingEventType {
    MatchmakingSearching,
    PotentialMatchCreated,
    AcceptMatch,
    AcceptMatchCompleted,
    MatchmakingSucceeded,
    MatchmakingCancelled,
    MatchmakingFailed,
    MatchmakingTimedOut,
    Other(String),
}

impl MatchmakingEventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::MatchmakingSearching => "MatchmakingSearching",
            Self::PotentialMatchCreated => "PotentialMatchCreated",
            Self::AcceptMatch => "AcceptMatch",
            Self::AcceptMatchCompleted => "AcceptMatchCompleted",
            Self::MatchmakingSucceeded => "MatchmakingSucceeded",
            Self::MatchmakingCancelled => "MatchmakingCancelled",
            Self::MatchmakingFailed => "MatchmakingFailed",
            Self::MatchmakingTimedOut => "MatchmakingTimedOut",
            Self::Other(s) => s,
        }
    }

    /// Phases that never produce a ticket row.
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            Self::MatchmakingSearching
                | Self::PotentialMatchCreated
                | Self::AcceptMatch
                | Self::AcceptMatchCompleted
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::MatchmakingSucceeded)
    }
}

impl From<String> for MatchmakingEventType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "MatchmakingSearching" => Self::MatchmakingSearching,
            "PotentialMatchCreated" => Self::PotentialMatchCreated,
            "AcceptMatch" => Self::AcceptMatch,
            "AcceptMatchCompleted" => Self::AcceptMatchCompleted,
            "MatchmakingSucceeded" => Self::MatchmakingSucceeded,
            "MatchmakingCancelled" => Self::MatchmakingCancelled,
            "MatchmakingFailed" => Self::MatchmakingFailed,
            "MatchmakingTimedOut" => Self::MatchmakingTimedOut,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for MatchmakingEventType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<MatchmakingEventType> for String {
    fn from(t: MatchmakingEventType) -> Self {
        match t {
            MatchmakingEventType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MatchmakingEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Notification envelope
// ---------------------------------------------------------------------------

/// A matchmaking notification as published by the matchmaking service.
///
/// Only the fields this backend consumes are modelled; everything else in
/// the envelope (`source`, `time`, `region`, `matchId`, ...) is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchmakingNotification {
    pub detail: MatchmakingDetail,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchmakingDetail {
    #[serde(rename = "type")]
    pub event_type: MatchmakingEventType,
    #[serde(default)]
    pub tickets: Vec<TicketDetail>,
    #[serde(default)]
    pub game_session_info: Option<GameSessionDetail>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetail {
    pub ticket_id: String,
    #[serde(default)]
    pub players: Vec<PlayerDetail>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    pub player_id: String,
    /// Assigned only once a game session exists.
    #[serde(default)]
    pub player_session_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSessionDetail {
    pub ip_address: String,
    pub port: u16,
}

/// Build the ticket rows a notification should write.
///
/// Every ticket in a non-ignored event gets one row keyed by its ticket id,
/// expiring one hour after `now` (the event's own timestamp plays no part).
/// Only success events carry the player sessions and the connection
/// endpoint.
pub fn normalize_notification(
    notification: &MatchmakingNotification,
    now: EpochSecs,
) -> Result<Vec<TicketRecord>, CoreError> {
    let detail = &notification.detail;
    if detail.event_type.is_ignored() {
        return Ok(Vec::new());
    }

    let ttl = ticket_expiry(now);

    if !detail.event_type.is_success() {
        return Ok(detail
            .tickets
            .iter()
            .map(|t| TicketRecord::status_only(t.ticket_id.clone(), detail.event_type.clone(), ttl))
            .collect());
    }

    let endpoint = detail.game_session_info.as_ref().ok_or_else(|| {
        CoreError::Validation(format!(
            "{} event without gameSessionInfo",
            detail.event_type
        ))
    })?;

    detail
        .tickets
        .iter()
        .map(|ticket| {
            let players = ticket
                .players
                .iter()
                .map(|p| {
                    let session_id = p.player_session_id.clone().ok_or_else(|| {
                        CoreError::Validation(format!(
                            "Player {} on ticket {} has no playerSessionId",
                            p.player_id, ticket.ticket_id
                        ))
                    })?;
                    Ok(PlayerSession {
                        player_id: p.player_id.clone(),
                        player_session_id: session_id,
                    })
                })
                .collect::<Result<Vec<_>, CoreError>>()?;

            Ok(TicketRecord {
                id: ticket.ticket_id.clone(),
                ticket_type: detail.event_type.clone(),
                ttl,
                players: Some(players),
                game_session_info: Some(GameSessionEndpoint {
                    ip_address: endpoint.ip_address.clone(),
                    port: endpoint.port,
                }),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Start request
// ---------------------------------------------------------------------------

/// Per-region round-trip latency reported by the client, in milliseconds.
pub type LatencyMap = BTreeMap<String, i32>;

/// Everything the matchmaker needs to open a ticket for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchmakingRequest {
    pub player_id: PlayerId,
    pub skill: i64,
    pub latency_ms: LatencyMap,
}

impl MatchmakingRequest {
    /// Build a request for `player`, validating the latency map.
    pub fn for_player(player: &PlayerRecord, latency_ms: LatencyMap) -> Result<Self, CoreError> {
        validate_latency(&latency_ms)?;
        Ok(Self {
            player_id: player.id.clone(),
            skill: player.skill(),
            latency_ms,
        })
    }
}

/// Latencies are round-trip times and cannot be negative.
pub fn validate_latency(latency_ms: &LatencyMap) -> Result<(), CoreError> {
    if let Some((region, ms)) = latency_ms.iter().find(|(_, ms)| **ms < 0) {
        return Err(CoreError::Validation(format!(
            "Latency for region '{region}' must be non-negative, got {ms}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
