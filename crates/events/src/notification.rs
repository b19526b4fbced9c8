//! Raw notification decoding.

use arena_core::matchmaking::MatchmakingNotification;

/// Decode one message body as published by the matchmaking service.
///
/// Fields the backend does not consume are ignored.
pub fn decode_notification(message: &str) -> Result<MatchmakingNotification, serde_json::Error> {
    serde_json::from_str(message)
}
