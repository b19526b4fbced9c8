//! Player records and the derived skill score.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::PlayerId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Skill points awarded per win.
pub const SKILL_PER_WIN: i64 = 100;

/// Skill points deducted per loss.
pub const SKILL_PER_LOSS: i64 = 30;

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A row of the player table.
///
/// Attribute names are PascalCase to match the stored item shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRecord {
    /// Identity subject. Immutable, assigned at signup.
    pub id: PlayerId,
    pub wins: u32,
    pub losses: u32,
}

impl PlayerRecord {
    /// A freshly confirmed player with no games played.
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            wins: 0,
            losses: 0,
        }
    }

    /// Skill attribute submitted to the matchmaker for this player.
    pub fn skill(&self) -> i64 {
        skill_score(self.wins, self.losses)
    }
}

/// `100 * wins - 30 * losses`. May be negative.
pub fn skill_score(wins: u32, losses: u32) -> i64 {
    SKILL_PER_WIN * i64::from(wins) - SKILL_PER_LOSS * i64::from(losses)
}

/// Reduce a key query result to the single player it must contain.
///
/// Zero rows and duplicate rows are both invariant violations, not a
/// missing resource, so they surface as [`CoreError::Internal`].
pub fn single_player(id: &str, mut rows: Vec<PlayerRecord>) -> Result<PlayerRecord, CoreError> {
    if rows.len() != 1 {
        return Err(CoreError::Internal(format!(
            "Expected exactly one player row for {id}, found {}",
            rows.len()
        )));
    }
    Ok(rows.remove(0))
}

// ---------------------------------------------------------------------------
// API projection
// ---------------------------------------------------------------------------

/// Player data as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOutput {
    pub player_id: PlayerId,
    pub wins: u32,
    pub losses: u32,
}

impl From<PlayerRecord> for PlayerOutput {
    fn from(record: PlayerRecord) -> Self {
        Self {
            player_id: record.id,
            wins: record.wins,
            losses: record.losses,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
