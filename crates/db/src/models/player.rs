//! Player row model.

use arena_core::player::PlayerRecord;
use sqlx::FromRow;

use crate::error::StoreError;

/// A row from the `players` table.
///
/// Counters are `BIGINT` columns; the domain type is unsigned, so rows are
/// converted with [`TryFrom`].
#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub id: String,
    pub wins: i64,
    pub losses: i64,
}

impl TryFrom<PlayerRow> for PlayerRecord {
    type Error = StoreError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        let counter = |name: &str, value: i64| {
            u32::try_from(value).map_err(|_| {
                StoreError::Corrupt(format!("player {} has {name} = {value}", row.id))
            })
        };
        Ok(PlayerRecord {
            wins: counter("wins", row.wins)?,
            losses: counter("losses", row.losses)?,
            id: row.id.clone(),
        })
    }
}
