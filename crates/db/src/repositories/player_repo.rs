//! Repository for the `players` table.

use arena_core::player::PlayerRecord;
use sqlx::PgPool;

use crate::models::player::PlayerRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, wins, losses";

/// Provides key operations for player rows.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a player, overwriting the counters of an existing row.
    pub async fn upsert(pool: &PgPool, player: &PlayerRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO players (id, wins, losses)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE
             SET wins = EXCLUDED.wins, losses = EXCLUDED.losses",
        )
        .bind(&player.id)
        .bind(i64::from(player.wins))
        .bind(i64::from(player.losses))
        .execute(pool)
        .await?;
        Ok(())
    }

    /// All rows keyed by `id` (zero or one, given the primary key).
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Vec<PlayerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, PlayerRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }
}
