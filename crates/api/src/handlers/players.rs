//! Handlers for the `/players` resource.

use arena_core::player::{single_player, PlayerOutput};
use arena_core::types::PlayerId;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthPlayer;
use crate::state::AppState;

/// GET /players/{pid}
///
/// The caller's own win/loss record. The player is determined by the access
/// token; the path id is not used for the lookup.
pub async fn get_player(
    State(state): State<AppState>,
    player: AuthPlayer,
    Path(requested): Path<PlayerId>,
) -> AppResult<Json<PlayerOutput>> {
    if requested != player.player_id {
        tracing::debug!(
            requested = %requested,
            player_id = %player.player_id,
            "Path player id differs from caller; returning caller's record"
        );
    }

    let rows = state.players.query_players(&player.player_id).await?;
    let record = single_player(&player.player_id, rows)?;
    Ok(Json(PlayerOutput::from(record)))
}
