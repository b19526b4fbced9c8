use axum::routing::get;
use axum::Router;

use crate::handlers::players;
use crate::state::AppState;

/// Routes mounted at `/players`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{pid}", get(players::get_player))
}
