//! Route definitions for the `/matchmaking` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::matchmaking;
use crate::state::AppState;

/// Routes mounted at `/matchmaking`. All require an authenticated player.
///
/// ```text
/// POST   /        -> start
/// GET    /{tid}   -> poll
/// DELETE /{tid}   -> stop
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(matchmaking::start))
        .route("/{tid}", get(matchmaking::poll).delete(matchmaking::stop))
}
