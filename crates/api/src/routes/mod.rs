pub mod health;
pub mod matchmaking;
pub mod players;
pub mod tokens;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tokens/exchange                 code exchange (public)
/// /tokens/refresh                  refresh (requires token)
/// /tokens/revoke                   global sign-out (requires token)
///
/// /matchmaking                     start (POST)
/// /matchmaking/{tid}               poll (GET), stop (DELETE)
///
/// /players/{pid}                   caller's record (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tokens", tokens::router())
        .nest("/matchmaking", matchmaking::router())
        .nest("/players", players::router())
}
