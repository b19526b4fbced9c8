//! Route definitions for the `/tokens` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::tokens;
use crate::state::AppState;

/// Routes mounted at `/tokens`.
///
/// ```text
/// POST /exchange  -> exchange
/// POST /refresh   -> refresh (requires token)
/// POST /revoke    -> revoke (requires token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/exchange", post(tokens::exchange))
        .route("/refresh", post(tokens::refresh))
        .route("/revoke", post(tokens::revoke))
}
