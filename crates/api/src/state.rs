use std::sync::Arc;

use arena_cloud::{IdentityProvider, Matchmaker, TokenEndpoint};
use arena_db::{PlayerStore, TicketStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every collaborator is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Player table.
    pub players: Arc<dyn PlayerStore>,
    /// Ticket table, written by the notification worker.
    pub tickets: Arc<dyn TicketStore>,
    /// Identity pool: token resolution, refresh and sign-out.
    pub identity: Arc<dyn IdentityProvider>,
    /// Managed matchmaking service.
    pub matchmaker: Arc<dyn Matchmaker>,
    /// Hosted OAuth token endpoint for code exchange.
    pub token_endpoint: Arc<dyn TokenEndpoint>,
}
