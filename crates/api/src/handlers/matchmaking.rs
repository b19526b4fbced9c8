//! Handlers for the `/matchmaking` resource (start, stop, poll).

use arena_core::error::CoreError;
use arena_core::matchmaking::{LatencyMap, MatchmakingRequest};
use arena_core::player::single_player;
use arena_core::ticket::TicketOutput;
use arena_core::types::TicketId;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::parse_json_body;
use crate::middleware::auth::AuthPlayer;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub ticket_id: TicketId,
}

/// POST /matchmaking
///
/// Open a matchmaking ticket for the caller. The body is the per-region
/// latency map, e.g. `{"us-east-1": 45, "eu-west-1": 120}`.
pub async fn start(
    State(state): State<AppState>,
    player: AuthPlayer,
    body: Bytes,
) -> AppResult<Json<StartResponse>> {
    let latency: LatencyMap = parse_json_body(&body)?;

    let rows = state.players.query_players(&player.player_id).await?;
    let record = single_player(&player.player_id, rows)?;
    let request = MatchmakingRequest::for_player(&record, latency)?;

    let ticket_id = state.matchmaker.start_matchmaking(&request).await?;
    tracing::info!(
        player_id = %request.player_id,
        skill = request.skill,
        ticket_id = %ticket_id,
        "Matchmaking started"
    );

    Ok(Json(StartResponse { ticket_id }))
}

/// DELETE /matchmaking/{tid}
///
/// Cancel a matchmaking ticket.
pub async fn stop(
    State(state): State<AppState>,
    player: AuthPlayer,
    Path(ticket_id): Path<TicketId>,
) -> AppResult<StatusCode> {
    state.matchmaker.stop_matchmaking(&ticket_id).await?;
    tracing::info!(player_id = %player.player_id, ticket_id = %ticket_id, "Matchmaking stopped");
    Ok(StatusCode::OK)
}

/// GET /matchmaking/{tid}
///
/// Latest recorded status of a ticket, as written by the notification
/// worker.
pub async fn poll(
    State(state): State<AppState>,
    _player: AuthPlayer,
    Path(ticket_id): Path<TicketId>,
) -> AppResult<Json<TicketOutput>> {
    let rows = state.tickets.query_tickets(&ticket_id).await?;
    let ticket = rows.first().ok_or(CoreError::NotFound {
        entity: "Ticket",
        id: ticket_id.clone(),
    })?;

    tracing::debug!(ticket_id = %ticket_id, ticket_type = %ticket.ticket_type, "Ticket polled");
    Ok(Json(TicketOutput::from(ticket)))
}
