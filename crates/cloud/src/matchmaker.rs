//! Managed matchmaking operations.

use std::collections::HashMap;

use arena_core::matchmaking::MatchmakingRequest;
use arena_core::types::TicketId;
use async_trait::async_trait;
use aws_sdk_gamelift::types::{AttributeValue, Player};
use aws_sdk_gamelift::Client;

use crate::error::{classify_sdk_error, CloudError, CloudResult};

/// Player attribute the matchmaking rule set reads the skill score from.
pub const SKILL_ATTRIBUTE: &str = "skill";

#[async_trait]
pub trait Matchmaker: Send + Sync {
    /// Open a ticket for one player and return its id.
    async fn start_matchmaking(&self, request: &MatchmakingRequest) -> CloudResult<TicketId>;

    /// Cancel a ticket. Unknown or already-finished tickets yield
    /// [`CloudError::NotFound`].
    async fn stop_matchmaking(&self, ticket_id: &str) -> CloudResult<()>;
}

/// [`Matchmaker`] backed by a GameLift FlexMatch configuration.
#[derive(Debug, Clone)]
pub struct GameLiftMatchmaker {
    client: Client,
    configuration_name: String,
}

impl GameLiftMatchmaker {
    pub fn new(client: Client, configuration_name: String) -> Self {
        Self {
            client,
            configuration_name,
        }
    }
}

/// The single-player entry submitted with a start request.
fn player_entry(request: &MatchmakingRequest) -> Player {
    let latency: HashMap<String, i32> = request
        .latency_ms
        .iter()
        .map(|(region, ms)| (region.clone(), *ms))
        .collect();

    Player::builder()
        .player_id(&request.player_id)
        .set_latency_in_ms(Some(latency))
        .player_attributes(
            SKILL_ATTRIBUTE,
            AttributeValue::builder().n(request.skill as f64).build(),
        )
        .build()
}

#[async_trait]
impl Matchmaker for GameLiftMatchmaker {
    async fn start_matchmaking(&self, request: &MatchmakingRequest) -> CloudResult<TicketId> {
        let output = self
            .client
            .start_matchmaking()
            .configuration_name(&self.configuration_name)
            .players(player_entry(request))
            .send()
            .await
            .map_err(classify_sdk_error)?;

        output
            .matchmaking_ticket()
            .and_then(|ticket| ticket.ticket_id())
            .map(str::to_string)
            .ok_or_else(|| {
                CloudError::UnexpectedResponse("StartMatchmaking returned no ticket id".into())
            })
    }

    async fn stop_matchmaking(&self, ticket_id: &str) -> CloudResult<()> {
        self.client
            .stop_matchmaking()
            .ticket_id(ticket_id)
            .send()
            .await
            .map_err(classify_sdk_error)?;
        Ok(())
    }
}
