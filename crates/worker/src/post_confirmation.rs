//! Post-confirmation hook: every confirmed user gets a fresh player row.

use arena_cloud::identity::SUBJECT_ATTRIBUTE;
use arena_core::player::PlayerRecord;
use arena_db::PlayerStore;
use aws_lambda_events::event::cognito::CognitoEventUserPoolsPostConfirmation;

use crate::error::HookError;

/// Write a 0/0 player record keyed by the user's subject id and hand the
/// event back unchanged.
pub async fn handle(
    players: &dyn PlayerStore,
    event: CognitoEventUserPoolsPostConfirmation,
) -> Result<CognitoEventUserPoolsPostConfirmation, HookError> {
    let subject = event
        .request
        .user_attributes
        .get(SUBJECT_ATTRIBUTE)
        .ok_or(HookError::MissingAttribute(SUBJECT_ATTRIBUTE))?;

    let player = PlayerRecord::new(subject.as_str());
    players.put_player(&player).await.map_err(|e| {
        tracing::error!(player_id = %player.id, error = %e, "Failed to create player");
        e
    })?;

    tracing::info!(player_id = %player.id, "Player created");
    Ok(event)
}
