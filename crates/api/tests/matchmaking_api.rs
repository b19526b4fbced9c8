//! Integration tests for the `/matchmaking` resource.

mod common;

use arena_core::matchmaking::MatchmakingEventType;
use arena_core::player::PlayerRecord;
use arena_core::ticket::{ticket_expiry, GameSessionEndpoint, PlayerSession, TicketRecord};
use arena_db::{PlayerStore, TicketStore};
use axum::http::StatusCode;
use chrono::Utc;
use common::{
    body_bytes, body_json, delete_authed, get_authed, post_json, TestHarness, CANCELLABLE_TICKET,
    EXPIRED_TOKEN, ISSUED_TICKET, PLAYER_ID, SUBJECTLESS_TOKEN, VALID_TOKEN,
};

async fn seed_player(harness: &TestHarness, wins: u32, losses: u32) {
    let player = PlayerRecord {
        id: PLAYER_ID.to_string(),
        wins,
        losses,
    };
    harness.store.put_player(&player).await.unwrap();
}

// ---------------------------------------------------------------------------
// Start
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_submits_skill_and_latency_and_returns_ticket_id() {
    let harness = TestHarness::new();
    seed_player(&harness, 5, 2).await;

    let response = post_json(
        harness.app(),
        "/matchmaking",
        Some(VALID_TOKEN),
        r#"{"us-east-1": 45, "eu-west-1": 120}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ticketId"], ISSUED_TICKET);

    let started = harness.matchmaker.started.lock().unwrap();
    assert_eq!(started.len(), 1);
    assert_eq!(started[0].player_id, PLAYER_ID);
    assert_eq!(started[0].skill, 440);
    assert_eq!(started[0].latency_ms.get("us-east-1"), Some(&45));
    assert_eq!(started[0].latency_ms.get("eu-west-1"), Some(&120));
}

#[tokio::test]
async fn start_with_empty_body_uses_empty_latency_map() {
    let harness = TestHarness::new();
    seed_player(&harness, 0, 0).await;

    let response = post_json(harness.app(), "/matchmaking", Some(VALID_TOKEN), "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(harness.matchmaker.started.lock().unwrap()[0]
        .latency_ms
        .is_empty());
}

#[tokio::test]
async fn start_with_invalid_json_is_400() {
    let harness = TestHarness::new();
    seed_player(&harness, 0, 0).await;

    let response = post_json(harness.app(), "/matchmaking", Some(VALID_TOKEN), "[1, 2").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid JSON body");
    assert!(harness.matchmaker.started.lock().unwrap().is_empty());
}

#[tokio::test]
async fn start_with_negative_latency_is_400() {
    let harness = TestHarness::new();
    seed_player(&harness, 0, 0).await;

    let response = post_json(
        harness.app(),
        "/matchmaking",
        Some(VALID_TOKEN),
        r#"{"us-east-1": -5}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn start_for_unknown_player_is_500() {
    let harness = TestHarness::new();

    let response = post_json(harness.app(), "/matchmaking", Some(VALID_TOKEN), "{}").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "Internal error, please try again later"
    );
}

#[tokio::test]
async fn start_with_rejected_token_is_400() {
    let harness = TestHarness::new();

    let response = post_json(harness.app(), "/matchmaking", Some(EXPIRED_TOKEN), "{}").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Access Token has expired");
}

#[tokio::test]
async fn start_for_identity_without_subject_is_500() {
    let harness = TestHarness::new();

    let response = post_json(harness.app(), "/matchmaking", Some(SUBJECTLESS_TOKEN), "{}").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn start_without_authorization_header_is_401() {
    let harness = TestHarness::new();

    let response = post_json(harness.app(), "/matchmaking", None, "{}").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Stop
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stop_cancels_ticket_with_empty_200() {
    let harness = TestHarness::new();

    let uri = format!("/matchmaking/{CANCELLABLE_TICKET}");
    let response = delete_authed(harness.app(), &uri, VALID_TOKEN).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(
        *harness.matchmaker.stopped.lock().unwrap(),
        vec![CANCELLABLE_TICKET]
    );
}

#[tokio::test]
async fn stop_unknown_ticket_is_400_with_upstream_message() {
    let harness = TestHarness::new();

    let response = delete_authed(harness.app(), "/matchmaking/ghost", VALID_TOKEN).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Matchmaking ticket ghost not found"
    );
}

// ---------------------------------------------------------------------------
// Poll
// ---------------------------------------------------------------------------

#[tokio::test]
async fn poll_unknown_ticket_is_404() {
    let harness = TestHarness::new();

    let response = get_authed(harness.app(), "/matchmaking/nope", VALID_TOKEN).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn poll_status_only_ticket_omits_players_and_endpoint() {
    let harness = TestHarness::new();
    let ticket = TicketRecord::status_only(
        "t-cancelled",
        MatchmakingEventType::MatchmakingCancelled,
        ticket_expiry(Utc::now().timestamp()),
    );
    harness.store.put_ticket(&ticket).await.unwrap();

    let response = get_authed(harness.app(), "/matchmaking/t-cancelled", VALID_TOKEN).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({"ticketId": "t-cancelled", "ticketType": "MatchmakingCancelled"})
    );
}

#[tokio::test]
async fn poll_succeeded_ticket_returns_camel_case_projection() {
    let harness = TestHarness::new();
    let ticket = TicketRecord {
        id: "t-ok".into(),
        ticket_type: MatchmakingEventType::MatchmakingSucceeded,
        ttl: ticket_expiry(Utc::now().timestamp()),
        players: Some(vec![
            PlayerSession {
                player_id: "p-1".into(),
                player_session_id: "ps-1".into(),
            },
            PlayerSession {
                player_id: "p-2".into(),
                player_session_id: "ps-2".into(),
            },
        ]),
        game_session_info: Some(GameSessionEndpoint {
            ip_address: "192.0.2.10".into(),
            port: 7777,
        }),
    };
    harness.store.put_ticket(&ticket).await.unwrap();

    let response = get_authed(harness.app(), "/matchmaking/t-ok", VALID_TOKEN).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "ticketId": "t-ok",
            "ticketType": "MatchmakingSucceeded",
            "players": [
                {"playerId": "p-1", "playerSessionId": "ps-1"},
                {"playerId": "p-2", "playerSessionId": "ps-2"}
            ],
            "gameSessionInfo": {"ipAddress": "192.0.2.10", "port": 7777}
        })
    );
}

#[tokio::test]
async fn poll_expired_ticket_is_404() {
    let harness = TestHarness::new();
    let ticket = TicketRecord::status_only(
        "t-old",
        MatchmakingEventType::MatchmakingTimedOut,
        Utc::now().timestamp() - 1,
    );
    harness.store.put_ticket(&ticket).await.unwrap();

    let response = get_authed(harness.app(), "/matchmaking/t-old", VALID_TOKEN).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
