#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arena_api::config::ServerConfig;
use arena_api::routes;
use arena_api::state::AppState;
use arena_cloud::{
    CloudError, CloudResult, CognitoConfig, IdentityProvider, MatchmakingConfig, Matchmaker,
    TokenEndpoint, TokenSet,
};
use arena_core::matchmaking::MatchmakingRequest;
use arena_core::player::PlayerRecord;
use arena_core::types::TicketId;
use arena_db::memory::MemoryStore;
use arena_db::{PlayerStore, StorageBackend, StorageConfig, StoreResult};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Access token the fake identity pool resolves to [`PLAYER_ID`].
pub const VALID_TOKEN: &str = "valid-access-token";
/// Access token the fake identity pool rejects.
pub const EXPIRED_TOKEN: &str = "expired-access-token";
/// Access token for a user without a subject attribute.
pub const SUBJECTLESS_TOKEN: &str = "subjectless-access-token";
pub const PLAYER_ID: &str = "3f1c0a4e-player";
pub const VALID_REFRESH_TOKEN: &str = "valid-refresh-token";

// ---------------------------------------------------------------------------
// Fake collaborators
// ---------------------------------------------------------------------------

/// Identity pool with a fixed set of known tokens.
#[derive(Default)]
pub struct FakeIdentity {
    pub signed_out: Mutex<Vec<String>>,
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn resolve_subject(&self, access_token: &str) -> CloudResult<Option<String>> {
        match access_token {
            VALID_TOKEN => Ok(Some(PLAYER_ID.to_string())),
            SUBJECTLESS_TOKEN => Ok(None),
            _ => Err(CloudError::NotAuthorized(
                "Access Token has expired".into(),
            )),
        }
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> CloudResult<Option<String>> {
        match refresh_token {
            VALID_REFRESH_TOKEN => Ok(Some("refreshed-access-token".into())),
            _ => Err(CloudError::NotAuthorized("Invalid Refresh Token".into())),
        }
    }

    async fn global_sign_out(&self, access_token: &str) -> CloudResult<()> {
        if access_token != VALID_TOKEN {
            return Err(CloudError::NotAuthorized("Access Token has been revoked".into()));
        }
        self.signed_out
            .lock()
            .unwrap()
            .push(access_token.to_string());
        Ok(())
    }
}

/// Matchmaker that records requests and knows one cancellable ticket.
#[derive(Default)]
pub struct FakeMatchmaker {
    pub started: Mutex<Vec<MatchmakingRequest>>,
    pub stopped: Mutex<Vec<String>>,
}

pub const CANCELLABLE_TICKET: &str = "ticket-in-progress";
pub const ISSUED_TICKET: &str = "ticket-issued-1";

#[async_trait]
impl Matchmaker for FakeMatchmaker {
    async fn start_matchmaking(&self, request: &MatchmakingRequest) -> CloudResult<TicketId> {
        self.started.lock().unwrap().push(request.clone());
        Ok(ISSUED_TICKET.to_string())
    }

    async fn stop_matchmaking(&self, ticket_id: &str) -> CloudResult<()> {
        if ticket_id != CANCELLABLE_TICKET {
            return Err(CloudError::NotFound(format!(
                "Matchmaking ticket {ticket_id} not found"
            )));
        }
        self.stopped.lock().unwrap().push(ticket_id.to_string());
        Ok(())
    }
}

/// Token endpoint that accepts each of its codes exactly once.
pub struct FakeTokenEndpoint {
    unused: Mutex<HashMap<String, TokenSet>>,
}

pub const FRESH_CODE: &str = "fresh-code";
pub const BROKEN_CODE: &str = "code-while-endpoint-down";

impl Default for FakeTokenEndpoint {
    fn default() -> Self {
        let tokens = TokenSet {
            access_token: "exchanged-access-token".into(),
            refresh_token: Some("exchanged-refresh-token".into()),
            id_token: Some("exchanged-id-token".into()),
            expires_in: 3600,
        };
        Self {
            unused: Mutex::new(HashMap::from([(FRESH_CODE.to_string(), tokens)])),
        }
    }
}

#[async_trait]
impl TokenEndpoint for FakeTokenEndpoint {
    async fn exchange_code(&self, code: &str) -> CloudResult<TokenSet> {
        if code == BROKEN_CODE {
            return Err(CloudError::Unavailable { status: 503 });
        }
        self.unused
            .lock()
            .unwrap()
            .remove(code)
            .ok_or_else(|| CloudError::Rejected {
                status: 400,
                body: r#"{"error":"invalid_grant"}"#.into(),
            })
    }
}

/// Player table that returns every player twice.
pub struct DuplicatePlayerStore;

#[async_trait]
impl PlayerStore for DuplicatePlayerStore {
    async fn put_player(&self, _player: &PlayerRecord) -> StoreResult<()> {
        Ok(())
    }

    async fn query_players(&self, player_id: &str) -> StoreResult<Vec<PlayerRecord>> {
        Ok(vec![PlayerRecord::new(player_id), PlayerRecord::new(player_id)])
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Handles to the state behind a test app, for arranging and asserting.
pub struct TestHarness {
    pub store: Arc<MemoryStore>,
    pub identity: Arc<FakeIdentity>,
    pub matchmaker: Arc<FakeMatchmaker>,
    pub token_endpoint: Arc<FakeTokenEndpoint>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            identity: Arc::new(FakeIdentity::default()),
            matchmaker: Arc::new(FakeMatchmaker::default()),
            token_endpoint: Arc::new(FakeTokenEndpoint::default()),
        }
    }

    pub fn state(&self) -> AppState {
        AppState {
            config: Arc::new(test_config()),
            players: self.store.clone(),
            tickets: self.store.clone(),
            identity: self.identity.clone(),
            matchmaker: self.matchmaker.clone(),
            token_endpoint: self.token_endpoint.clone(),
        }
    }

    pub fn app(&self) -> Router {
        build_test_app(self.state())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        ticket_sweep_interval_secs: 300,
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            player_table: "PlayerTable".into(),
            ticket_table: "TicketTable".into(),
            database_url: None,
        },
        cognito: CognitoConfig {
            domain: "arena-test.auth.us-east-1.amazoncognito.com".into(),
            client_id: "test-client".into(),
            callback_url: "http://localhost:5173/callback".into(),
        },
        matchmaking: MatchmakingConfig {
            configuration_name: "arena-test-config".into(),
        },
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with an optional access token and raw body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: &str,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, token);
    }
    if !body.is_empty() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, "").await
}

pub async fn get_authed(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), "").await
}

pub async fn post_json(app: Router, uri: &str, token: Option<&str>, body: &str) -> Response {
    send(app, Method::POST, uri, token, body).await
}

pub async fn delete_authed(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), "").await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
