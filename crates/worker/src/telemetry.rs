//! Log setup shared by the function binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a JSON `tracing` subscriber.
///
/// Timestamps are left out because the platform stamps every log line.
/// `RUST_LOG` overrides the default `arena_worker=info,arena_events=info`.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_worker=info,arena_events=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(false)
                .without_time(),
        )
        .init();
}
