//! Serverless function handlers.
//!
//! - [`matchmaking_events`] -- ingests matchmaking notification batches
//!   delivered over SNS.
//! - [`pre_signup`] -- identity-pool hook run before a user is created.
//! - [`post_confirmation`] -- identity-pool hook that creates the player row.
//!
//! Each handler is a plain async function over its payload type so it can be
//! tested without the function runtime; the binaries under `src/bin` wire
//! them to `lambda_runtime`.

pub mod error;
pub mod matchmaking_events;
pub mod post_confirmation;
pub mod pre_signup;
pub mod telemetry;

pub use error::HookError;
