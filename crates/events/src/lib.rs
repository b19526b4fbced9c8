//! Matchmaking notification ingestion.
//!
//! The matchmaking service publishes ticket lifecycle notifications in
//! batches. This crate turns a batch into ticket rows:
//!
//! - [`notification`] -- decoding a raw message into a
//!   [`MatchmakingNotification`](arena_core::matchmaking::MatchmakingNotification).
//! - [`ingest`] -- [`TicketIngestor`], which normalizes every notification
//!   and writes the resulting rows concurrently, failing the whole batch on
//!   any error so the delivery platform redelivers it.

pub mod ingest;
pub mod notification;

pub use ingest::{IngestError, IngestReport, TicketIngestor};
pub use notification::decode_notification;
