//! Arena domain types.
//!
//! Pure logic shared by the API server, the storage backends and the
//! serverless workers. Nothing in this crate performs I/O.

pub mod error;
pub mod matchmaking;
pub mod player;
pub mod ticket;
pub mod types;
