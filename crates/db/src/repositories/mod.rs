//! Repository layer for the PostgreSQL backend.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod player_repo;
pub mod ticket_repo;

pub use player_repo::PlayerRepo;
pub use ticket_repo::TicketRepo;
