//! Row types for the PostgreSQL backend.

pub mod player;
pub mod ticket;
