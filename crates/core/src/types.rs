/// Identity-provider subject (`sub`) used as the player table key.
pub type PlayerId = String;

/// Ticket identifier assigned by the managed matchmaking service.
pub type TicketId = String;

/// Seconds since the Unix epoch. Ticket TTLs are stored in this unit.
pub type EpochSecs = i64;
