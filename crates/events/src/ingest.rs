//! Batch ingestion of matchmaking notifications into the ticket table.
//!
//! A batch is acknowledged only when every message in it decoded, normalized
//! and was written. Any failure fails the whole batch; the delivery platform
//! then redelivers it, and the rows already written are rewritten with the
//! same content.

use std::sync::Arc;

use arena_core::error::CoreError;
use arena_core::ticket::TicketRecord;
use arena_core::types::EpochSecs;
use arena_db::{StoreError, TicketStore};
use chrono::Utc;
use futures::future::try_join_all;

use crate::notification::decode_notification;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Message `index` of the batch is not a valid notification.
    #[error("Message {index} is not a valid notification: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Message `index` decoded but cannot be turned into ticket rows.
    #[error("Message {index} cannot be normalized: {source}")]
    Normalize {
        index: usize,
        #[source]
        source: CoreError,
    },

    #[error("Ticket write failed: {0}")]
    Store(#[from] StoreError),
}

/// Outcome of a successfully ingested batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Messages in the batch.
    pub records: usize,
    /// Ticket rows written.
    pub written: usize,
    /// Messages whose event type produces no rows.
    pub skipped_events: usize,
}

/// Writes normalized ticket rows for batches of notifications.
#[derive(Clone)]
pub struct TicketIngestor {
    tickets: Arc<dyn TicketStore>,
}

impl TicketIngestor {
    pub fn new(tickets: Arc<dyn TicketStore>) -> Self {
        Self { tickets }
    }

    /// Ingest a batch using the current time for ticket expiry.
    pub async fn ingest(&self, messages: &[String]) -> Result<IngestReport, IngestError> {
        self.ingest_at(messages, Utc::now().timestamp()).await
    }

    /// Ingest a batch, expiring every written row one hour after `now`.
    pub async fn ingest_at(
        &self,
        messages: &[String],
        now: EpochSecs,
    ) -> Result<IngestReport, IngestError> {
        let mut report = IngestReport {
            records: messages.len(),
            ..IngestReport::default()
        };
        let mut rows: Vec<TicketRecord> = Vec::new();

        for (index, message) in messages.iter().enumerate() {
            let notification = decode_notification(message)
                .map_err(|source| IngestError::Decode { index, source })?;

            let event_type = &notification.detail.event_type;
            if event_type.is_ignored() {
                tracing::debug!(index, event_type = %event_type, "Skipping matchmaking event");
                report.skipped_events += 1;
                continue;
            }

            let records = arena_core::matchmaking::normalize_notification(&notification, now)
                .map_err(|source| IngestError::Normalize { index, source })?;
            tracing::info!(
                index,
                event_type = %event_type,
                tickets = records.len(),
                "Normalized matchmaking event"
            );
            rows.extend(records);
        }

        try_join_all(rows.iter().map(|row| self.write(row))).await?;

        report.written = rows.len();
        Ok(report)
    }

    async fn write(&self, row: &TicketRecord) -> Result<(), StoreError> {
        self.tickets.put_ticket(row).await.map_err(|e| {
            tracing::error!(ticket_id = %row.id, error = %e, "Failed to write ticket");
            e
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
