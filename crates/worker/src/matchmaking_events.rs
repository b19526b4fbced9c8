//! Matchmaking notifications delivered as SNS batches.
//!
//! Every SNS record carries one notification in its message body. The whole
//! batch goes through [`TicketIngestor`]; a failed batch is returned as an
//! error so the platform redelivers it.

use arena_events::{IngestError, IngestReport, TicketIngestor};
use aws_lambda_events::event::sns::SnsEvent;

/// Ingest every message in `event`.
pub async fn handle(ingestor: &TicketIngestor, event: SnsEvent) -> Result<IngestReport, IngestError> {
    let messages: Vec<String> = event
        .records
        .into_iter()
        .map(|record| record.sns.message)
        .collect();
    tracing::info!(records = messages.len(), "Received matchmaking notifications");

    match ingestor.ingest(&messages).await {
        Ok(report) => {
            tracing::info!(
                written = report.written,
                skipped = report.skipped_events,
                "Matchmaking notifications ingested"
            );
            Ok(report)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to ingest matchmaking notifications");
            Err(e)
        }
    }
}
