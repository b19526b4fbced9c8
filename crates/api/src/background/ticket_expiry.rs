//! Periodic deletion of expired ticket rows.
//!
//! DynamoDB expires tickets natively through its TTL setting. The
//! PostgreSQL and in-memory backends do not, so the server runs this sweep
//! for them on a fixed interval using `tokio::time::interval`.

use std::sync::Arc;
use std::time::Duration;

use arena_db::TicketStore;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

/// Run the expired-ticket sweep loop until `cancel` is triggered.
pub async fn run(tickets: Arc<dyn TicketStore>, every: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = every.as_secs(), "Ticket expiry job started");

    let mut interval = tokio::time::interval(every);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Ticket expiry job stopping");
                break;
            }
            _ = interval.tick() => {
                match tickets.purge_expired(Utc::now().timestamp()).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Ticket expiry: purged expired rows");
                        } else {
                            tracing::debug!("Ticket expiry: no rows to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Ticket expiry: sweep failed");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use arena_core::matchmaking::MatchmakingEventType;
    use arena_core::ticket::TicketRecord;
    use arena_db::memory::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn sweep_purges_expired_rows_and_stops_on_cancel() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc::now().timestamp();
        store
            .put_ticket(&TicketRecord::status_only(
                "old",
                MatchmakingEventType::MatchmakingTimedOut,
                now - 10,
            ))
            .await
            .unwrap();
        store
            .put_ticket(&TicketRecord::status_only(
                "live",
                MatchmakingEventType::MatchmakingCancelled,
                now + 3600,
            ))
            .await
            .unwrap();

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(
            store.clone(),
            Duration::from_millis(10),
            cancel.clone(),
        ));

        // The first tick fires immediately.
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
        handle.await.unwrap();

        assert_eq!(store.ticket_count().await, 1);
        assert_eq!(store.query_tickets("live").await.unwrap().len(), 1);
    }
}
