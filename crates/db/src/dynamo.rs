//! DynamoDB storage backend.
//!
//! Records are converted to and from items with `serde_dynamo`, so the
//! stored attribute names are exactly the PascalCase names of the record
//! types. Ticket expiry relies on the table's TTL setting on the `TTL`
//! attribute; because TTL deletion lags, queries also filter expired rows.

use std::collections::HashMap;

use arena_core::player::PlayerRecord;
use arena_core::ticket::TicketRecord;
use arena_core::types::EpochSecs;
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::store::{PlayerStore, TicketStore};

/// Partition key attribute shared by both tables.
const KEY_ATTRIBUTE: &str = "Id";

type Item = HashMap<String, AttributeValue>;

/// Player and ticket tables in DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    player_table: String,
    ticket_table: String,
}

impl DynamoStore {
    pub fn new(client: Client, player_table: String, ticket_table: String) -> Self {
        Self {
            client,
            player_table,
            ticket_table,
        }
    }

    async fn put(&self, table: &str, item: Item) -> StoreResult<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    /// Key-condition query on the partition key, returning raw items.
    async fn query_by_key(&self, table: &str, id: &str) -> StoreResult<Vec<Item>> {
        let output = self
            .client
            .query()
            .table_name(table)
            .key_condition_expression("#id = :id")
            .expression_attribute_names("#id", KEY_ATTRIBUTE)
            .expression_attribute_values(":id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(sdk_error)?;

        tracing::debug!(table, id, count = output.count, "DynamoDB key query");
        Ok(output.items.unwrap_or_default())
    }
}

fn sdk_error<E>(err: E) -> StoreError
where
    E: std::error::Error + 'static,
{
    StoreError::Dynamo(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl PlayerStore for DynamoStore {
    async fn put_player(&self, player: &PlayerRecord) -> StoreResult<()> {
        let item: Item = serde_dynamo::to_item(player)?;
        self.put(&self.player_table, item).await
    }

    async fn query_players(&self, player_id: &str) -> StoreResult<Vec<PlayerRecord>> {
        self.query_by_key(&self.player_table, player_id)
            .await?
            .into_iter()
            .map(|item| serde_dynamo::from_item(item).map_err(StoreError::from))
            .collect()
    }
}

#[async_trait]
impl TicketStore for DynamoStore {
    async fn put_ticket(&self, ticket: &TicketRecord) -> StoreResult<()> {
        let item: Item = serde_dynamo::to_item(ticket)?;
        self.put(&self.ticket_table, item).await
    }

    async fn query_tickets(&self, ticket_id: &str) -> StoreResult<Vec<TicketRecord>> {
        let now = Utc::now().timestamp();
        let tickets = self
            .query_by_key(&self.ticket_table, ticket_id)
            .await?
            .into_iter()
            .map(|item| serde_dynamo::from_item(item).map_err(StoreError::from))
            .collect::<StoreResult<Vec<TicketRecord>>>()?;

        Ok(tickets.into_iter().filter(|t| !t.is_expired(now)).collect())
    }

    async fn purge_expired(&self, _now: EpochSecs) -> StoreResult<u64> {
        Ok(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
