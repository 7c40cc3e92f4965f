//! DynamoDB repository implementation.
//!
//! Implements `ItemRepository` from `paramgen_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use paramgen_core::storage::{Item, ItemRepository, Result};

use super::error::map_scan_error;
use super::pagination::scan_all;

/// DynamoDB-based repository implementation.
///
/// Holds one client for the lifetime of the process; the client is safe to
/// share between concurrent requests.
pub struct DynamoDbRepository {
    client: Client,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a client bound to `region`, optionally against a custom
    /// endpoint (for local DynamoDB).
    pub async fn connect(region: &str, endpoint_url: Option<&str>) -> Self {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()));

        if let Some(endpoint) = endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn scan_table(&self, table_name: &str) -> Result<Vec<Item>> {
        let scanned = scan_all(|exclusive_start_key| async move {
            self.client
                .scan()
                .table_name(table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(|e| map_scan_error(e, table_name))
        })
        .await?;

        tracing::debug!(
            table = table_name,
            pages = scanned.pages,
            count = scanned.items.len(),
            "Scan complete"
        );

        Ok(scanned.items)
    }
}
