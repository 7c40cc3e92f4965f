//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tokio::sync::RwLock;

use paramgen_core::storage::{Item, ItemRepository, RepositoryError, Result};

use crate::storage::dynamodb::conversions::item_to_json;

type RawItem = HashMap<String, AttributeValue>;

/// In-memory storage backend for testing.
///
/// Also records the name of every scanned table so tests can check which
/// table a request resolved to.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<HashMap<String, Vec<RawItem>>>>,
    scanned: Arc<RwLock<Vec<String>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a table holding `items` in scan order.
    pub async fn with_table(self, name: &str, items: Vec<RawItem>) -> Self {
        self.tables.write().await.insert(name.to_string(), items);
        self
    }

    /// Names of the tables scanned so far, in call order.
    pub async fn scanned_tables(&self) -> Vec<String> {
        self.scanned.read().await.clone()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn scan_table(&self, table_name: &str) -> Result<Vec<Item>> {
        self.scanned.write().await.push(table_name.to_string());

        let tables = self.tables.read().await;
        let items = tables
            .get(table_name)
            .ok_or_else(|| RepositoryError::TableNotFound(table_name.to_string()))?;

        items.iter().map(item_to_json).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    #[tokio::test]
    async fn test_scan_returns_items_in_order() {
        let repo = InMemoryRepository::new()
            .with_table(
                "apps",
                vec![
                    HashMap::from([("id".to_string(), s("2"))]),
                    HashMap::from([("id".to_string(), s("1"))]),
                ],
            )
            .await;

        let items = repo.scan_table("apps").await.unwrap();

        assert_eq!(
            serde_json::to_value(items).unwrap(),
            json!([{"id": "2"}, {"id": "1"}])
        );
        assert_eq!(repo.scanned_tables().await, vec!["apps"]);
    }

    #[tokio::test]
    async fn test_missing_table_is_error() {
        let repo = InMemoryRepository::new();

        let result = repo.scan_table("missing").await;

        assert_eq!(
            result,
            Err(RepositoryError::TableNotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_bad_item_fails_whole_scan() {
        let repo = InMemoryRepository::new()
            .with_table(
                "apps",
                vec![
                    HashMap::from([("id".to_string(), s("1"))]),
                    HashMap::from([("n".to_string(), AttributeValue::N("x".to_string()))]),
                ],
            )
            .await;

        assert!(repo.scan_table("apps").await.is_err());
    }
}
