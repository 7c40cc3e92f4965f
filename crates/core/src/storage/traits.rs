use async_trait::async_trait;

use super::{Item, Result};

/// Read access to the tables backing the parameter generator.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Reads every item of `table_name`, in store order.
    ///
    /// Fails as a whole: if any page cannot be fetched or any item cannot be
    /// converted, no items are returned.
    async fn scan_table(&self, table_name: &str) -> Result<Vec<Item>>;
}
