//! Shared application state.

use std::sync::Arc;

use paramgen_core::storage::ItemRepository;

/// Shared application state.
///
/// Cloned for each request handler. Everything in here is read-only after
/// startup; the table a request scans is resolved per request and never
/// written back.
#[derive(Clone)]
pub struct AppState {
    /// Repository the scans run against.
    pub repository: Arc<dyn ItemRepository>,
    /// Table scanned when a request carries no override.
    default_table_name: Arc<str>,
    /// Log item counts instead of item payloads.
    redact_payloads: bool,
}

impl AppState {
    pub fn new(repository: Arc<dyn ItemRepository>, default_table_name: impl Into<Arc<str>>) -> Self {
        Self {
            repository,
            default_table_name: default_table_name.into(),
            redact_payloads: false,
        }
    }

    /// Enables or disables payload redaction in logs.
    pub fn with_redacted_payloads(mut self, redact: bool) -> Self {
        self.redact_payloads = redact;
        self
    }

    pub fn default_table_name(&self) -> &str {
        &self.default_table_name
    }

    pub fn redact_payloads(&self) -> bool {
        self.redact_payloads
    }
}
