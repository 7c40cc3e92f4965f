use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Table not found: {0}")]
    TableNotFound(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data in attribute {attribute}: {reason}")]
    InvalidData { attribute: String, reason: String },
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

impl RepositoryError {
    /// Creates an `InvalidData` error for the named attribute.
    pub fn invalid_data(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }
}
