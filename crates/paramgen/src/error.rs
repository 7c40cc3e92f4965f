use thiserror::Error;

/// Errors that stop the service before it starts listening.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ddb-table-name must not be empty")]
    EmptyTableName,
    #[error("Invalid listening port: {0:?}")]
    InvalidPort(String),
    #[error("Unable to determine the AWS region: set AWS_DEFAULT_REGION or configure a default region")]
    RegionUnavailable,
}
