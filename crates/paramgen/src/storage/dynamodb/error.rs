//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `paramgen_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use paramgen_core::storage::RepositoryError;

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table_name: &str,
) -> RepositoryError {
    match &err {
        SdkError::DispatchFailure(failure) => {
            return RepositoryError::ConnectionFailed(format!("{failure:?}"));
        }
        SdkError::TimeoutError(_) => {
            return RepositoryError::ConnectionFailed("Request timed out".to_string());
        }
        _ => {}
    }

    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            RepositoryError::TableNotFound(table_name.to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}
