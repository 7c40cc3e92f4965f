//! Parameter generator plugin handler.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

use paramgen_core::params::{RequestBody, ResponseBody};

use crate::{handlers::ParamsError, state::AppState};

/// Execute the parameter generator (POST /api/v1/getparams.execute).
///
/// The body is decoded as JSON whatever its `Content-Type`. The table named
/// in `input.parameters.ddb-table-name` is scanned, or the configured
/// default when that is absent or empty.
pub async fn execute(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ResponseBody>, ParamsError> {
    let request: RequestBody = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse request body");
        ParamsError::InvalidRequest
    })?;
    tracing::info!(request = %payload_json(&request), "got request");

    let table_name = request.effective_table_name(state.default_table_name());

    let items = state
        .repository
        .scan_table(table_name)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, table = table_name, "Failed to retrieve data from DynamoDB");
            ParamsError::ScanFailed
        })?;

    if state.redact_payloads() {
        tracing::info!(table = table_name, count = items.len(), "output request");
    } else {
        tracing::info!(table = table_name, items = %payload_json(&items), "output request");
    }

    Ok(Json(ResponseBody::new(items)))
}

/// Renders a payload as JSON for the logs.
fn payload_json<T: Serialize>(payload: &T) -> String {
    serde_json::to_string(payload)
        .unwrap_or_else(|e| format!("<payload not serializable: {e}>"))
}

#[cfg(test)]
mod tests {
    use paramgen_core::params::{Input, Parameters};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_is_logged_as_json() {
        let request = RequestBody {
            input: Input {
                parameters: Parameters {
                    ddb_table_name: Some("my-table".to_string()),
                },
            },
        };

        assert_eq!(
            payload_json(&request),
            r#"{"input":{"parameters":{"ddb-table-name":"my-table"}}}"#
        );
    }

    #[test]
    fn test_items_are_logged_as_json() {
        let item = json!({"id": "1", "name": "x"}).as_object().cloned().unwrap();

        assert_eq!(payload_json(&vec![item]), r#"[{"id":"1","name":"x"}]"#);
    }

    #[test]
    fn test_serialization_error_is_reported() {
        struct Broken;

        impl Serialize for Broken {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("boom"))
            }
        }

        assert_eq!(payload_json(&Broken), "<payload not serializable: boom>");
    }
}
