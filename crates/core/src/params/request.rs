use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_string;

/// Body of a parameter generator call.
///
/// `{"input": {"parameters": {"ddb-table-name": "name"}}}`
///
/// `input` and `parameters` must be present. Any other field sent by the
/// orchestrator is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    pub input: Input,
}

/// `{"parameters": {"ddb-table-name": "name"}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub parameters: Parameters,
}

/// `{"ddb-table-name": "name"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    /// Table to scan instead of the configured default.
    #[serde(
        rename = "ddb-table-name",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub ddb_table_name: Option<String>,
}

impl RequestBody {
    /// Builds a request carrying the given table override.
    #[cfg(test)]
    pub fn with_table_name(name: impl Into<String>) -> Self {
        Self {
            input: Input {
                parameters: Parameters {
                    ddb_table_name: Some(name.into()),
                },
            },
        }
    }

    /// Returns the table this request should scan.
    ///
    /// The override wins when present; otherwise `default` is used. The
    /// default is never modified, so each request resolves independently.
    pub fn effective_table_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.input
            .parameters
            .ddb_table_name
            .as_deref()
            .unwrap_or(default)
    }
}
