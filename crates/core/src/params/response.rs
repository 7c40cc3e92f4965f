use serde::Serialize;

use crate::storage::Item;

/// Body returned to the orchestrator.
///
/// `{"output": {"parameters": [ {...}, ... ]}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseBody {
    pub output: Output,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Output {
    /// One object per scanned item, in scan order.
    pub parameters: Vec<Item>,
}

impl ResponseBody {
    pub fn new(parameters: Vec<Item>) -> Self {
        Self {
            output: Output { parameters },
        }
    }
}
