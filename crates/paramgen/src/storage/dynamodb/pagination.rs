//! Scan pagination.
//!
//! Drives a page-fetch function until DynamoDB stops returning a
//! `LastEvaluatedKey`. Kept apart from the client so it can be tested with
//! canned pages.

use std::collections::HashMap;
use std::future::Future;

use aws_sdk_dynamodb::operation::scan::ScanOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use paramgen_core::storage::{Item, Result};

use super::conversions::item_to_json;

/// Key a scan page resumes from.
pub type StartKey = HashMap<String, AttributeValue>;

/// Items of a whole table and the number of pages it took.
#[derive(Debug, Default, PartialEq)]
pub struct ScannedItems {
    pub items: Vec<Item>,
    pub pages: usize,
}

/// Fetch pages with `fetch` until the last one, converting every item.
///
/// `fetch` receives the `LastEvaluatedKey` of the previous page (`None` for
/// the first one). A missing or empty key ends the scan. Any fetch or
/// conversion error aborts the scan and discards the items read so far.
pub async fn scan_all<F, Fut>(mut fetch: F) -> Result<ScannedItems>
where
    F: FnMut(Option<StartKey>) -> Fut,
    Fut: Future<Output = Result<ScanOutput>>,
{
    let mut scanned = ScannedItems::default();
    let mut exclusive_start_key = None;

    loop {
        let output = fetch(exclusive_start_key.take()).await?;
        scanned.pages += 1;

        for item in output.items.unwrap_or_default() {
            scanned.items.push(item_to_json(&item)?);
        }

        match output.last_evaluated_key {
            Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
            _ => break,
        }
    }

    Ok(scanned)
}
