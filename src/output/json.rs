//! JSON output for allocated subnets.

use crate::error::Result;
use crate::models::SubnetRecord;
use serde::Serialize;

/// A record with its 1-based position under the `#` key.
#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(rename = "#")]
    index: usize,
    #[serde(flatten)]
    record: &'a SubnetRecord,
}

/// Render records as a pretty-printed JSON array of per-record objects.
pub fn render_json(records: &[SubnetRecord]) -> Result<String> {
    let rows: Vec<JsonRow> = records
        .iter()
        .enumerate()
        .map(|(i, record)| JsonRow {
            index: i + 1,
            record,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
