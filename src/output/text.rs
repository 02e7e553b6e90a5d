//! Plain text output.

use super::record_rows;
use super::table::{render_table, TableStyle};
use crate::models::{SubnetRecord, COLUMNS};

/// Render records as a borderless, uncolored table.
pub fn render_text(records: &[SubnetRecord]) -> String {
    let mut table = render_table(&COLUMNS, &record_rows(records), TableStyle::Plain, false);
    table.push('\n');
    table
}
