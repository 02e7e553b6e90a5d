//! CSV output formatting for allocated subnets.

use super::record_rows;
use crate::error::{Result, VlsmError};
use crate::models::{SubnetRecord, COLUMNS};

/// Render records as CSV: a header row followed by one row per record.
pub fn render_csv(records: &[SubnetRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for row in record_rows(records) {
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| VlsmError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        VlsmError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
