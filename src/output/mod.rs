//! Output formatting for allocated subnets.
//!
//! - [`table`] - plain and grid table rendering
//! - [`terminal`] - colored console output
//! - [`csv`], [`json`], [`html`], [`text`] - file exports

mod csv;
mod html;
mod json;
mod table;
mod terminal;
mod text;

use crate::error::Result;
use crate::models::SubnetRecord;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub use self::csv::render_csv;
pub use html::render_html;
pub use json::render_json;
pub use table::{format_field, render_table, TableStyle};
pub use terminal::{format_message, print_lookup, print_message, print_vlsm_table, MessageKind};
pub use text::render_text;

/// File formats records can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Json,
    Html,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }

    /// Render records in this format.
    pub fn render(&self, records: &[SubnetRecord]) -> Result<String> {
        match self {
            ExportFormat::Txt => Ok(render_text(records)),
            ExportFormat::Csv => render_csv(records),
            ExportFormat::Json => render_json(records),
            ExportFormat::Html => Ok(render_html(records)),
        }
    }
}

/// Display cells for each record, numbered from 1.
pub(crate) fn record_rows(records: &[SubnetRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| r.cells(i + 1).to_vec())
        .collect()
}

/// Write records to `<base>.<ext>` and return the written path.
///
/// The document is rendered in full before the file is created, so a
/// rendering error leaves nothing behind.
pub fn export(records: &[SubnetRecord], format: ExportFormat, base: &Path) -> Result<PathBuf> {
    let content = format.render(records)?;
    let mut path = base.as_os_str().to_owned();
    path.push(".");
    path.push(format.extension());
    let path = PathBuf::from(path);

    log::info!("Writing {} records to {}", records.len(), path.display());
    std::fs::write(&path, content)?;
    Ok(path)
}
