//! Terminal output with colors.

use super::table::{render_table, TableStyle};
use super::record_rows;
use crate::models::{SubnetRecord, COLUMNS};
use crate::processing::LookupResult;
use colored::{ColoredString, Colorize};

/// Kind of a status message, shown as a colored marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
    Success,
    Other,
}

fn marker(kind: MessageKind) -> ColoredString {
    match kind {
        MessageKind::Info => "[!]".blue(),
        MessageKind::Error => "[x]".red(),
        MessageKind::Success => "[✓]".green(),
        MessageKind::Other => "[?]".yellow(),
    }
}

/// Format a status message with its marker, e.g. `[x]: bad input`.
pub fn format_message(message: &str, kind: MessageKind) -> String {
    format!("{}: {message}", marker(kind))
}

/// Print a status message; errors go to stderr.
pub fn print_message(message: &str, kind: MessageKind) {
    match kind {
        MessageKind::Error => eprintln!("{}", format_message(message, kind)),
        _ => println!("{}", format_message(message, kind)),
    }
}

/// Print the allocation table to stdout.
pub fn print_vlsm_table(records: &[SubnetRecord]) {
    log::info!("#Start print_vlsm_table() records={}", records.len());
    println!(
        "{}",
        render_table(&COLUMNS, &record_rows(records), TableStyle::Grid, true)
    );
}

/// Print a reverse lookup as a Property/Value table.
pub fn print_lookup(lookup: &LookupResult) {
    print_message(
        &format!("Reverse Lookup Results for {}", lookup.input),
        MessageKind::Info,
    );
    let rows: Vec<Vec<String>> = lookup
        .rows()
        .into_iter()
        .map(|(property, value)| vec![property.to_string(), value])
        .collect();
    println!(
        "{}",
        render_table(&["Property", "Value"], &rows, TableStyle::Grid, false)
    );
}
