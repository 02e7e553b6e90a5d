//! HTML output for allocated subnets.

use super::record_rows;
use crate::models::{SubnetRecord, COLUMNS};
use itertools::Itertools;

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; }
        table { border-collapse: collapse; width: 100%; margin: 20px 0; }
        table, th, td { border: 1px solid #ddd; }
        th, td { padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        footer { color: #888; font-size: small; }"#;

fn escape(cell: &str) -> String {
    cell.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render records as a standalone HTML document.
pub fn render_html(records: &[SubnetRecord]) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let header = COLUMNS
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .join("");
    let body = record_rows(records)
        .iter()
        .map(|row| {
            format!(
                "            <tr>{}</tr>",
                row.iter().map(|c| format!("<td>{}</td>", escape(c))).join("")
            )
        })
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>VLSM Table</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <h1>VLSM Calculation Results</h1>
    <table>
        <thead>
            <tr>{header}</tr>
        </thead>
        <tbody>
{body}
        </tbody>
    </table>
    <footer>Generated {generated}</footer>
</body>
</html>
"#
    )
}
