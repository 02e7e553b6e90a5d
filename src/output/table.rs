//! Table rendering shared by the console and the text export.

use colored::Colorize;
use itertools::Itertools;

/// Border style of a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Columns separated by two spaces, no borders.
    Plain,
    /// Box-drawing borders around every cell.
    Grid,
}

/// Pad `value` to `width`, right aligned when `numeric`.
pub fn format_field<T: ToString>(value: T, width: usize, numeric: bool) -> String {
    let value_str = value.to_string();
    if numeric {
        format!("{value_str:>width$}")
    } else {
        format!("{value_str:<width$}")
    }
}

fn is_numeric(column: usize, rows: &[Vec<String>]) -> bool {
    !rows.is_empty()
        && rows
            .iter()
            .all(|row| row.get(column).is_some_and(|c| c.parse::<u64>().is_ok()))
}

/// Render `headers` and `rows` as a table.
///
/// With `colorize`, headers are green and rows alternate white and blue.
/// Widths are computed on the plain text so color codes do not skew them.
pub fn render_table(
    headers: &[&str],
    rows: &[Vec<String>],
    style: TableStyle,
    colorize: bool,
) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let numeric: Vec<bool> = (0..headers.len()).map(|i| is_numeric(i, rows)).collect();

    let header_cells = headers.iter().enumerate().map(|(i, h)| {
        let cell = format_field(h, widths[i], numeric[i]);
        if colorize {
            cell.green().to_string()
        } else {
            cell
        }
    });
    let header_line = join_cells(header_cells, style);

    let body: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let cells = (0..headers.len()).map(|i| {
                let cell = format_field(row.get(i).map_or("", |c| c.as_str()), widths[i], numeric[i]);
                match (colorize, r % 2) {
                    (false, _) => cell,
                    (true, 0) => cell.white().to_string(),
                    (true, _) => cell.blue().to_string(),
                }
            });
            join_cells(cells, style)
        })
        .collect();

    match style {
        TableStyle::Plain => std::iter::once(header_line).chain(body).join("\n"),
        TableStyle::Grid => {
            let mut lines = vec![border(&widths, '╒', '═', '╤', '╕'), header_line];
            lines.push(border(&widths, '╞', '═', '╪', '╡'));
            let separator = border(&widths, '├', '─', '┼', '┤');
            lines.extend(Itertools::intersperse(body.into_iter(), separator));
            lines.push(border(&widths, '╘', '═', '╧', '╛'));
            lines.join("\n")
        }
    }
}

fn join_cells(mut cells: impl Iterator<Item = String>, style: TableStyle) -> String {
    match style {
        TableStyle::Plain => cells.join("  "),
        TableStyle::Grid => format!("│ {} │", cells.join(" │ ")),
    }
}

fn border(widths: &[usize], left: char, fill: char, cross: char, right: char) -> String {
    let segments = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .join(&cross.to_string());
    format!("{left}{segments}{right}")
}
