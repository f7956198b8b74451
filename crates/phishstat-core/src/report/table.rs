//! GitHub pipe tables.

use std::fmt::Display;

/// Renders a two-column table: left-aligned label, right-aligned count.
pub fn markdown_table<L: Display>(label_header: &str, rows: &[(L, usize)]) -> String {
    let mut out = format!("| {label_header} | count |\n|:---|---:|\n");
    for (label, count) in rows {
        out.push_str(&format!("| {} | {} |\n", escape_cell(&label.to_string()), count));
    }
    out
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
