//! Table component renderer.
//!
//! This module renders a sortable table: a bold header row with a direction
//! indicator on the sorted column, then one line per row with search matches
//! highlighted.

use crate::ui::helpers::{self, fit, pad, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Cell, ColumnHeader, TableView};

/// Indicator drawn after the label of the sorted column.
fn sort_indicator(class_token: &str) -> &'static str {
    match class_token {
        "sorted-asc" => " ▲",
        "sorted-desc" => " ▼",
        _ => "",
    }
}

/// Renders the column headers.
///
/// Each label is followed by its sort key in brackets so the user knows what
/// to pass to `sort`, and by `▲`/`▼` when the column is the active sort.
pub fn render_table_headers(out: &mut String, columns: &[ColumnHeader], theme: &Theme) {
    for column in columns {
        let indicator = sort_indicator(column.class_token);
        let label = fit(column.label, column.width.saturating_sub(1 + width(indicator)));

        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.header_fg));
        out.push_str(&label);
        out.push_str(Theme::reset());
        if !indicator.is_empty() {
            out.push_str(&Theme::fg(&theme.colors.sort_indicator_fg));
            out.push_str(indicator);
            out.push_str(Theme::reset());
        }
        pad(out, column.width.saturating_sub(width(&label) + width(indicator)));
    }
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    for column in columns {
        let key = fit(&format!("[{}]", column.key), column.width.saturating_sub(1));
        out.push_str(&key);
        pad(out, column.width.saturating_sub(width(&key)));
    }
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders all table rows.
///
/// # Layout
///
/// ```text
/// Spring Open    2024-05-01   Ann Holm   100m   TIME   11.92
/// ```
///
/// Cells wider than their column are truncated with `...`; a truncated cell
/// loses its highlight when the match falls in the cut-off part.
pub fn render_table(out: &mut String, table: &TableView, theme: &Theme) {
    render_table_headers(out, &table.columns, theme);

    for row in &table.rows {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        for (cell, column) in row.cells.iter().zip(&table.columns) {
            render_cell(out, cell, column.width, theme);
        }
        out.push_str(Theme::reset());
        out.push('\n');
    }
}

fn render_cell(out: &mut String, cell: &Cell, column_width: usize, theme: &Theme) {
    let max = column_width.saturating_sub(1);
    let text = fit(&cell.text, max);
    let highlight = cell.highlight.filter(|&(_, end)| text == cell.text || end <= text.len().saturating_sub(3));

    helpers::push_highlighted(out, &text, highlight, theme);
    pad(out, column_width.saturating_sub(width(&text)));
}
