//! Terminal rendering.

use comfy_table::{Cell, Table};

use scorecard_core::{PageView, View};

use crate::{format_number, format_percentage, COLUMNS, LOADING_TEXT};

/// Build the score table for one page.
pub fn render_table(page: &PageView<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(COLUMNS.to_vec());

    for row in &page.rows {
        let record = row.record;
        table.add_row(vec![
            Cell::new(row.number),
            Cell::new(record.email.as_deref().unwrap_or_default()),
            Cell::new(record.module.as_deref().unwrap_or_default()),
            Cell::new(format_number(record.score)),
            Cell::new(format_percentage(record.percentage)),
            Cell::new(record.created_at_utc_string()),
        ]);
    }

    table
}

/// The pagination line: `(Prev)  Page 1 of 3  [Next]`.
///
/// Enabled buttons are bracketed, disabled ones parenthesized.
pub fn render_controls(page: &PageView<'_>) -> String {
    let button = |label: &str, enabled: bool| {
        if enabled {
            format!("[{label}]")
        } else {
            format!("({label})")
        }
    };
    format!(
        "{}  {}  {}",
        button("Prev", page.has_prev),
        page.label(),
        button("Next", page.has_next)
    )
}

/// Render a whole view as terminal text.
pub fn render_text(view: &View<'_>) -> String {
    match view {
        View::Loading => LOADING_TEXT.to_string(),
        View::Failed { message, .. } => message.to_string(),
        View::Ready(page) => format!("{}\n{}", render_table(page), render_controls(page)),
    }
}
