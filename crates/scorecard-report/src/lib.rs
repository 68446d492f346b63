//! scorecard-report — Rendering of score views.
//!
//! Turns a `View` from `scorecard-core` into a terminal table, a
//! self-contained HTML page, or JSON.

pub mod html;
pub mod json;
pub mod table;

pub use html::{generate_html, write_html_report};
pub use json::render_json;
pub use table::{render_controls, render_table, render_text};

/// Column headers, in display order.
pub const COLUMNS: [&str; 6] = ["Sr No.", "Email", "Module", "Score", "Percentage", "Date"];

/// Placeholder shown while the initial load is pending.
pub const LOADING_TEXT: &str = "Loading...";

/// Display form of a score or percentage: `8`, `7.5`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Display form of a percentage: `80%`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_number(value))
}
