//! HTML report generator.
//!
//! Produces a self-contained HTML page with all CSS inlined.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use scorecard_core::{PageView, View};

use crate::{format_number, format_percentage, COLUMNS, LOADING_TEXT};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page for a view.
pub fn generate_html(view: &View<'_>, title: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<div class=\"scorecard-container\">\n");
    html.push_str(&format!(
        "<h1 class=\"scorecard-title\">{}</h1>\n",
        html_escape(title)
    ));

    match view {
        View::Loading => html.push_str(&format!("<p>{LOADING_TEXT}</p>\n")),
        View::Failed { message, .. } => {
            html.push_str(&format!("<p>{}</p>\n", html_escape(message)));
        }
        View::Ready(page) => push_page(&mut html, page),
    }

    html.push_str(&format!(
        "<footer>Generated {}</footer>\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn push_page(html: &mut String, page: &PageView<'_>) {
    html.push_str("<table class=\"scorecard-table\">\n<thead><tr>");
    for column in COLUMNS {
        html.push_str(&format!("<th>{column}</th>"));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &page.rows {
        let record = row.record;
        html.push_str(&format!(
            "<tr class=\"table-row\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.number,
            html_escape(record.email.as_deref().unwrap_or_default()),
            html_escape(record.module.as_deref().unwrap_or_default()),
            format_number(record.score),
            format_percentage(record.percentage),
            record.created_at_utc_string(),
        ));
    }
    html.push_str("</tbody>\n</table>\n");

    let disabled = |enabled: bool| if enabled { "" } else { " disabled" };
    html.push_str("<div class=\"pagination-container\">\n");
    html.push_str(&format!(
        "<button class=\"pagination-button\"{}>Prev</button>\n",
        disabled(page.has_prev)
    ));
    html.push_str(&format!(
        "<span class=\"page-info\">{}</span>\n",
        page.label()
    ));
    html.push_str(&format!(
        "<button class=\"pagination-button\"{}>Next</button>\n",
        disabled(page.has_next)
    ));
    html.push_str("</div>\n");
}

/// Write an HTML page for a view to a file.
pub fn write_html_report(view: &View<'_>, title: &str, path: &Path) -> Result<()> {
    let html = generate_html(view, title);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 24px; background: #f7f7f7; color: #222; }
.scorecard-container { max-width: 1100px; margin: 0 auto; }
.scorecard-title { text-align: center; }
.scorecard-table { width: 100%; border-collapse: collapse; background: #fff; }
.scorecard-table th, .scorecard-table td { padding: 8px 12px; border-bottom: 1px solid #e0e0e0; text-align: left; }
.scorecard-table th { background: #c8102e; color: #fff; }
.pagination-container { display: flex; justify-content: center; align-items: center; gap: 16px; margin-top: 16px; }
.pagination-button[disabled] { opacity: 0.4; }
footer { margin-top: 24px; font-size: 12px; color: #888; text-align: center; }
"#;
