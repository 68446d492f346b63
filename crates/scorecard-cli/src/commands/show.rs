//! The `scorecard show` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use scorecard_report::{generate_html, render_json, render_text, write_html_report};

use crate::SourceArgs;

const TITLE: &str = "Scorecard";

pub async fn execute(
    source: SourceArgs,
    email: Option<String>,
    module: Option<String>,
    page: Option<usize>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut card = super::mount(&source).await?;

    if email.is_some() || module.is_some() {
        card.set_email_query(email.unwrap_or_default());
        card.set_module_query(module.unwrap_or_default());
        card.search();
    }
    if let Some(page) = page {
        if !card.go_to_page(page) {
            tracing::debug!(page, "requested page does not exist, staying on page 1");
        }
    }

    let view = card.view();
    match format.as_str() {
        "html" => match &output {
            Some(path) => {
                write_html_report(&view, TITLE, path)?;
                eprintln!("HTML report: {}", path.display());
            }
            None => print!("{}", generate_html(&view, TITLE)),
        },
        "json" | "table" => {
            let rendered = if format == "json" {
                render_json(&view)?
            } else {
                render_text(&view)
            };
            match &output {
                Some(path) => {
                    std::fs::write(path, format!("{rendered}\n"))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Results saved to: {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected table, json or html)"),
    }

    super::ensure_loaded(&card)
}
