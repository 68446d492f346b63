//! JSON rendering of a view.

use anyhow::{Context, Result};
use serde::Serialize;

use scorecard_core::{PageView, View};

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonView<'a> {
    Loading,
    Failed {
        error: &'static str,
        kind: &'static str,
        detail: String,
    },
    Ready {
        #[serde(flatten)]
        page: &'a PageView<'a>,
    },
}

/// Render a view as pretty-printed JSON.
///
/// A ready view serializes its rows (with row numbers) and pagination state;
/// the other phases serialize a `status` marker only.
pub fn render_json(view: &View<'_>) -> Result<String> {
    let json_view = match view {
        View::Loading => JsonView::Loading,
        View::Failed { message, error } => JsonView::Failed {
            error: *message,
            kind: error.kind(),
            detail: error.to_string(),
        },
        View::Ready(page) => JsonView::Ready { page },
    };
    serde_json::to_string_pretty(&json_view).context("failed to serialize view")
}
