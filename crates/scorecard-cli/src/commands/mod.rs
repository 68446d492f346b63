pub mod browse;
pub mod init;
pub mod show;

use anyhow::Result;

use scorecard_client::config::load_config_from;
use scorecard_client::create_source;
use scorecard_core::{Loader, Scorecard};
use scorecard_report::render_text;

use crate::SourceArgs;

/// Mount a score view: resolve the source, show the loading state, and run
/// the one initial fetch.
///
/// A failed fetch is not an error here; the returned view is in the failed
/// phase and callers render it.
pub async fn mount(args: &SourceArgs) -> Result<Scorecard> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(endpoint) = &args.endpoint {
        config.set_endpoint(endpoint.clone());
    }
    if let Some(input) = &args.input {
        config.set_input(input.clone());
    }
    if let Some(field) = &args.field {
        config.set_field(field.clone());
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    let mut card = Scorecard::with_page_size(config.page_size()?);
    let source = create_source(&config.source)?;
    tracing::debug!(source = source.name(), "mounting score view");

    eprintln!("{}", render_text(&card.view()));
    card.finish_load(Loader::spawn(source).wait().await);
    Ok(card)
}

/// Turn a failed load into the command's error, after it has been rendered.
pub fn ensure_loaded(card: &Scorecard) -> Result<()> {
    match card.error() {
        Some(e) => Err(anyhow::anyhow!("{e}")),
        None => Ok(()),
    }
}
