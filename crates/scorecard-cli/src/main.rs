//! scorecard CLI — fetch, search and page through user assessment scores.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "scorecard", version, about = "Search and page through user scores")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where records come from; each flag overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Scoring service endpoint (POST)
    #[arg(long)]
    endpoint: Option<String>,

    /// Read records from a local JSON snapshot instead of the endpoint
    #[arg(long, conflicts_with = "endpoint")]
    input: Option<PathBuf>,

    /// Response field holding the record array
    #[arg(long)]
    field: Option<String>,

    /// Records per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load scores and print one page
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Email search (case-insensitive substring)
        #[arg(long)]
        email: Option<String>,

        /// Module search (case-insensitive substring)
        #[arg(long)]
        module: Option<String>,

        /// Page to show; out-of-range pages are ignored
        #[arg(long)]
        page: Option<usize>,

        /// Output format: table, json, html
        #[arg(long, default_value = "table")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Load scores and search/page interactively via line commands on stdin
    Browse {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scorecard=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show {
            source,
            email,
            module,
            page,
            format,
            output,
        } => commands::show::execute(source, email, module, page, format, output).await,
        Commands::Browse { source } => commands::browse::execute(source).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
