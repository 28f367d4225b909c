use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prepdeck_client::app::{self, Options};

/// Interview prep flashcards in the terminal.
#[derive(Debug, Parser)]
#[command(name = "prepdeck", version)]
struct Cli {
    /// Backend base URL serving data.json and the grading API.
    #[arg(long, default_value = "http://localhost:3000")]
    backend_url: String,

    /// Read the dataset from a local file instead of the backend.
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they do not interleave with the study interface.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    app::run(Options {
        backend_url: cli.backend_url,
        data_file: cli.data_file,
    })
    .await
}
