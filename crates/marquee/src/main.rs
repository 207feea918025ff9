//! Marquee CLI binary.
//!
//! Resolves the title given on the command line (or the configured default),
//! runs it through the pipeline, and prints a single status line.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, run_title};
    use marquee::{Credentials, MarqueeConfig, build_executor};

    // Load .env before any configuration or credential lookup
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = MarqueeConfig::load()?;
    let credentials = Credentials::from_env(*config.metadata_source())?;
    let executor = build_executor(&config, &credentials)?;

    let title = cli.title().unwrap_or_else(|| config.default_title().clone());
    let outcome = run_title(&executor, &title).await;

    println!("{}", outcome.status_line());
    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
