//! # Chroma - command-line entry point
//!
//! 1. Parse arguments
//! 2. Resolve settings (`--config`, then `./chroma.toml`, then defaults)
//! 3. Initialize tracing on stderr
//! 4. Run the command and print its output on stdout

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chroma::chroma_core::ResultExt;
use chroma::cli::Cli;
use chroma::commands::execute_command;
use chroma::config::{OutputFormat, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to resolve the working directory")?;
    let mut settings = Settings::discover(cli.config.as_deref(), &cwd)
        .context("Failed to load settings")?;
    if cli.json {
        settings.output = OutputFormat::Json;
    }

    init_tracing(&settings.log_filter);
    debug!(per_page = settings.per_page, output = ?settings.output, "settings resolved");

    let output = execute_command(&cli.command, &settings).log_failure("command failed")?;
    println!("{output}");

    info!("done");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter; an unparsable filter falls back to `info`.
fn init_tracing(configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
