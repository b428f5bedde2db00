//! Binary crate for the `weathercast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and the interactive city prompt
//! - Human-friendly rendering of the forecast card

use clap::Parser;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
