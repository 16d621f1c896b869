//! Cron entry point parsing published dumps into snapshot data files.
//!
//! # Usage
//!
//! ```bash
//! # Extract any dumps without a snapshot yet
//! cargo run --bin extract_data
//!
//! # Re-extract everything (e.g. after a parser fix)
//! cargo run --bin extract_data -- --force
//! ```
//!
//! Intended to run daily from cron on Toolforge, shortly after the dump is
//! published. Runs are idempotent: dumps that already have a snapshot file
//! are skipped.

use anyhow::Result;
use clap::Parser;
use colored::*;
use shortstats::ingest::Extractor;
use tracing_subscriber::EnvFilter;

/// Parse short-link dumps into snapshot data files.
#[derive(Parser)]
#[command(name = "extract_data")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory the dumps are published in
    #[arg(long, default_value = "/public/dumps/public/other/shorturls")]
    dumps_dir: String,

    /// Directory to write snapshot data files into
    #[arg(long, default_value = "./data")]
    data_dir: String,

    /// Re-extract dumps whose snapshot file already exists
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let extractor = Extractor::new(&cli.dumps_dir, &cli.data_dir);
    let report = extractor.run(cli.force)?;

    println!(
        "{} {} snapshot(s) written, {} up to date",
        "Done:".green().bold(),
        report.written,
        report.skipped
    );

    Ok(())
}
