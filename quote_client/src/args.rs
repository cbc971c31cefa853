//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use quote_common::Variant;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Which upstream and quote schema to use.
    #[arg(long, value_enum, default_value_t = Variant::Kural)]
    pub variant: Variant,

    /// Number of quotes to print per round.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Repeat every N seconds until Ctrl+C. Runs a single round when omitted.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: Option<u64>,

    /// Override the upstream URL (takes precedence over `QUOTES_ENDPOINT`).
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the request timeout in milliseconds (takes precedence over `QUOTES_TIMEOUT_MS`).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,
}
