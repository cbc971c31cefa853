//! Quote Client — prints random quotes from the configured upstream, falling back
//! to the embedded tables when the upstream is unreachable.
//!
//! Usage example (CLI):
//! ```bash
//! QUOTES_API_KEY=... quote_client --variant author --count 3
//! quote_client --variant kural --interval-secs 30
//! ```
//!
//! Configuration is read from the environment (and a `.env` file if present),
//! then overridden by CLI flags. See `quote_provider::config` for the variables.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{info, warn};
use quote_common::{AuthorQuote, KuralQuote, QuoteError, QuoteSchema, Result, Variant};
use quote_provider::{ProviderConfig, QuoteProvider};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

/// Granularity of the shutdown check while waiting between rounds.
const SHUTDOWN_POLL_MS: u64 = 200;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    if let Err(e) = dotenv::dotenv() {
        log::debug!("No .env file loaded: {}", e);
    }
    let args = Args::parse();

    let config = build_config(&args)?;
    info!(
        "Using {} upstream {} (timeout {:?})",
        args.variant, config.endpoint, config.timeout
    );
    if args.variant.requires_credential() && config.api_key.is_none() {
        warn!(
            "{} is not set; quotes will come from the fallback table",
            quote_provider::config::API_KEY_ENV
        );
    }

    match args.variant {
        Variant::Kural => run::<KuralQuote>(config, &args).await,
        Variant::Author => run::<AuthorQuote>(config, &args).await,
    }
}

fn build_config(args: &Args) -> Result<ProviderConfig> {
    let mut config = ProviderConfig::from_env(args.variant)?;
    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint.trim());
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config = config.with_timeout(Duration::from_millis(timeout_ms));
    }
    Ok(config)
}

async fn run<Q: QuoteSchema>(config: ProviderConfig, args: &Args) -> Result<()> {
    let provider = QuoteProvider::<Q>::new(config)?;

    let Some(interval_secs) = args.interval_secs else {
        print_round(&provider, args.count).await;
        return Ok(());
    };

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| QuoteError::Signal(e.to_string()))?;
    }

    info!("Printing quotes every {}s. Press Ctrl+C to exit.", interval_secs);
    while !shutdown.load(Ordering::Relaxed) {
        print_round(&provider, args.count).await;
        wait_or_shutdown(Duration::from_secs(interval_secs), &shutdown).await;
    }
    info!("Client stopped");
    Ok(())
}

async fn print_round<Q: QuoteSchema>(provider: &QuoteProvider<Q>, count: u32) {
    for _ in 0..count {
        let quote = provider.get_random_quote().await;
        println!("{}\n", quote);
    }
}

async fn wait_or_shutdown(interval: Duration, shutdown: &AtomicBool) {
    let poll = Duration::from_millis(SHUTDOWN_POLL_MS);
    let deadline = tokio::time::Instant::now() + interval;
    while !shutdown.load(Ordering::Relaxed) && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(poll).await;
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
