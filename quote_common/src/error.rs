//! Error types shared between the provider and the client.
//!
//! Every way a live quote fetch can fail maps onto one `QuoteError` variant.
//! None of them reach callers of `get_random_quote`; they only drive the
//! fallback path and its diagnostic.
use std::time::Duration;

use thiserror::Error;

/// Unified error type for quote fetching.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The deployment requires an API key and none is configured.
    #[error("API key is not configured")]
    MissingCredential,

    /// DNS, connect or read failure reported by the HTTP client.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The upstream answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The body was not valid JSON or had the wrong types.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed but required fields were missing or empty.
    #[error("Invalid response format: {0}")]
    InvalidPayload(String),

    /// A configuration value could not be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Ctrl+C handler could not be installed.
    #[error("Signal handler error: {0}")]
    Signal(String),
}
