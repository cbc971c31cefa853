//! Provider configuration.
//!
//! Defaults come from the chosen `Variant`. `from_env` layers three optional
//! environment values on top:
//!
//! - `QUOTES_API_KEY` — credential for keyed variants; empty counts as unset.
//! - `QUOTES_ENDPOINT` — replaces the variant's default URL.
//! - `QUOTES_TIMEOUT_MS` — replaces the 5 second timeout; must be a positive integer.
use std::time::Duration;

use quote_common::net::DEFAULT_TIMEOUT;
use quote_common::{QuoteError, Result, Variant};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "QUOTES_API_KEY";
/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "QUOTES_ENDPOINT";
/// Environment variable overriding the timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "QUOTES_TIMEOUT_MS";

/// Settings for one `QuoteProvider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Upstream URL.
    pub endpoint: String,
    /// Credential sent to keyed variants.
    pub api_key: Option<String>,
    /// Hard limit on the upstream call.
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Defaults for `variant`: its endpoint, no key, 5 second timeout.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            endpoint: variant.endpoint().to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Defaults for `variant` overridden by the process environment.
    pub fn from_env(variant: Variant) -> Result<Self> {
        Self::from_lookup(variant, |name: &str| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(variant: Variant, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::for_variant(variant);

        if let Some(key) = lookup(API_KEY_ENV) {
            config = config.with_api_key(key);
        }
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|e| !e.trim().is_empty()) {
            config = config.with_endpoint(endpoint.trim());
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|e| QuoteError::Config(format!("{TIMEOUT_ENV}={raw:?}: {e}")))?;
            if millis == 0 {
                return Err(QuoteError::Config(format!("{TIMEOUT_ENV} must be positive")));
            }
            config = config.with_timeout(Duration::from_millis(millis));
        }

        Ok(config)
    }

    /// Replace the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the credential. An empty key clears it.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = if api_key.trim().is_empty() {
            None
        } else {
            Some(api_key)
        };
        self
    }

    /// Replace the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
