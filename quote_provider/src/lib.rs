//! Random quote provider.
//!
//! Wires the shared quote schemas from `quote_common` to an HTTP upstream:
//! - `transport` — the `Transport` seam and its `reqwest` implementation.
//! - `config` — endpoint, credential and timeout, with environment overrides.
//! - `provider` — `QuoteProvider`, the fetch-with-timeout-and-fallback operation.
#![warn(missing_docs)]
pub mod config;
pub mod provider;
pub mod transport;

pub use config::ProviderConfig;
pub use provider::QuoteProvider;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
