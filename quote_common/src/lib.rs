//!
//! Common types and utilities shared by the quote provider and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the two quote schemas and their payload validation.
//! - `fallback` — embedded fallback tables and the random source used to pick from them.
//! - `variant` — deployment variants selectable from the CLI.
//! - `net` — endpoints, header names and the default timeout.
#![warn(missing_docs)]
pub mod error;
pub mod fallback;
pub mod net;
pub mod quote;
pub mod result;
pub mod variant;

pub use error::QuoteError;
pub use quote::{AuthorQuote, KuralQuote, QuoteSchema};
pub use result::Result;
pub use variant::Variant;
