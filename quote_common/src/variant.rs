//! Deployment variants.
//!
//! A deployment serves exactly one quote schema from exactly one upstream. The
//! variant is chosen once (CLI flag or config) and never mixed at runtime.
use clap::ValueEnum;
use strum_macros::{Display, EnumString};

use crate::net::{AUTHOR_ENDPOINT, KURAL_ENDPOINT};

/// Supported upstream/schema pairs.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Display, EnumString, Hash, Eq, PartialEq)]
#[value(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Variant {
    /// Numbered Thirukkural couplets with an English explanation, no key required.
    #[default]
    Kural,
    /// Quote/author pairs from a keyed API.
    Author,
}

impl Variant {
    /// Default upstream URL for this variant.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Variant::Kural => KURAL_ENDPOINT,
            Variant::Author => AUTHOR_ENDPOINT,
        }
    }

    /// Whether the network step must be skipped when no API key is configured.
    pub fn requires_credential(&self) -> bool {
        matches!(self, Variant::Author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("KURAL".parse::<Variant>().unwrap(), Variant::Kural);
        assert_eq!("author".parse::<Variant>().unwrap(), Variant::Author);
        assert!("ninjas".parse::<Variant>().is_err());
    }

    #[test]
    fn only_author_variant_needs_a_key() {
        assert!(!Variant::Kural.requires_credential());
        assert!(Variant::Author.requires_credential());
        assert_eq!(Variant::Author.to_string(), "author");
    }
}
