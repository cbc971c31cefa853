//! Quote schemas and upstream payload validation.
//!
//! Each deployment variant has its own quote type. They share the `QuoteSchema`
//! trait so the provider can be generic over them, but the two shapes are never
//! merged into one struct.
//!
//! A quote is built in one step, either from a validated upstream body or from an
//! entry of the embedded fallback table. Fields are private, so a value with an
//! empty field (or a zero Kural number) cannot be observed outside this crate.
use std::fmt;

use serde::Deserialize;

use crate::error::QuoteError;
use crate::fallback::{AUTHOR_FALLBACK, FallbackTable, KURAL_FALLBACK};
use crate::result::Result;
use crate::variant::Variant;

/// Behavior shared by both quote shapes.
pub trait QuoteSchema: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Variant this schema belongs to.
    const VARIANT: Variant;

    /// Validate a raw response body and build a quote from the required fields.
    ///
    /// Unknown fields are ignored. Missing, empty or zero required fields are an
    /// `InvalidPayload` error; a body that is not JSON of the right types is a
    /// `Json` error.
    fn from_body(body: &[u8]) -> Result<Self>;

    /// Embedded quotes used when the upstream cannot be reached.
    fn fallback_table() -> &'static FallbackTable<Self>;
}

/// A numbered Thirukkural couplet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KuralQuote {
    pub(crate) number: u32,
    pub(crate) tamil: String,
    pub(crate) explanation: String,
}

impl KuralQuote {
    /// Build a quote, rejecting a zero number or empty text.
    pub fn new(number: u32, tamil: impl Into<String>, explanation: impl Into<String>) -> Result<Self> {
        if number == 0 {
            return Err(QuoteError::InvalidPayload(String::from("`number` must be positive")));
        }
        Ok(Self {
            number,
            tamil: required(Some(tamil.into()), "tamil")?,
            explanation: required(Some(explanation.into()), "explanation")?,
        })
    }

    /// Couplet number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Tamil couplet text.
    pub fn tamil(&self) -> &str {
        &self.tamil
    }

    /// English explanation.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[derive(Debug, Deserialize)]
struct KuralPayload {
    number: Option<u32>,
    tamil: Option<String>,
    explanation: Option<String>,
}

impl QuoteSchema for KuralQuote {
    const VARIANT: Variant = Variant::Kural;

    fn from_body(body: &[u8]) -> Result<Self> {
        let payload: KuralPayload = serde_json::from_slice(body)?;
        let number = payload
            .number
            .filter(|n| *n > 0)
            .ok_or_else(|| QuoteError::InvalidPayload(String::from("missing or zero `number`")))?;
        Ok(Self {
            number,
            tamil: required(payload.tamil, "tamil")?,
            explanation: required(payload.explanation, "explanation")?,
        })
    }

    fn fallback_table() -> &'static FallbackTable<Self> {
        &KURAL_FALLBACK
    }
}

impl fmt::Display for KuralQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kural {}\n{}\n\n{}", self.number, self.tamil, self.explanation)
    }
}

/// A quotation attributed to an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorQuote {
    pub(crate) quote: String,
    pub(crate) author: String,
}

impl AuthorQuote {
    /// Build a quote, rejecting empty text or author.
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Result<Self> {
        Ok(Self {
            quote: required(Some(quote.into()), "quote")?,
            author: required(Some(author.into()), "author")?,
        })
    }

    /// Quotation text.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Attributed author.
    pub fn author(&self) -> &str {
        &self.author
    }
}

#[derive(Debug, Deserialize)]
struct AuthorPayload {
    quote: Option<String>,
    author: Option<String>,
}

impl QuoteSchema for AuthorQuote {
    const VARIANT: Variant = Variant::Author;

    fn from_body(body: &[u8]) -> Result<Self> {
        // Only the first element is consumed, so the rest are not type-checked.
        let items: Vec<serde_json::Value> = serde_json::from_slice(body)?;
        let first = items
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::InvalidPayload(String::from("empty quote array")))?;
        let payload: AuthorPayload = serde_json::from_value(first)?;
        Ok(Self {
            quote: required(payload.quote, "quote")?,
            author: required(payload.author, "author")?,
        })
    }

    fn fallback_table() -> &'static FallbackTable<Self> {
        &AUTHOR_FALLBACK
    }
}

impl fmt::Display for AuthorQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"\n  - {}", self.quote, self.author)
    }
}

fn required(field: Option<String>, name: &str) -> Result<String> {
    field
        .filter(|value| !value.is_empty())
        .ok_or_else(|| QuoteError::InvalidPayload(format!("missing or empty `{name}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kural_body_copies_exact_fields_and_ignores_extras() {
        let body = br#"{"number": 42, "tamil": "line one\nline two", "explanation": "meaning", "chapter": "Virtue"}"#;
        let quote = KuralQuote::from_body(body).unwrap();
        assert_eq!(quote.number(), 42);
        assert_eq!(quote.tamil(), "line one\nline two");
        assert_eq!(quote.explanation(), "meaning");
    }

    #[test]
    fn kural_body_rejects_missing_empty_and_zero() {
        assert!(matches!(KuralQuote::from_body(b"{}"), Err(QuoteError::InvalidPayload(_))));
        assert!(matches!(
            KuralQuote::from_body(br#"{"number": 0, "tamil": "t", "explanation": "e"}"#),
            Err(QuoteError::InvalidPayload(_))
        ));
        assert!(matches!(
            KuralQuote::from_body(br#"{"number": 3, "tamil": "", "explanation": "e"}"#),
            Err(QuoteError::InvalidPayload(_))
        ));
    }

    #[test]
    fn kural_body_rejects_wrong_types() {
        assert!(matches!(KuralQuote::from_body(b"not json"), Err(QuoteError::Json(_))));
        assert!(matches!(
            KuralQuote::from_body(br#"{"number": -1, "tamil": "t", "explanation": "e"}"#),
            Err(QuoteError::Json(_))
        ));
        assert!(matches!(KuralQuote::from_body(b"[]"), Err(QuoteError::Json(_))));
    }

    #[test]
    fn author_body_uses_first_element_only() {
        let body = br#"[{"quote": "first", "author": "A", "category": "life"}, {"unexpected": true}]"#;
        let quote = AuthorQuote::from_body(body).unwrap();
        assert_eq!(quote.quote(), "first");
        assert_eq!(quote.author(), "A");
    }

    #[test]
    fn author_body_rejects_empty_array_and_blank_author() {
        assert!(matches!(AuthorQuote::from_body(b"[]"), Err(QuoteError::InvalidPayload(_))));
        assert!(matches!(
            AuthorQuote::from_body(br#"[{"quote": "q", "author": ""}]"#),
            Err(QuoteError::InvalidPayload(_))
        ));
        assert!(matches!(AuthorQuote::from_body(b"{}"), Err(QuoteError::Json(_))));
    }

    #[test]
    fn constructors_enforce_non_empty_fields() {
        assert!(KuralQuote::new(0, "t", "e").is_err());
        assert!(KuralQuote::new(1, "t", "").is_err());
        assert!(AuthorQuote::new("", "someone").is_err());
        assert_eq!(AuthorQuote::new("q", "a").unwrap().to_string(), "\"q\"\n  - a");
    }
}
