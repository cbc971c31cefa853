//! Live quote fetching with embedded fallback.
//!
//! `QuoteProvider::get_random_quote` never fails. It makes at most one upstream
//! request, bounded by the configured timeout, and on any failure returns a
//! randomly chosen entry from the schema's fallback table.
//!
//! The two halves are also exposed separately: `fetch` yields the tagged outcome
//! of the live attempt, and `recover` turns any failure into a fallback quote
//! without looking at the reason.
use std::marker::PhantomData;

use log::{debug, warn};
use quote_common::fallback::{RandomSource, ThreadRandom};
use quote_common::net::{ACCEPT_JSON, API_KEY_HEADER};
use quote_common::{QuoteError, QuoteSchema, Result};

use crate::config::ProviderConfig;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

/// Produces quotes of schema `Q`.
pub struct QuoteProvider<Q, T = ReqwestTransport, R = ThreadRandom> {
    config: ProviderConfig,
    transport: T,
    random: R,
    schema: PhantomData<fn() -> Q>,
}

impl<Q: QuoteSchema> QuoteProvider<Q> {
    /// Provider using `reqwest` and the thread RNG.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        Ok(Self::with_parts(config, ReqwestTransport::new()?, ThreadRandom))
    }
}

impl<Q, T, R> QuoteProvider<Q, T, R>
where
    Q: QuoteSchema,
    T: Transport,
    R: RandomSource,
{
    /// Provider with explicit transport and random source.
    pub fn with_parts(config: ProviderConfig, transport: T, random: R) -> Self {
        Self {
            config,
            transport,
            random,
            schema: PhantomData,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Return a live quote, or a fallback quote if the live one is unavailable.
    pub async fn get_random_quote(&self) -> Q {
        match self.fetch().await {
            Ok(quote) => quote,
            Err(failure) => self.recover(&failure),
        }
    }

    /// Attempt one upstream request and validate the result.
    ///
    /// Returns `MissingCredential` without touching the network when the
    /// schema's variant needs a key and none is configured.
    pub async fn fetch(&self) -> Result<Q> {
        let request = self.build_request()?;
        let timeout = self.config.timeout;

        let response = tokio::time::timeout(timeout, self.transport.get(&request))
            .await
            .map_err(|_| QuoteError::Timeout(timeout))??;

        if !response.is_success() {
            return Err(QuoteError::HttpStatus(response.status));
        }

        let quote = Q::from_body(&response.body)?;
        debug!("Fetched {} quote from {}", Q::VARIANT, self.config.endpoint);
        Ok(quote)
    }

    /// Pick a fallback quote. The outcome does not depend on `failure`.
    pub fn recover(&self, failure: &QuoteError) -> Q {
        warn!(
            "Failed to fetch {} quote from {}, using fallback: {}",
            Q::VARIANT,
            self.config.endpoint,
            failure
        );
        Q::fallback_table().pick(&self.random).clone()
    }

    fn build_request(&self) -> Result<HttpRequest> {
        let request = HttpRequest::get(&self.config.endpoint)
            .with_header("Accept", ACCEPT_JSON)
            .with_timeout(self.config.timeout);

        if !Q::VARIANT.requires_credential() {
            return Ok(request);
        }
        match self.config.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => Ok(request.with_header(API_KEY_HEADER, key)),
            None => Err(QuoteError::MissingCredential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use quote_common::fallback::SequenceRandom;
    use quote_common::{AuthorQuote, KuralQuote, Variant};

    struct Unreachable;

    #[async_trait::async_trait]
    impl Transport for Unreachable {
        async fn get(&self, _request: &HttpRequest) -> Result<HttpResponse> {
            Err(QuoteError::Transport(String::from("unreachable")))
        }
    }

    #[test]
    fn keyed_request_carries_api_key_and_accept() {
        let config = ProviderConfig::for_variant(Variant::Author).with_api_key("k-1");
        let provider: QuoteProvider<AuthorQuote, _, _> =
            QuoteProvider::with_parts(config, Unreachable, ThreadRandom);

        let request = provider.build_request().unwrap();
        assert_eq!(request.header("x-api-key"), Some("k-1"));
        assert_eq!(request.header("accept"), Some("application/json"));
    }

    #[test]
    fn unkeyed_variant_never_sends_a_key() {
        let config = ProviderConfig::for_variant(Variant::Kural).with_api_key("ignored");
        let provider: QuoteProvider<KuralQuote, _, _> =
            QuoteProvider::with_parts(config, Unreachable, ThreadRandom);

        let request = provider.build_request().unwrap();
        assert_eq!(request.header(API_KEY_HEADER), None);
    }

    #[test]
    fn recover_ignores_failure_reason() {
        let provider: QuoteProvider<KuralQuote, _, _> = QuoteProvider::with_parts(
            ProviderConfig::for_variant(Variant::Kural),
            Unreachable,
            SequenceRandom::new(vec![2, 2]),
        );

        let a = provider.recover(&QuoteError::HttpStatus(503));
        let b = provider.recover(&QuoteError::InvalidPayload(String::from("x")));
        assert_eq!(a, b);
        assert_eq!(a.number(), 3);
    }
}
