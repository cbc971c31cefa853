//! Upstream endpoints and HTTP constants used by the provider.
use std::time::Duration;

/// Random Thirukkural couplet endpoint (Kural variant).
pub const KURAL_ENDPOINT: &str = "https://kural-api.fly.dev/random-quote";
/// Random author quote endpoint (Author variant).
pub const AUTHOR_ENDPOINT: &str = "https://api.api-ninjas.com/v1/quotes";

/// Header carrying the API key for the Author variant.
pub const API_KEY_HEADER: &str = "X-Api-Key";
/// Media type sent in the `Accept` header.
pub const ACCEPT_JSON: &str = "application/json";

/// Hard limit on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
