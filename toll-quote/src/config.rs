//! Application configuration from the environment.

use tracing::warn;

use crate::here::HereConfig;
use crate::pipeline::QuoteConfig;
use crate::tollguru::TollGuruConfig;

/// Everything needed to build the clients and run quotes.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub here: HereConfig,
    pub tollguru: TollGuruConfig,
    pub quote: QuoteConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// `HERE_API_KEY` and `TOLLGURU_API_KEY` are expected; a missing key is
    /// logged and replaced with an empty string, so requests fail at the
    /// provider. `HERE_BASE_URL`, `HERE_GEOCODE_URL` and
    /// `TOLLGURU_BASE_URL` override the endpoints.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let required = |name: &str| {
            lookup(name).filter(|v| !v.is_empty()).unwrap_or_else(|| {
                warn!(variable = name, "not set, API calls will fail");
                String::new()
            })
        };

        let mut here = HereConfig::new(required("HERE_API_KEY"));
        if let Some(url) = lookup("HERE_BASE_URL") {
            here = here.with_routing_url(url);
        }
        if let Some(url) = lookup("HERE_GEOCODE_URL") {
            here = here.with_geocode_url(url);
        }

        let mut tollguru = TollGuruConfig::new(required("TOLLGURU_API_KEY"));
        if let Some(url) = lookup("TOLLGURU_BASE_URL") {
            tollguru = tollguru.with_base_url(url);
        }

        Self {
            here,
            tollguru,
            quote: QuoteConfig::default(),
        }
    }
}
