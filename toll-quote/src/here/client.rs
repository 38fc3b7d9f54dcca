//! Geocoding and routing HTTP client.
//!
//! Each call is a single request with no retry. The API key travels as the
//! `apiKey` query parameter.

use tracing::debug;

use crate::domain::{Coordinate, TransportCategory};
use crate::excerpt::excerpt;
use crate::pipeline::{Geocoder, RouteProvider};

use super::convert::{RouteData, error_summary, parse_geocode_response, parse_route_response};
use super::error::HereError;

/// Default routing endpoint.
const DEFAULT_ROUTING_URL: &str = "https://router.hereapi.com/v8/routes";

/// Default geocoding endpoint.
const DEFAULT_GEOCODE_URL: &str = "https://geocode.search.hereapi.com/v1/geocode";

/// Fields requested from the routing endpoint.
const ROUTE_RETURN_FIELDS: &str = "polyline,actions";

/// Configuration for the routing/geocoding client.
#[derive(Debug, Clone)]
pub struct HereConfig {
    /// API key sent as the `apiKey` query parameter
    pub api_key: String,
    /// Routing endpoint URL
    pub routing_url: String,
    /// Geocoding endpoint URL
    pub geocode_url: String,
    /// Request timeout in seconds; `None` leaves it to the transport
    pub timeout_secs: Option<u64>,
}

impl HereConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            routing_url: DEFAULT_ROUTING_URL.to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom routing URL (for testing).
    pub fn with_routing_url(mut self, url: impl Into<String>) -> Self {
        self.routing_url = url.into();
        self
    }

    /// Set a custom geocoding URL (for testing).
    pub fn with_geocode_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Routing and geocoding API client.
#[derive(Debug, Clone)]
pub struct HereClient {
    http: reqwest::Client,
    api_key: String,
    routing_url: String,
    geocode_url: String,
}

impl HereClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HereConfig) -> Result<Self, HereError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            routing_url: config.routing_url,
            geocode_url: config.geocode_url,
        })
    }

    /// Resolve an address to the coordinate of its best match.
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, HereError> {
        debug!(address, "geocoding");

        let transport_error = |e: reqwest::Error| HereError::GeocodeProvider {
            address: address.to_string(),
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
            body: None,
        };

        let response = self
            .http
            .get(&self.geocode_url)
            .query(&[("q", address), ("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(HereError::GeocodeProvider {
                address: address.to_string(),
                status: Some(status.as_u16()),
                message: status_message(status, &body),
                body: Some(excerpt(&body)),
            });
        }

        parse_geocode_response(address, &body)
    }

    /// Fetch a route between two coordinates for a transport mode.
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportCategory,
    ) -> Result<RouteData, HereError> {
        debug!(%origin, %destination, %mode, "requesting route");

        let transport_error = |e: reqwest::Error| HereError::RoutingProvider {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
            body: None,
        };

        let response = self
            .http
            .get(&self.routing_url)
            .query(&[
                ("transportMode", mode.as_str().to_string()),
                ("origin", origin.to_string()),
                ("destination", destination.to_string()),
                ("return", ROUTE_RETURN_FIELDS.to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(HereError::RoutingProvider {
                status: Some(status.as_u16()),
                message: status_message(status, &body),
                body: Some(excerpt(&body)),
            });
        }

        parse_route_response(&body)
    }
}

fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    match error_summary(body) {
        Some(summary) => format!("HTTP {}: {summary}", status.as_u16()),
        None => format!("HTTP {status}"),
    }
}

impl Geocoder for HereClient {
    async fn geocode(&self, address: &str) -> Result<Coordinate, HereError> {
        HereClient::geocode(self, address).await
    }
}

impl RouteProvider for HereClient {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportCategory,
    ) -> Result<RouteData, HereError> {
        HereClient::route(self, origin, destination, mode).await
    }
}
