//! Toll service HTTP client.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::domain::{LocTimeSeries, VehicleDescriptor};
use crate::pipeline::TollPricer;

use super::convert::parse_quote_response;
use super::error::TollError;
use super::types::{QuoteRequest, TollCosts};

/// Default base URL for the toll API.
const DEFAULT_BASE_URL: &str = "https://apis.tollguru.com/toll/v2";

/// Endpoint pricing a complete polyline drawn by a mapping service.
const POLYLINE_ENDPOINT: &str = "complete-polyline-from-mapping-service";

/// Configuration for the toll client.
#[derive(Debug, Clone)]
pub struct TollGuruConfig {
    /// API key for x-api-key header authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves it to the transport
    pub timeout_secs: Option<u64>,
}

impl TollGuruConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Client for the toll pricing API.
#[derive(Debug, Clone)]
pub struct TollGuruClient {
    http: reqwest::Client,
    base_url: String,
}

impl TollGuruClient {
    /// Create a new toll API client.
    pub fn new(config: TollGuruConfig) -> Result<Self, TollError> {
        let mut headers = HeaderMap::new();

        let api_key_header =
            HeaderValue::from_str(&config.api_key).map_err(|_| TollError::InvalidApiKey)?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key_header);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), POLYLINE_ENDPOINT)
    }

    /// Submit a pricing request.
    pub async fn submit(&self, request: &QuoteRequest) -> Result<TollCosts, TollError> {
        debug!(
            polyline_len = request.polyline.len(),
            loc_times = request.loc_times.as_ref().map_or(0, Vec::len),
            vehicle = %request.vehicle.kind,
            "requesting toll quote"
        );

        let response = self.http.post(self.endpoint()).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_quote_response(status.as_u16(), &body)
    }

    /// Price a standard polyline for a vehicle, with an optional time series.
    pub async fn quote(
        &self,
        polyline: &str,
        loc_times: Option<LocTimeSeries>,
        vehicle: &VehicleDescriptor,
    ) -> Result<TollCosts, TollError> {
        self.submit(&quote_request(polyline, loc_times, vehicle)).await
    }
}

/// Request body for [`TollGuruClient::quote`]. An absent or empty series
/// leaves `locTimes` out.
fn quote_request(
    polyline: &str,
    loc_times: Option<LocTimeSeries>,
    vehicle: &VehicleDescriptor,
) -> QuoteRequest {
    let request = QuoteRequest::new(polyline, vehicle);
    match loc_times {
        Some(loc_times) => request.with_loc_times(loc_times),
        None => request,
    }
}

impl TollPricer for TollGuruClient {
    async fn price(&self, request: &QuoteRequest) -> Result<TollCosts, TollError> {
        self.submit(request).await
    }
}
