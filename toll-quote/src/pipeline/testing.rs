//! In-memory providers for pipeline tests.
//!
//! Responses go through the same `parse_*` functions as live responses, so
//! these exercise the real response handling without any network.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{Coordinate, TransportCategory};
use crate::here::{HereError, RouteData, parse_geocode_response, parse_route_response};
use crate::tollguru::{QuoteRequest, TollCosts, TollError, parse_quote_response};

use super::provider::{Geocoder, RouteProvider, TollPricer};

/// Route with four points and two maneuvers, departing 1609840000.
pub(crate) const ROUTE_BODY: &str = r#"{
    "routes": [{
        "id": "r0",
        "sections": [{
            "id": "s0",
            "type": "vehicle",
            "actions": [
                {"action": "depart", "duration": 120, "length": 1500, "offset": 0},
                {"action": "arrive", "duration": 300, "length": 0, "offset": 50}
            ],
            "departure": {"time": "2021-01-05T09:46:40Z"},
            "arrival": {"time": "2021-01-05T09:53:40Z"},
            "polyline": "BFoz5xJ67i1B1B7PzIhaxL7Y"
        }]
    }]
}"#;

/// Geocoder and router answering from canned bodies.
pub(crate) struct FakeProvider {
    geocodes: HashMap<String, String>,
    route_body: String,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub(crate) fn new(route_body: &str) -> Self {
        Self {
            geocodes: HashMap::new(),
            route_body: route_body.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer `address` with a single match.
    pub(crate) fn with_geocode(mut self, address: &str, lat: f64, lng: f64) -> Self {
        let body = format!(r#"{{"items": [{{"position": {{"lat": {lat}, "lng": {lng}}}}}]}}"#);
        self.geocodes.insert(address.to_string(), body);
        self
    }

    /// Calls made so far, oldest first.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Geocoder for FakeProvider {
    async fn geocode(&self, address: &str) -> Result<Coordinate, HereError> {
        self.calls.lock().unwrap().push(format!("geocode {address}"));
        let body = self
            .geocodes
            .get(address)
            .map(String::as_str)
            .unwrap_or(r#"{"items": []}"#);
        parse_geocode_response(address, body)
    }
}

impl RouteProvider for FakeProvider {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportCategory,
    ) -> Result<RouteData, HereError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("route {origin} -> {destination} {mode}"));
        parse_route_response(&self.route_body)
    }
}

/// Toll pricer answering every request with the same status and body.
pub(crate) struct FakePricer {
    status: u16,
    body: String,
    requests: Mutex<Vec<QuoteRequest>>,
}

impl FakePricer {
    pub(crate) fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub(crate) fn requests(&self) -> Vec<QuoteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl TollPricer for FakePricer {
    async fn price(&self, request: &QuoteRequest) -> Result<TollCosts, TollError> {
        self.requests.lock().unwrap().push(request.clone());
        parse_quote_response(self.status, &self.body)
    }
}
