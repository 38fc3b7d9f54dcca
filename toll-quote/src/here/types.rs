//! Geocoding and routing API response DTOs.
//!
//! These map the parts of the JSON responses we read. Almost everything is
//! `Option` because the provider omits fields rather than sending nulls,
//! and a missing field has to surface as a provider error, not a panic.

use serde::Deserialize;

/// Response from the geocode endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Matches, best first. Absent on error payloads.
    pub items: Option<Vec<GeocodeItem>>,
}

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeItem {
    pub title: Option<String>,
    pub result_type: Option<String>,
    pub position: Option<Position>,
    pub address: Option<GeocodeAddress>,
}

/// Latitude/longitude pair as the provider sends it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeAddress {
    pub label: Option<String>,
}

/// Response from the routes endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    pub routes: Option<Vec<Route>>,
    /// Why no route was produced, when `routes` is empty.
    pub notices: Option<Vec<Notice>>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub id: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A section of a route (one transport mode).
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Flexible polyline of this section.
    pub polyline: Option<String>,
    /// Maneuvers, only present when requested.
    pub actions: Option<Vec<Action>>,
    pub departure: Option<SectionEvent>,
    pub arrival: Option<SectionEvent>,
}

/// Departure or arrival of a section.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionEvent {
    /// ISO-8601 time with offset.
    pub time: Option<String>,
}

/// One maneuver.
#[derive(Debug, Clone, Deserialize)]
pub struct Action {
    /// Maneuver kind ("depart", "turn", "arrive", ...).
    pub action: Option<String>,
    /// Seconds until the next maneuver.
    pub duration: i64,
    /// Metres until the next maneuver.
    pub length: Option<f64>,
    /// Index into the section polyline.
    pub offset: usize,
    pub instruction: Option<String>,
}

/// Routing notice (e.g. no route found).
#[derive(Debug, Clone, Deserialize)]
pub struct Notice {
    pub title: Option<String>,
    pub code: Option<String>,
}

/// Error payload shape shared by the provider's endpoints.
///
/// Gateway errors use `error`/`error_description`, service errors use
/// `title`/`cause`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub title: Option<String>,
    pub cause: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
