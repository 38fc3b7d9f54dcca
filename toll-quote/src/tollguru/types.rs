//! Toll service request and result types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{LocTimeSeries, VehicleDescriptor};

/// Tag telling the toll service which routing provider drew the polyline.
pub const SOURCE_TAG: &str = "here";

/// Vehicle section of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleSpec {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request body for the polyline pricing endpoint.
///
/// Optional fields are left out of the JSON when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub source: String,
    /// Standard 5-decimal polyline.
    pub polyline: String,
    pub vehicle: VehicleSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc_times: Option<LocTimeSeries>,
    /// Fixed departure time, for callers without a time series.
    #[serde(rename = "departure_time", skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
}

impl QuoteRequest {
    /// Build a request for a polyline and vehicle.
    pub fn new(polyline: impl Into<String>, vehicle: &VehicleDescriptor) -> Self {
        Self {
            source: SOURCE_TAG.to_string(),
            polyline: polyline.into(),
            vehicle: VehicleSpec {
                kind: vehicle.code().to_string(),
            },
            loc_times: None,
            departure_time: None,
        }
    }

    /// Attach a location-time series. An empty series is omitted.
    pub fn with_loc_times(mut self, loc_times: LocTimeSeries) -> Self {
        self.loc_times = (!loc_times.is_empty()).then_some(loc_times);
        self
    }

    /// Attach a fixed ISO-8601 departure time.
    pub fn with_departure_time(mut self, departure_time: impl Into<String>) -> Self {
        self.departure_time = Some(departure_time.into());
        self
    }
}

/// Toll cost per payment method (e.g. `tag`, `cash`).
///
/// Empty means the route has no tolls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TollCosts(BTreeMap<String, f64>);

impl TollCosts {
    pub fn new(costs: BTreeMap<String, f64>) -> Self {
        Self(costs)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, method: &str) -> Option<f64> {
        self.0.get(method).copied()
    }

    /// Electronic tag cost.
    pub fn tag(&self) -> Option<f64> {
        self.get("tag")
    }

    /// Cash cost.
    pub fn cash(&self) -> Option<f64> {
        self.get("cash")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
