//! Provider seams used by the pipeline.
//!
//! The HTTP clients implement these; tests substitute in-memory fakes.

use std::future::Future;

use crate::domain::{Coordinate, TransportCategory};
use crate::here::{HereError, RouteData};
use crate::tollguru::{QuoteRequest, TollCosts, TollError};

/// Resolves a free-text address to a coordinate.
pub trait Geocoder {
    /// Return the coordinate of the best match for `address`.
    fn geocode(&self, address: &str) -> impl Future<Output = Result<Coordinate, HereError>> + Send;
}

/// Fetches a route between two coordinates.
pub trait RouteProvider {
    /// Return geometry, maneuvers and timing of the first route found.
    fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportCategory,
    ) -> impl Future<Output = Result<RouteData, HereError>> + Send;
}

/// Prices a route.
pub trait TollPricer {
    fn price(
        &self,
        request: &QuoteRequest,
    ) -> impl Future<Output = Result<TollCosts, TollError>> + Send;
}
