//! Geocoding and routing provider (HERE).
//!
//! Resolves addresses to coordinates and fetches a route with its flexible
//! polyline, maneuvers and departure/arrival times. Only section 0 of
//! route 0 is used.

mod client;
mod convert;
mod error;
mod types;

pub use client::{HereClient, HereConfig};
pub use convert::{RouteData, parse_geocode_response, parse_route_response};
pub use error::HereError;
pub use types::{Action, GeocodeItem, GeocodeResponse, Position, Route, RouteResponse, Section};
