//! Toll pricing service (TollGuru).
//!
//! Submits a standard polyline, the vehicle type and optionally a
//! location-time series, and returns the cost per payment method.

mod client;
mod convert;
mod error;
mod types;

pub use client::{TollGuruClient, TollGuruConfig};
pub use convert::parse_quote_response;
pub use error::{ErrorDetail, TollError};
pub use types::{QuoteRequest, SOURCE_TAG, TollCosts, VehicleSpec};
