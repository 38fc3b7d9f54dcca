//! The route-to-toll pipeline.
//!
//! Endpoints are geocoded, routed, transcoded and timed by
//! [`RouteResolver`], then priced by [`TollQuoter`]. Every step awaits the
//! previous one; nothing is cached or retried.

mod config;
mod error;
mod provider;
mod quote;
mod resolve;

#[cfg(test)]
pub(crate) mod testing;

pub use config::QuoteConfig;
pub use error::PipelineError;
pub use provider::{Geocoder, RouteProvider, TollPricer};
pub use quote::{TollQuoter, TripQuote};
pub use resolve::{RouteResolution, RouteResolver};
