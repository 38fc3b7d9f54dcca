//! Toll cost quoting.
//!
//! Geocodes two trip endpoints, fetches a route from the routing provider,
//! converts its geometry and timing into what the toll service expects,
//! and returns the toll cost per payment method.

pub mod batch;
pub mod config;
pub mod domain;
mod excerpt;
pub mod here;
pub mod pipeline;
pub mod polyline;
pub mod tollguru;
