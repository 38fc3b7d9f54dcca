//! Pipeline error type.

use crate::domain::TimestampError;
use crate::here::HereError;
use crate::polyline::PolylineError;
use crate::tollguru::TollError;

/// Any failure that ends a quote. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Geocoding or routing failed
    #[error(transparent)]
    Provider(#[from] HereError),

    /// Route geometry could not be transcoded
    #[error("route geometry: {0}")]
    Geometry(#[from] PolylineError),

    /// Route departure or arrival time could not be read
    #[error("route timing: {0}")]
    Timestamp(#[from] TimestampError),

    /// Toll pricing failed
    #[error(transparent)]
    Toll(#[from] TollError),
}

impl PipelineError {
    /// Whether the failure happened before the toll service was called.
    pub fn is_routing(&self) -> bool {
        !matches!(self, PipelineError::Toll(_))
    }
}
