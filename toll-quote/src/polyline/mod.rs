//! Compact polyline codecs.
//!
//! The routing provider returns geometry as a flexible polyline; the toll
//! service wants a standard 5-decimal polyline. The two are not
//! byte-compatible, so conversion always goes through decoded coordinates.

mod error;
pub mod flexible;
pub mod standard;
mod varint;

pub use error::PolylineError;

use crate::domain::Coordinate;

/// Polyline encoding family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineFormat {
    /// Provider-native flexible polyline (header + variable precision).
    Flexible,
    /// Fixed 5-decimal polyline.
    Standard,
}

/// Decode a polyline of the given family into coordinates.
pub fn decode(encoded: &str, format: PolylineFormat) -> Result<Vec<Coordinate>, PolylineError> {
    match format {
        PolylineFormat::Flexible => flexible::decode(encoded),
        PolylineFormat::Standard => standard::decode(encoded),
    }
}

/// Encode coordinates in the given family.
///
/// Flexible output uses [`flexible::DEFAULT_PRECISION`].
pub fn encode(coords: &[Coordinate], format: PolylineFormat) -> Result<String, PolylineError> {
    match format {
        PolylineFormat::Flexible => flexible::encode(coords),
        PolylineFormat::Standard => standard::encode(coords),
    }
}

/// Re-encode a polyline from one family to another.
///
/// Returns the new encoding and the number of points it holds.
///
/// ```
/// use toll_quote::polyline::{transcode, PolylineFormat};
///
/// let (standard, points) = transcode(
///     "BFoz5xJ67i1B1B7PzIhaxL7Y",
///     PolylineFormat::Flexible,
///     PolylineFormat::Standard,
/// )
/// .unwrap();
/// assert_eq!(standard, "grxpHyzat@t@zNrG`YpJzW");
/// assert_eq!(points, 4);
/// ```
pub fn transcode(
    encoded: &str,
    from: PolylineFormat,
    to: PolylineFormat,
) -> Result<(String, usize), PolylineError> {
    let coords = decode(encoded, from)?;
    let out = encode(&coords, to)?;
    Ok((out, coords.len()))
}
