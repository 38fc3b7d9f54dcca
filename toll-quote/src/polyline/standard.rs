//! Standard (5-decimal) polyline encoding.
//!
//! Each chunk is offset by 63 so it lands in printable ASCII (`?`..=`~`).
//! This is the interchange format the toll service expects.

use crate::domain::Coordinate;

use super::error::PolylineError;
use super::varint::{accumulate, push_unsigned, read_unsigned, scale, zigzag};

/// Fixed scale factor (5 decimal places).
const FACTOR: f64 = 1e5;

fn to_char(chunk: u8) -> char {
    char::from(chunk + 63)
}

fn from_char(byte: u8) -> Option<u8> {
    (63..=126).contains(&byte).then(|| byte - 63)
}

/// Encode a geometry at 5-decimal precision.
///
/// ```
/// use toll_quote::domain::Coordinate;
/// use toll_quote::polyline::standard;
///
/// let coords = [
///     Coordinate::new(38.5, -120.2).unwrap(),
///     Coordinate::new(40.7, -120.95).unwrap(),
///     Coordinate::new(43.252, -126.453).unwrap(),
/// ];
/// assert_eq!(standard::encode(&coords).unwrap(), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// ```
pub fn encode(coords: &[Coordinate]) -> Result<String, PolylineError> {
    if coords.is_empty() {
        return Err(PolylineError::EmptyGeometry);
    }

    let mut out = String::with_capacity(coords.len() * 8);
    let mut last_lat = 0i64;
    let mut last_lng = 0i64;

    for coord in coords {
        let lat = scale(coord.lat(), FACTOR);
        let lng = scale(coord.lng(), FACTOR);
        push_unsigned(zigzag(lat - last_lat), &mut out, to_char);
        push_unsigned(zigzag(lng - last_lng), &mut out, to_char);
        last_lat = lat;
        last_lng = lng;
    }

    Ok(out)
}

/// Decode a standard polyline into coordinates.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let values = read_unsigned(encoded, from_char)?;

    if values.is_empty() {
        return Err(PolylineError::malformed("no coordinates"));
    }
    if values.len() % 2 != 0 {
        return Err(PolylineError::malformed("trailing partial coordinate"));
    }

    let mut coords = Vec::with_capacity(values.len() / 2);
    let mut lat = 0i64;
    let mut lng = 0i64;

    for pair in values.chunks_exact(2) {
        lat = accumulate(lat, pair[0])?;
        lng = accumulate(lng, pair[1])?;
        let coord = Coordinate::new(lat as f64 / FACTOR, lng as f64 / FACTOR)
            .map_err(|e| PolylineError::malformed(e.to_string()))?;
        coords.push(coord);
    }

    Ok(coords)
}
