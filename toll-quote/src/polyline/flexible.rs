//! Flexible polyline encoding, as returned by the HERE routing API.
//!
//! Layout: a format version, a header packing the precision and an
//! optional third dimension, then zig-zag deltas for each coordinate. The
//! alphabet is URL-safe base64 (`A-Z a-z 0-9 - _`).
//!
//! Only latitude and longitude are kept on decode; third-dimension values
//! are read so the stream stays aligned and are otherwise dropped.

use crate::domain::Coordinate;

use super::error::PolylineError;
use super::varint::{accumulate, push_unsigned, read_unsigned, scale, zigzag};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const FORMAT_VERSION: u64 = 1;

/// Precision used by [`encode`].
pub const DEFAULT_PRECISION: u8 = 5;

const MAX_PRECISION: u8 = 15;

fn to_char(chunk: u8) -> char {
    char::from(ALPHABET[chunk as usize])
}

fn from_char(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'-' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}

/// What the optional third value of each point means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThirdDimension {
    Absent,
    Level,
    Altitude,
    Elevation,
    Custom1,
    Custom2,
}

impl ThirdDimension {
    fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(ThirdDimension::Absent),
            1 => Some(ThirdDimension::Level),
            2 => Some(ThirdDimension::Altitude),
            3 => Some(ThirdDimension::Elevation),
            // 4 and 5 are reserved
            6 => Some(ThirdDimension::Custom1),
            7 => Some(ThirdDimension::Custom2),
            _ => None,
        }
    }
}

/// Decoded flexible polyline header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Decimal places for latitude and longitude.
    pub precision: u8,
    pub third_dimension: ThirdDimension,
    /// Decimal places for the third dimension.
    pub third_dimension_precision: u8,
}

impl Header {
    fn parse(version: u64, packed: u64) -> Result<Self, PolylineError> {
        if version != FORMAT_VERSION {
            return Err(PolylineError::malformed(format!(
                "invalid format version {version}"
            )));
        }
        if packed >> 11 != 0 {
            return Err(PolylineError::malformed("invalid header"));
        }

        let third_dimension = ThirdDimension::from_code((packed >> 4) & 0x7).ok_or_else(|| {
            PolylineError::malformed(format!(
                "reserved third dimension {}",
                (packed >> 4) & 0x7
            ))
        })?;

        Ok(Self {
            precision: (packed & 0xF) as u8,
            third_dimension,
            third_dimension_precision: ((packed >> 7) & 0xF) as u8,
        })
    }

    fn values_per_point(&self) -> usize {
        if self.third_dimension == ThirdDimension::Absent {
            2
        } else {
            3
        }
    }
}

/// Read just the header of a flexible polyline.
///
/// ```
/// use toll_quote::polyline::flexible::{self, ThirdDimension};
///
/// let header = flexible::decode_header("BFoz5xJ67i1B1B7PzIhaxL7Y").unwrap();
/// assert_eq!(header.precision, 5);
/// assert_eq!(header.third_dimension, ThirdDimension::Absent);
/// ```
pub fn decode_header(encoded: &str) -> Result<Header, PolylineError> {
    let values = read_unsigned(encoded, from_char)?;
    match values.as_slice() {
        [version, packed, ..] => Header::parse(*version, *packed),
        _ => Err(PolylineError::malformed("missing header")),
    }
}

/// Decode a flexible polyline into 2-D coordinates.
///
/// ```
/// use toll_quote::polyline::flexible;
///
/// let coords = flexible::decode("BFoz5xJ67i1B1B7PzIhaxL7Y").unwrap();
/// assert_eq!(coords.len(), 4);
/// assert_eq!(coords[0].lat(), 50.10228);
/// assert_eq!(coords[0].lng(), 8.69821);
/// ```
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let values = read_unsigned(encoded, from_char)?;

    let (header, body) = match values.as_slice() {
        [version, packed, body @ ..] => (Header::parse(*version, *packed)?, body),
        _ => return Err(PolylineError::malformed("missing header")),
    };

    let width = header.values_per_point();
    if body.is_empty() {
        return Err(PolylineError::malformed("no coordinates"));
    }
    if body.len() % width != 0 {
        return Err(PolylineError::malformed("trailing partial coordinate"));
    }

    let factor = 10f64.powi(i32::from(header.precision));
    let mut coords = Vec::with_capacity(body.len() / width);
    let mut lat = 0i64;
    let mut lng = 0i64;

    for point in body.chunks_exact(width) {
        lat = accumulate(lat, point[0])?;
        lng = accumulate(lng, point[1])?;
        let coord = Coordinate::new(lat as f64 / factor, lng as f64 / factor)
            .map_err(|e| PolylineError::malformed(e.to_string()))?;
        coords.push(coord);
    }

    Ok(coords)
}

/// Encode 2-D coordinates at [`DEFAULT_PRECISION`].
pub fn encode(coords: &[Coordinate]) -> Result<String, PolylineError> {
    encode_with_precision(coords, DEFAULT_PRECISION)
}

/// Encode 2-D coordinates at the given number of decimal places (0-15).
pub fn encode_with_precision(coords: &[Coordinate], precision: u8) -> Result<String, PolylineError> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::InvalidPrecision(precision));
    }
    if coords.is_empty() {
        return Err(PolylineError::EmptyGeometry);
    }

    let mut out = String::with_capacity(4 + coords.len() * 8);
    push_unsigned(FORMAT_VERSION, &mut out, to_char);
    // No third dimension: bits 4-10 stay zero
    push_unsigned(u64::from(precision), &mut out, to_char);

    let factor = 10f64.powi(i32::from(precision));
    let mut last_lat = 0i64;
    let mut last_lng = 0i64;

    for coord in coords {
        let lat = scale(coord.lat(), factor);
        let lng = scale(coord.lng(), factor);
        push_unsigned(zigzag(lat - last_lat), &mut out, to_char);
        push_unsigned(zigzag(lng - last_lng), &mut out, to_char);
        last_lat = lat;
        last_lng = lng;
    }

    Ok(out)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lng)| Coordinate::new(lat, lng).unwrap())
    }

    proptest! {
        /// Decoding recovers each point within half a grid step
        #[test]
        fn roundtrip_within_precision(
            coords in prop::collection::vec(coordinate(), 1..50),
            precision in 0u8..=9,
        ) {
            let encoded = encode_with_precision(&coords, precision).unwrap();
            let decoded = decode(&encoded).unwrap();
            let tolerance = 0.5 / 10f64.powi(i32::from(precision)) + 1e-9;
            prop_assert_eq!(decoded.len(), coords.len());
            for (a, b) in decoded.iter().zip(&coords) {
                prop_assert!((a.lat() - b.lat()).abs() <= tolerance);
                prop_assert!((a.lng() - b.lng()).abs() <= tolerance);
            }
        }

        /// The header always reports the precision used
        #[test]
        fn header_reports_precision(
            coords in prop::collection::vec(coordinate(), 1..5),
            precision in 0u8..=15,
        ) {
            let encoded = encode_with_precision(&coords, precision).unwrap();
            prop_assert_eq!(decode_header(&encoded).unwrap().precision, precision);
        }

        /// Output only uses the URL-safe alphabet
        #[test]
        fn output_in_alphabet(coords in prop::collection::vec(coordinate(), 1..20)) {
            let encoded = encode(&coords).unwrap();
            prop_assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }
}
