//! Geographic coordinates and trip endpoints.

use std::fmt;
use std::str::FromStr;

/// Error returned when a latitude or longitude falls outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lng}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
pub struct InvalidCoordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A validated (latitude, longitude) pair in degrees.
///
/// # Examples
///
/// ```
/// use toll_quote::domain::Coordinate;
///
/// let philly = Coordinate::new(39.95222, -75.16218).unwrap();
/// assert_eq!(philly.lat(), 39.95222);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// One end of a trip: either an address to geocode or a known coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Address(String),
    Coordinate(Coordinate),
}

impl Location {
    /// Short label for logs and error messages.
    pub fn label(&self) -> String {
        match self {
            Location::Address(address) => address.clone(),
            Location::Coordinate(coord) => coord.to_string(),
        }
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    /// Parse `"lat,lng"` as a coordinate, anything else as an address.
    ///
    /// ```
    /// use toll_quote::domain::Location;
    ///
    /// let loc: Location = "40.71,-74.0".parse().unwrap();
    /// assert!(matches!(loc, Location::Coordinate(_)));
    ///
    /// let loc: Location = "New York, NY".parse().unwrap();
    /// assert!(matches!(loc, Location::Address(_)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s.split_once(',').and_then(|(lat, lng)| {
            let lat = lat.trim().parse::<f64>().ok()?;
            let lng = lng.trim().parse::<f64>().ok()?;
            Coordinate::new(lat, lng).ok()
        });

        Ok(match parsed {
            Some(coord) => Location::Coordinate(coord),
            None => Location::Address(s.trim().to_string()),
        })
    }
}
