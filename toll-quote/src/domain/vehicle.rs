//! Vehicle types and their routing category.
//!
//! The toll service prices by a fine-grained vehicle code (axle count and
//! use case, e.g. "5AxlesTruck"), while the routing service only knows a
//! handful of transport modes. `classify` bridges the two.

use std::fmt;

use serde::Serialize;
use tracing::warn;

/// Vehicle code used when none is configured.
pub const DEFAULT_VEHICLE_TYPE: &str = "2AxlesAuto";

/// Coarse transport mode understood by the routing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportCategory {
    #[default]
    Car,
    Truck,
    Bus,
}

impl TransportCategory {
    /// The `transportMode` query value for the routing API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportCategory::Car => "car",
            TransportCategory::Truck => "truck",
            TransportCategory::Bus => "bus",
        }
    }
}

impl fmt::Display for TransportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static vehicle code table. RVs, rideshare and carpool route as cars.
const VEHICLE_CATEGORIES: &[(&str, TransportCategory)] = &[
    // Car / SUV / pickup / EV
    ("2AxlesAuto", TransportCategory::Car),
    ("3AxlesAuto", TransportCategory::Car),
    ("4AxlesAuto", TransportCategory::Car),
    ("2AxlesDualTire", TransportCategory::Car),
    ("3AxlesDualTire", TransportCategory::Car),
    ("4AxlesDualTire", TransportCategory::Car),
    ("2AxlesEV", TransportCategory::Car),
    ("3AxlesEV", TransportCategory::Car),
    ("4AxlesEV", TransportCategory::Car),
    // Rideshare / taxi / carpool
    ("2AxlesTNC", TransportCategory::Car),
    ("2AxlesTNCPool", TransportCategory::Car),
    ("2AxlesTaxi", TransportCategory::Car),
    ("2AxlesTaxiPool", TransportCategory::Car),
    ("Carpool2", TransportCategory::Car),
    ("Carpool3", TransportCategory::Car),
    // Truck
    ("2AxlesTruck", TransportCategory::Truck),
    ("3AxlesTruck", TransportCategory::Truck),
    ("4AxlesTruck", TransportCategory::Truck),
    ("5AxlesTruck", TransportCategory::Truck),
    ("6AxlesTruck", TransportCategory::Truck),
    ("7AxlesTruck", TransportCategory::Truck),
    ("8AxlesTruck", TransportCategory::Truck),
    ("9AxlesTruck", TransportCategory::Truck),
    // Bus
    ("2AxlesBus", TransportCategory::Bus),
    ("3AxlesBus", TransportCategory::Bus),
    // RV
    ("2AxlesRv", TransportCategory::Car),
    ("3AxlesRv", TransportCategory::Car),
    ("4AxlesRv", TransportCategory::Car),
];

/// Look up a vehicle code without the fallback.
pub fn lookup(code: &str) -> Option<TransportCategory> {
    VEHICLE_CATEGORIES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, category)| *category)
}

/// Map a vehicle code to its routing category.
///
/// Empty and unknown codes fall back to [`TransportCategory::Car`] with a
/// warning; this never fails.
///
/// ```
/// use toll_quote::domain::{classify, TransportCategory};
///
/// assert_eq!(classify("9AxlesTruck"), TransportCategory::Truck);
/// assert_eq!(classify("2AxlesBus"), TransportCategory::Bus);
/// assert_eq!(classify("Hovercraft"), TransportCategory::Car);
/// ```
pub fn classify(code: &str) -> TransportCategory {
    if code.is_empty() {
        warn!("no vehicle type provided, defaulting to 'car'");
        return TransportCategory::Car;
    }

    match lookup(code) {
        Some(category) => category,
        None => {
            warn!(vehicle_type = code, "unknown vehicle type, defaulting to 'car'");
            TransportCategory::Car
        }
    }
}

/// A toll-service vehicle code with its derived routing category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDescriptor {
    code: String,
    category: TransportCategory,
}

impl VehicleDescriptor {
    /// Build a descriptor, classifying the code.
    ///
    /// An unknown code is kept as-is for the toll service; only the routing
    /// category falls back.
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let category = classify(&code);
        Self { code, category }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn category(&self) -> TransportCategory {
        self.category
    }
}

impl Default for VehicleDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_VEHICLE_TYPE)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything outside the table routes as a car
        #[test]
        fn unknown_codes_are_car(code in "[a-z0-9 ]{0,16}") {
            prop_assume!(lookup(&code).is_none());
            prop_assert_eq!(classify(&code), TransportCategory::Car);
        }

        /// Every table entry classifies to its own category
        #[test]
        fn table_entries_classify(idx in 0..VEHICLE_CATEGORIES.len()) {
            let (code, category) = VEHICLE_CATEGORIES[idx];
            prop_assert_eq!(classify(code), category);
        }
    }
}
