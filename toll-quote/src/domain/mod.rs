//! Domain types for toll quoting.
//!
//! Coordinates, vehicle classification, timestamps and the location-time
//! series. Everything here is pure; provider I/O lives in `here` and
//! `tollguru`.

mod coordinate;
mod loc_time;
mod time;
mod vehicle;

pub use coordinate::{Coordinate, InvalidCoordinate, Location};
pub use loc_time::{
    LocTimeEntry, LocTimeSeries, LocTimeStrategy, ManeuverAction, reconstruct,
    reconstruct_endpoints, total_duration,
};
pub use time::{TimestampError, parse_iso8601_to_epoch};
pub use vehicle::{
    DEFAULT_VEHICLE_TYPE, TransportCategory, VehicleDescriptor, classify, lookup,
};
