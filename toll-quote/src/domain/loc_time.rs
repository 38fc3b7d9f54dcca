//! Location-time series along a route.
//!
//! Toll rates can depend on time of day, so the toll service accepts a list
//! of `[offset, epoch]` pairs telling it when the vehicle reaches each point
//! of the polyline. Two ways of building that list are supported:
//!
//! - [`LocTimeStrategy::PerAction`] anchors every maneuver to its own time,
//!   keeping the uneven speed of the trip.
//! - [`LocTimeStrategy::Endpoints`] anchors only the first and last point to
//!   departure and arrival.

use std::str::FromStr;

use serde::{Serialize, Serializer};

/// One routing maneuver: where it happens and how long until the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManeuverAction {
    /// Index into the route geometry.
    pub offset: usize,
    /// Seconds from this maneuver to the next. Not validated; a negative
    /// value moves the clock backwards.
    pub duration: i64,
}

impl ManeuverAction {
    pub fn new(offset: usize, duration: i64) -> Self {
        Self { offset, duration }
    }
}

/// A geometry offset anchored to an absolute time.
///
/// Serializes as a two-element array `[offset, epoch]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocTimeEntry {
    pub offset: usize,
    pub epoch: i64,
}

impl LocTimeEntry {
    pub fn new(offset: usize, epoch: i64) -> Self {
        Self { offset, epoch }
    }
}

impl Serialize for LocTimeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.offset, self.epoch).serialize(serializer)
    }
}

/// Ordered location-time series.
pub type LocTimeSeries = Vec<LocTimeEntry>;

/// How to build the location-time series for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocTimeStrategy {
    /// One entry per maneuver with cumulative timing.
    #[default]
    PerAction,
    /// Two entries: first point at departure, last point at arrival.
    Endpoints,
}

impl FromStr for LocTimeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-action" => Ok(LocTimeStrategy::PerAction),
            "endpoints" => Ok(LocTimeStrategy::Endpoints),
            other => Err(format!(
                "unknown loc-time strategy '{other}' (expected 'per-action' or 'endpoints')"
            )),
        }
    }
}

/// Anchor each maneuver offset to the time the vehicle reaches it.
///
/// The clock starts at `departure_epoch` and advances by each action's
/// duration after that action is emitted, so the output has one entry per
/// action in input order. The clock saturates rather than wrapping.
///
/// # Examples
///
/// ```
/// use toll_quote::domain::{reconstruct, LocTimeEntry, ManeuverAction};
///
/// let actions = [ManeuverAction::new(0, 120), ManeuverAction::new(50, 300)];
/// let series = reconstruct(&actions, 1609840000);
/// assert_eq!(
///     series,
///     vec![LocTimeEntry::new(0, 1609840000), LocTimeEntry::new(50, 1609840120)]
/// );
/// ```
pub fn reconstruct(actions: &[ManeuverAction], departure_epoch: i64) -> LocTimeSeries {
    let mut clock = departure_epoch;
    actions
        .iter()
        .map(|action| {
            let entry = LocTimeEntry::new(action.offset, clock);
            clock = clock.saturating_add(action.duration);
            entry
        })
        .collect()
}

/// Anchor the first and last geometry points to departure and arrival.
pub fn reconstruct_endpoints(
    last_offset: usize,
    departure_epoch: i64,
    arrival_epoch: i64,
) -> LocTimeSeries {
    vec![
        LocTimeEntry::new(0, departure_epoch),
        LocTimeEntry::new(last_offset, arrival_epoch),
    ]
}

/// Total travel time implied by the actions, saturating at the `i64` bounds.
pub fn total_duration(actions: &[ManeuverAction]) -> i64 {
    actions
        .iter()
        .fold(0i64, |total, a| total.saturating_add(a.duration))
}
