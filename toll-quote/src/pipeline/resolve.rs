//! Route resolution: endpoints to a toll-ready route.
//!
//! Geocode both ends, route between them, transcode the geometry to the
//! standard polyline and anchor the maneuvers in time. Steps run strictly
//! one after another and the first failure ends the call.

use tracing::{debug, info, warn};

use crate::domain::{
    Coordinate, LocTimeSeries, LocTimeStrategy, Location, ManeuverAction, TransportCategory,
    classify, parse_iso8601_to_epoch, reconstruct, reconstruct_endpoints, total_duration,
};
use crate::here::HereError;
use crate::polyline::{PolylineFormat, transcode};

use super::error::PipelineError;
use super::provider::{Geocoder, RouteProvider};

/// A route ready to be priced.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResolution {
    /// Standard 5-decimal polyline.
    pub polyline: String,
    /// Maneuvers of the route, in order.
    pub actions: Vec<ManeuverAction>,
    /// Departure as epoch seconds.
    pub departure_epoch: i64,
    /// Arrival as epoch seconds, if the provider reported it.
    pub arrival_epoch: Option<i64>,
    /// Number of points in the geometry.
    pub point_count: usize,
    /// Transport mode the route was computed for.
    pub category: TransportCategory,
    /// Location-time series built with the resolver's strategy.
    pub loc_times: LocTimeSeries,
}

impl RouteResolution {
    /// Build the location-time series with a given strategy.
    ///
    /// `Endpoints` falls back to departure plus the summed maneuver
    /// durations when no arrival time was reported.
    pub fn loc_times_for(&self, strategy: LocTimeStrategy) -> LocTimeSeries {
        match strategy {
            LocTimeStrategy::PerAction => reconstruct(&self.actions, self.departure_epoch),
            LocTimeStrategy::Endpoints => {
                let arrival = self
                    .arrival_epoch
                    .unwrap_or_else(|| {
                        self.departure_epoch
                            .saturating_add(total_duration(&self.actions))
                    });
                reconstruct_endpoints(
                    self.point_count.saturating_sub(1),
                    self.departure_epoch,
                    arrival,
                )
            }
        }
    }
}

/// Resolves trip endpoints into a priced-ready route.
#[derive(Debug, Clone)]
pub struct RouteResolver<P> {
    provider: P,
    strategy: LocTimeStrategy,
}

impl<P: Geocoder + RouteProvider> RouteResolver<P> {
    /// Create a resolver using the per-action strategy.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            strategy: LocTimeStrategy::default(),
        }
    }

    /// Choose the location-time strategy.
    pub fn with_strategy(mut self, strategy: LocTimeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> LocTimeStrategy {
        self.strategy
    }

    /// Resolve a trip for a vehicle code.
    ///
    /// Unknown or empty codes route as cars.
    pub async fn resolve(
        &self,
        source: &Location,
        destination: &Location,
        vehicle_code: &str,
    ) -> Result<RouteResolution, PipelineError> {
        self.resolve_for(source, destination, classify(vehicle_code))
            .await
    }

    /// Resolve a trip for an already classified transport mode.
    pub async fn resolve_for(
        &self,
        source: &Location,
        destination: &Location,
        category: TransportCategory,
    ) -> Result<RouteResolution, PipelineError> {
        let origin = self.locate(source).await?;
        let target = self.locate(destination).await?;
        debug!(%origin, %target, "endpoints located");

        let route = self.provider.route(origin, target, category).await?;

        let (polyline, point_count) =
            transcode(&route.polyline, PolylineFormat::Flexible, PolylineFormat::Standard)?;

        let departure_epoch = parse_iso8601_to_epoch(&route.departure_time)?;
        // Arrival only feeds the endpoints series, which can fall back to
        // the summed durations
        let arrival_epoch = route.arrival_time.as_deref().and_then(|arrival| {
            parse_iso8601_to_epoch(arrival)
                .inspect_err(|e| warn!(error = %e, "ignoring unreadable arrival time"))
                .ok()
        });

        let mut resolution = RouteResolution {
            polyline,
            actions: route.actions,
            departure_epoch,
            arrival_epoch,
            point_count,
            category,
            loc_times: Vec::new(),
        };
        resolution.loc_times = resolution.loc_times_for(self.strategy);

        info!(
            points = resolution.point_count,
            actions = resolution.actions.len(),
            loc_times = resolution.loc_times.len(),
            mode = %category,
            "route resolved"
        );

        Ok(resolution)
    }

    async fn locate(&self, location: &Location) -> Result<Coordinate, HereError> {
        match location {
            Location::Coordinate(coord) => Ok(*coord),
            Location::Address(address) => {
                if !address.chars().any(char::is_alphanumeric) {
                    return Err(HereError::InvalidAddress(address.clone()));
                }
                self.provider.geocode(address).await
            }
        }
    }
}
