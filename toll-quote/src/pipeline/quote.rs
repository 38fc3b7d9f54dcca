//! End-to-end toll quoting.

use tracing::info;

use crate::domain::{Location, VehicleDescriptor};
use crate::tollguru::{QuoteRequest, TollCosts};

use super::config::QuoteConfig;
use super::error::PipelineError;
use super::provider::{Geocoder, RouteProvider, TollPricer};
use super::resolve::{RouteResolution, RouteResolver};

/// A priced trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripQuote {
    pub vehicle: VehicleDescriptor,
    pub resolution: RouteResolution,
    pub costs: TollCosts,
}

/// Resolves trips and prices them.
#[derive(Debug, Clone)]
pub struct TollQuoter<P, T> {
    resolver: RouteResolver<P>,
    pricer: T,
    config: QuoteConfig,
}

impl<P, T> TollQuoter<P, T>
where
    P: Geocoder + RouteProvider,
    T: TollPricer,
{
    pub fn new(provider: P, pricer: T, config: QuoteConfig) -> Self {
        let resolver = RouteResolver::new(provider).with_strategy(config.strategy);
        Self {
            resolver,
            pricer,
            config,
        }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn pricer(&self) -> &T {
        &self.pricer
    }

    /// Vehicle for a request, falling back to the configured default.
    pub fn vehicle(&self, code: Option<&str>) -> VehicleDescriptor {
        VehicleDescriptor::new(code.unwrap_or(&self.config.vehicle_type))
    }

    /// Resolve a trip for a vehicle.
    pub async fn resolve(
        &self,
        source: &Location,
        destination: &Location,
        vehicle: &VehicleDescriptor,
    ) -> Result<RouteResolution, PipelineError> {
        self.resolver
            .resolve_for(source, destination, vehicle.category())
            .await
    }

    /// Build the pricing request for a resolved route.
    pub fn build_request(
        &self,
        resolution: &RouteResolution,
        vehicle: &VehicleDescriptor,
    ) -> QuoteRequest {
        let mut request = QuoteRequest::new(resolution.polyline.clone(), vehicle);
        if self.config.send_loc_times {
            request = request.with_loc_times(resolution.loc_times.clone());
        }
        if let Some(departure_time) = &self.config.departure_time {
            request = request.with_departure_time(departure_time.clone());
        }
        request
    }

    /// Price a resolved route.
    pub async fn price(
        &self,
        resolution: &RouteResolution,
        vehicle: &VehicleDescriptor,
    ) -> Result<TollCosts, PipelineError> {
        let request = self.build_request(resolution, vehicle);
        let costs = self.pricer.price(&request).await?;

        if costs.is_empty() {
            info!("route has no tolls");
        } else {
            info!(methods = costs.len(), tag = ?costs.tag(), cash = ?costs.cash(), "toll quote received");
        }
        Ok(costs)
    }

    /// Resolve and price a trip.
    pub async fn quote_trip(
        &self,
        source: &Location,
        destination: &Location,
        vehicle_code: Option<&str>,
    ) -> Result<TripQuote, PipelineError> {
        let vehicle = self.vehicle(vehicle_code);
        let resolution = self.resolve(source, destination, &vehicle).await?;
        let costs = self.price(&resolution, &vehicle).await?;

        Ok(TripQuote {
            vehicle,
            resolution,
            costs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocTimeEntry, LocTimeStrategy, TransportCategory};
    use crate::here::HereError;
    use crate::pipeline::testing::{FakePricer, FakeProvider, ROUTE_BODY};
    use crate::tollguru::TollError;

    const COSTS_BODY: &str = r#"{"route": {"hasTolls": true, "costs": {"tag": 11.75, "cash": 17}}}"#;

    fn addr(s: &str) -> Location {
        Location::Address(s.to_string())
    }

    fn provider() -> FakeProvider {
        FakeProvider::new(ROUTE_BODY)
            .with_geocode("Philadelphia, PA", 39.95222, -75.16218)
            .with_geocode("New York, NY", 40.71455, -74.00712)
    }

    #[tokio::test]
    async fn quote_trip_end_to_end() {
        let quoter = TollQuoter::new(
            provider(),
            FakePricer::new(200, COSTS_BODY),
            QuoteConfig::default(),
        );

        let quote = quoter
            .quote_trip(&addr("Philadelphia, PA"), &addr("New York, NY"), None)
            .await
            .unwrap();

        assert_eq!(quote.vehicle.code(), "2AxlesAuto");
        assert_eq!(quote.costs.tag(), Some(11.75));
        assert_eq!(quote.costs.cash(), Some(17.0));

        let requests = quoter.pricer.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].source, "here");
        assert_eq!(requests[0].polyline, "grxpHyzat@t@zNrG`YpJzW");
        assert_eq!(requests[0].vehicle.kind, "2AxlesAuto");
        assert_eq!(
            requests[0].loc_times,
            Some(vec![
                LocTimeEntry::new(0, 1609840000),
                LocTimeEntry::new(50, 1609840120)
            ])
        );
        assert_eq!(requests[0].departure_time, None);
    }

    #[tokio::test]
    async fn vehicle_code_is_sent_verbatim() {
        let quoter = TollQuoter::new(
            provider(),
            FakePricer::new(200, COSTS_BODY),
            QuoteConfig::default(),
        );

        let quote = quoter
            .quote_trip(
                &addr("Philadelphia, PA"),
                &addr("New York, NY"),
                Some("5AxlesTruck"),
            )
            .await
            .unwrap();

        assert_eq!(quote.resolution.category, TransportCategory::Truck);
        assert_eq!(quoter.pricer.requests()[0].vehicle.kind, "5AxlesTruck");
    }

    #[tokio::test]
    async fn no_tolls_is_success() {
        let quoter = TollQuoter::new(
            provider(),
            FakePricer::new(200, r#"{"route":{"costs":{}}}"#),
            QuoteConfig::default(),
        );

        let quote = quoter
            .quote_trip(&addr("Philadelphia, PA"), &addr("New York, NY"), None)
            .await
            .unwrap();

        assert!(quote.costs.is_empty());
    }

    #[tokio::test]
    async fn toll_rejection_propagates() {
        let quoter = TollQuoter::new(
            provider(),
            FakePricer::new(402, r#"{"code":"invalid_vehicle","value":"bad type"}"#),
            QuoteConfig::default(),
        );

        let err = quoter
            .quote_trip(&addr("Philadelphia, PA"), &addr("New York, NY"), Some("Bogus"))
            .await
            .unwrap_err();

        match err {
            PipelineError::Toll(e @ TollError::Rejected { .. }) => {
                assert_eq!(e.status(), Some(402));
                assert_eq!(e.code(), Some("invalid_vehicle"));
                assert_eq!(e.value(), Some("bad type"));
            }
            other => panic!("expected toll rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn routing_failure_skips_pricing() {
        let quoter = TollQuoter::new(
            provider(),
            FakePricer::new(200, COSTS_BODY),
            QuoteConfig::default(),
        );

        let err = quoter
            .quote_trip(&addr("Nowhereville"), &addr("New York, NY"), None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Provider(HereError::NoGeocodeMatch { .. })
        ));
        assert!(quoter.pricer.requests().is_empty());
    }

    #[tokio::test]
    async fn loc_times_can_be_disabled() {
        let config = QuoteConfig::default()
            .with_loc_times(false)
            .with_departure_time("2021-01-05T09:46:08Z");
        let quoter = TollQuoter::new(provider(), FakePricer::new(200, COSTS_BODY), config);

        quoter
            .quote_trip(&addr("Philadelphia, PA"), &addr("New York, NY"), None)
            .await
            .unwrap();

        let request = &quoter.pricer.requests()[0];
        assert_eq!(request.loc_times, None);
        assert_eq!(request.departure_time.as_deref(), Some("2021-01-05T09:46:08Z"));
    }

    #[tokio::test]
    async fn endpoints_strategy_sends_two_entries() {
        let config = QuoteConfig::default().with_strategy(LocTimeStrategy::Endpoints);
        let quoter = TollQuoter::new(provider(), FakePricer::new(200, COSTS_BODY), config);

        quoter
            .quote_trip(&addr("Philadelphia, PA"), &addr("New York, NY"), None)
            .await
            .unwrap();

        assert_eq!(
            quoter.pricer.requests()[0].loc_times,
            Some(vec![
                LocTimeEntry::new(0, 1609840000),
                LocTimeEntry::new(3, 1609840420)
            ])
        );
    }

    #[tokio::test]
    async fn route_without_actions_omits_loc_times() {
        let body = r#"{"routes": [{"sections": [{
            "polyline": "BFoz5xJ67i1B1B7PzIhaxL7Y",
            "departure": {"time": "2021-01-05T09:46:40Z"}
        }]}]}"#;
        let provider = FakeProvider::new(body)
            .with_geocode("A", 1.0, 1.0)
            .with_geocode("B", 2.0, 2.0);
        let quoter = TollQuoter::new(provider, FakePricer::new(200, COSTS_BODY), QuoteConfig::default());

        quoter.quote_trip(&addr("A"), &addr("B"), None).await.unwrap();

        assert_eq!(quoter.pricer.requests()[0].loc_times, None);
    }
}
