//! Quote configuration.

use crate::domain::{DEFAULT_VEHICLE_TYPE, LocTimeStrategy};

/// Per-run quoting parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Vehicle code used when a request does not name one.
    pub vehicle_type: String,

    /// How to build the location-time series.
    pub strategy: LocTimeStrategy,

    /// Whether to send the location-time series at all.
    pub send_loc_times: bool,

    /// Fixed ISO-8601 departure time sent with every request.
    pub departure_time: Option<String>,
}

impl QuoteConfig {
    /// Set the default vehicle code.
    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = vehicle_type.into();
        self
    }

    /// Set the location-time strategy.
    pub fn with_strategy(mut self, strategy: LocTimeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable sending the location-time series.
    pub fn with_loc_times(mut self, send: bool) -> Self {
        self.send_loc_times = send;
        self
    }

    /// Send a fixed departure time.
    pub fn with_departure_time(mut self, departure_time: impl Into<String>) -> Self {
        self.departure_time = Some(departure_time.into());
        self
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            vehicle_type: DEFAULT_VEHICLE_TYPE.to_string(),
            strategy: LocTimeStrategy::PerAction,
            send_loc_times: true,
            departure_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuoteConfig::default();

        assert_eq!(config.vehicle_type, "2AxlesAuto");
        assert_eq!(config.strategy, LocTimeStrategy::PerAction);
        assert!(config.send_loc_times);
        assert_eq!(config.departure_time, None);
    }

    #[test]
    fn custom_config() {
        let config = QuoteConfig::default()
            .with_vehicle_type("5AxlesTruck")
            .with_strategy(LocTimeStrategy::Endpoints)
            .with_loc_times(false)
            .with_departure_time("2021-01-05T09:46:08Z");

        assert_eq!(config.vehicle_type, "5AxlesTruck");
        assert_eq!(config.strategy, LocTimeStrategy::Endpoints);
        assert!(!config.send_loc_times);
        assert_eq!(config.departure_time.as_deref(), Some("2021-01-05T09:46:08Z"));
    }
}
