//! Simulation configuration loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, ValidationError};
use crate::network::RoadNetwork;
use crate::report::Locale;
use crate::scheduler::{TripScheduler, MIN_CAPACITY};

/// Everything needed to start a simulation cycle.
///
/// Every field is optional in JSON: the network defaults to
/// [`RoadNetwork::default_map`], capacity to 1, locale to Spanish. The
/// network is validated while deserializing, so an invalid graph never
/// makes it into a config.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::SimulationConfig;
/// use fleet_routing::report::Locale;
///
/// let config = SimulationConfig::from_json(r#"{"capacity": 2, "locale": "english"}"#).unwrap();
/// assert_eq!(config.network.len(), 10);
///
/// let mut scheduler = config.scheduler().unwrap();
/// assert_eq!(scheduler.capacity().get(), 2);
/// assert_eq!(scheduler.locale(), Locale::English);
/// scheduler.submit_request("A", "B").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Road network to route over.
    #[serde(default = "RoadNetwork::default_map")]
    pub network: RoadNetwork,
    /// Fleet size, validated when the scheduler is built.
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    /// Language of the display lines.
    #[serde(default)]
    pub locale: Locale,
}

fn default_capacity() -> i64 {
    i64::from(MIN_CAPACITY)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            network: RoadNetwork::default_map(),
            capacity: default_capacity(),
            locale: Locale::default(),
        }
    }
}

impl SimulationConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::Json`] for malformed JSON or an invalid network.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a scheduler over this config's network.
    ///
    /// # Errors
    ///
    /// [`ValidationError::CapacityOutOfRange`] if `capacity` is not in `1..=5`.
    pub fn scheduler(&self) -> Result<TripScheduler<'_>, ValidationError> {
        let mut scheduler = TripScheduler::new(&self.network).with_locale(self.locale);
        scheduler.set_capacity(self.capacity)?;
        Ok(scheduler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SimulationConfig::from_json("{}").expect("valid");
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.capacity, 1);
        assert_eq!(config.locale, Locale::Spanish);
    }

    #[test]
    fn test_custom_network() {
        let config = SimulationConfig::from_json(
            r#"{"network": {"X": {"Y": 7}, "Y": {"X": 7}}, "capacity": 1}"#,
        )
        .expect("valid");
        let mut scheduler = config.scheduler().expect("valid capacity");
        scheduler.submit_request("X", "Y").expect("accepted");
        let results = scheduler.run_simulation().expect("full");
        assert_eq!(results[0].total_distance(), 7);
    }

    #[test]
    fn test_invalid_network_rejected() {
        let err = SimulationConfig::from_json(r#"{"network": {"X": {"Y": 7}}}"#)
            .expect_err("asymmetric");
        assert!(matches!(err, ConfigurationError::Json(_)));
        assert!(err.to_string().contains("X -> Y"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(SimulationConfig::from_json(r#"{"vehicles": 3}"#).is_err());
    }

    #[test]
    fn test_invalid_capacity_rejected() {
        let config = SimulationConfig::from_json(r#"{"capacity": 9}"#).expect("valid json");
        assert!(matches!(
            config.scheduler(),
            Err(ValidationError::CapacityOutOfRange { requested: 9, .. })
        ));
    }
}
