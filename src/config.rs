//! Location configuration and the initial/current configuration store
//!
//! The bridge hands configuration over as JSON; field names and tier
//! spellings match what the scripting side has always sent.

use crate::core::types::PriorityTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accuracy tier requested by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccuracyTier {
    PowerSaving,
    BalancedPower,
    BestAccuracy,
    NavigationAccuracy,
}

impl AccuracyTier {
    /// Provider priority class for this tier.
    ///
    /// BestAccuracy and NavigationAccuracy intentionally collapse onto the
    /// same priority class; the platform client exposes nothing finer.
    /// Flagged for product clarification before splitting them.
    pub fn priority(self) -> PriorityTier {
        match self {
            AccuracyTier::PowerSaving => PriorityTier::LowPower,
            AccuracyTier::BalancedPower => PriorityTier::BalancedPowerAccuracy,
            AccuracyTier::BestAccuracy => PriorityTier::HighAccuracy,
            AccuracyTier::NavigationAccuracy => PriorityTier::HighAccuracy,
        }
    }
}

/// Acquisition configuration installed by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConfiguration {
    /// Requested accuracy tier
    #[serde(rename = "desiredAccuracy")]
    pub desired_accuracy: AccuracyTier,
    /// Minimum displacement between provider fixes (meters)
    #[serde(rename = "distanceFilter")]
    pub distance_filter_m: u32,
    /// Polling interval (milliseconds)
    #[serde(rename = "updateInterval")]
    pub update_interval_ms: u32,
    /// Capacity of the sample buffer
    #[serde(rename = "bufferSize")]
    pub buffer_size: usize,
}

impl LocationConfiguration {
    /// Validate domain constraints. Rejection is wholesale: a configuration
    /// that fails here is never partially applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::new("bufferSize", self.buffer_size.to_string()));
        }
        if self.update_interval_ms == 0 {
            return Err(ConfigError::new(
                "updateInterval",
                self.update_interval_ms.to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration document from the bridge.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let configuration: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::new("configuration", e.to_string()))?;
        configuration.validate()?;
        Ok(configuration)
    }
}

/// Invalid configuration: the offending parameter and the value it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub parameter: String,
    pub value: String,
}

impl ConfigError {
    fn new(parameter: &str, value: String) -> Self {
        Self {
            parameter: parameter.to_string(),
            value,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {} = {}", self.parameter, self.value)
    }
}

impl std::error::Error for ConfigError {}

/// Holds the durable initial configuration and the currently active one.
///
/// The initial configuration is set once per session and defines the buffer
/// capacity for the session's lifetime; the current one may be temporarily
/// overridden and reverted.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    initial: LocationConfiguration,
    current: LocationConfiguration,
}

impl ConfigStore {
    /// Install a validated configuration as both initial and current.
    pub fn new(configuration: LocationConfiguration) -> Self {
        Self {
            initial: configuration.clone(),
            current: configuration,
        }
    }

    /// Replace only the current configuration. Buffer capacity is untouched;
    /// it follows the initial configuration alone.
    pub fn set_temporary(&mut self, configuration: LocationConfiguration) {
        self.current = configuration;
    }

    /// Restore the initial configuration. Safe to call with no override
    /// active; calling it twice is the same as calling it once.
    pub fn revert_temporary(&mut self) {
        self.current = self.initial.clone();
    }

    pub fn initial(&self) -> &LocationConfiguration {
        &self.initial
    }

    pub fn current(&self) -> &LocationConfiguration {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration() -> LocationConfiguration {
        LocationConfiguration {
            desired_accuracy: AccuracyTier::BalancedPower,
            distance_filter_m: 20,
            update_interval_ms: 10_000,
            buffer_size: 10,
        }
    }

    #[test]
    fn test_valid_configuration_passes() {
        assert!(configuration().validate().is_ok());
    }

    #[test]
    fn test_zero_buffer_size_rejected() {
        let mut cfg = configuration();
        cfg.buffer_size = 0;
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.parameter, "bufferSize");
    }

    #[test]
    fn test_zero_update_interval_rejected() {
        let mut cfg = configuration();
        cfg.update_interval_ms = 0;
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.parameter, "updateInterval");
    }

    #[test]
    fn test_zero_distance_filter_allowed() {
        let mut cfg = configuration();
        cfg.distance_filter_m = 0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_priority_mapping_is_exhaustive_and_collapses_top_tiers() {
        assert_eq!(AccuracyTier::PowerSaving.priority(), PriorityTier::LowPower);
        assert_eq!(
            AccuracyTier::BalancedPower.priority(),
            PriorityTier::BalancedPowerAccuracy
        );
        assert_eq!(AccuracyTier::BestAccuracy.priority(), PriorityTier::HighAccuracy);
        assert_eq!(
            AccuracyTier::NavigationAccuracy.priority(),
            PriorityTier::HighAccuracy
        );
    }

    #[test]
    fn test_from_json_with_bridge_field_names() {
        let json = r#"{
            "desiredAccuracy": "BestAccuracy",
            "distanceFilter": 20,
            "updateInterval": 10000,
            "bufferSize": 3
        }"#;
        let cfg = LocationConfiguration::from_json(json).unwrap();
        assert_eq!(cfg.desired_accuracy, AccuracyTier::BestAccuracy);
        assert_eq!(cfg.buffer_size, 3);
    }

    #[test]
    fn test_from_json_unknown_tier_rejected() {
        let json = r#"{
            "desiredAccuracy": "Turbo",
            "distanceFilter": 20,
            "updateInterval": 10000,
            "bufferSize": 3
        }"#;
        assert!(LocationConfiguration::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_missing_field_rejected() {
        let json = r#"{"desiredAccuracy": "PowerSaving", "distanceFilter": 20}"#;
        assert!(LocationConfiguration::from_json(json).is_err());
    }

    #[test]
    fn test_store_set_and_revert_temporary() {
        let mut store = ConfigStore::new(configuration());
        let mut temporary = configuration();
        temporary.update_interval_ms = 1_000;
        temporary.desired_accuracy = AccuracyTier::NavigationAccuracy;

        store.set_temporary(temporary.clone());
        assert_eq!(store.current(), &temporary);
        assert_eq!(store.initial(), &configuration());

        store.revert_temporary();
        assert_eq!(store.current(), &configuration());
    }

    #[test]
    fn test_revert_is_idempotent() {
        let mut store = ConfigStore::new(configuration());
        let mut temporary = configuration();
        temporary.distance_filter_m = 5;
        store.set_temporary(temporary);

        store.revert_temporary();
        let after_once = store.current().clone();
        store.revert_temporary();
        assert_eq!(store.current(), &after_once);
    }
}
