//! Power-profile selection for location acquisition
//!
//! Two-state machine driven by host lifecycle signals. Foreground follows
//! the active configuration; background forces a fixed power-saving profile
//! no matter what the configuration asks for. The session applies the
//! stop/recompute/re-issue cycle on every transition.

use crate::config::LocationConfiguration;
use crate::core::constants::{BACKGROUND_MIN_DISPLACEMENT_M, BACKGROUND_UPDATE_INTERVAL_MS};
use crate::core::types::{AcquisitionRequest, PriorityTier, RunMode};

/// Compute the acquisition request in force for a run mode and the active
/// configuration. The result is always a fresh descriptor; requests are
/// replaced wholesale, never edited in place.
pub fn acquisition_request(
    mode: RunMode,
    configuration: &LocationConfiguration,
) -> AcquisitionRequest {
    match mode {
        RunMode::Foreground => AcquisitionRequest {
            priority: configuration.desired_accuracy.priority(),
            interval_ms: configuration.update_interval_ms,
            min_displacement_m: configuration.distance_filter_m,
        },
        RunMode::Background => AcquisitionRequest {
            priority: PriorityTier::LowPower,
            interval_ms: BACKGROUND_UPDATE_INTERVAL_MS,
            min_displacement_m: BACKGROUND_MIN_DISPLACEMENT_M,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccuracyTier;

    fn configuration() -> LocationConfiguration {
        LocationConfiguration {
            desired_accuracy: AccuracyTier::BalancedPower,
            distance_filter_m: 20,
            update_interval_ms: 10_000,
            buffer_size: 10,
        }
    }

    #[test]
    fn test_foreground_follows_configuration() {
        let request = acquisition_request(RunMode::Foreground, &configuration());
        assert_eq!(request.priority, PriorityTier::BalancedPowerAccuracy);
        assert_eq!(request.interval_ms, 10_000);
        assert_eq!(request.min_displacement_m, 20);
    }

    #[test]
    fn test_background_overrides_configuration() {
        // an aggressive configuration must not leak into background
        let mut cfg = configuration();
        cfg.desired_accuracy = AccuracyTier::NavigationAccuracy;
        cfg.update_interval_ms = 1_000;
        cfg.distance_filter_m = 1;

        let request = acquisition_request(RunMode::Background, &cfg);
        assert_eq!(request.priority, PriorityTier::LowPower);
        assert_eq!(request.interval_ms, 60_000);
        assert_eq!(request.min_displacement_m, 500);
    }

    #[test]
    fn test_foreground_tier_mapping() {
        let mut cfg = configuration();
        cfg.desired_accuracy = AccuracyTier::PowerSaving;
        assert_eq!(
            acquisition_request(RunMode::Foreground, &cfg).priority,
            PriorityTier::LowPower
        );

        cfg.desired_accuracy = AccuracyTier::BestAccuracy;
        assert_eq!(
            acquisition_request(RunMode::Foreground, &cfg).priority,
            PriorityTier::HighAccuracy
        );
    }

    #[test]
    fn test_recompute_yields_equal_descriptor_for_same_inputs() {
        let cfg = configuration();
        assert_eq!(
            acquisition_request(RunMode::Foreground, &cfg),
            acquisition_request(RunMode::Foreground, &cfg)
        );
    }
}
