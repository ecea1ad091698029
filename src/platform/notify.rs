//! Notification port: events the core pushes toward the bridge
//!
//! Fire-and-forget; the core assumes no delivery guarantee and never waits.

use crate::core::constants::LOCATION_UPDATED_EVENT;
use crate::core::types::LocationSample;

/// Events emitted under the `LOCATION_UPDATED` event name.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// A fix was accepted as a significant change; carries the sample that
    /// triggered it.
    SignificantChange { sample: LocationSample },
    /// The platform client reported a failure; the core keeps running.
    ProviderFailure { message: String },
}

impl LocationEvent {
    /// Event name seen by the bridge for every variant.
    pub fn name(&self) -> &'static str {
        LOCATION_UPDATED_EVENT
    }

    /// The `success` flag the bridge payload carries.
    pub fn success(&self) -> bool {
        matches!(self, LocationEvent::SignificantChange { .. })
    }
}

/// Sink the core emits events into.
pub trait NotificationSink {
    fn emit(&mut self, event: LocationEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name_is_stable() {
        let event = LocationEvent::ProviderFailure {
            message: "no fix".to_string(),
        };
        assert_eq!(event.name(), "LOCATION_UPDATED");
    }

    #[test]
    fn test_success_flag() {
        let sample = LocationSample {
            provider: "fused".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            accuracy: 1.0,
            time: 0,
            mock: None,
        };
        assert!(LocationEvent::SignificantChange { sample }.success());
        assert!(!LocationEvent::ProviderFailure {
            message: "x".to_string()
        }
        .success());
    }
}
