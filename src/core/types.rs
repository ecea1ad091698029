//! Core data types for the location acquisition core

use serde::{Deserialize, Serialize};

/// A single positional fix retained by the core.
///
/// Immutable once admitted: the ingestion path is the only producer and
/// buffer eviction is the only way one goes away. Serialized field names
/// match the JSON the persistence layer has always stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    /// Identifier of the platform provider that produced the fix
    pub provider: String,
    /// Latitude in degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180]
    pub longitude: f64,
    /// Horizontal accuracy radius in meters, >= 0
    pub accuracy: f32,
    /// Capture timestamp, epoch milliseconds
    pub time: u64,
    /// Whether the fix came from a mock provider; absent for provider
    /// generations that do not report it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
}

impl LocationSample {
    /// Check the coordinate and accuracy domain.
    pub fn in_domain(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
            && self.accuracy >= 0.0
    }
}

/// Provider priority class requested from the platform location client.
///
/// Deliberately narrower than the accuracy tiers the bridge accepts: two
/// tiers collapse onto `HighAccuracy` (see `AccuracyTier::priority`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityTier {
    /// Coarse, cheapest fixes
    LowPower,
    /// Block-level accuracy with moderate power draw
    BalancedPowerAccuracy,
    /// Most precise fixes the platform will produce
    HighAccuracy,
}

/// Foreground/background state of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Foreground,
    Background,
}

/// Acquisition parameters sent to the provider port.
///
/// Replaced wholesale on every recompute; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionRequest {
    /// Provider priority class
    pub priority: PriorityTier,
    /// Polling interval (milliseconds)
    pub interval_ms: u32,
    /// Minimum displacement between fixes (meters)
    pub min_displacement_m: u32,
}
