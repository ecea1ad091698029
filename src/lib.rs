//! Location acquisition and retention core
//!
//! Buffers positional fixes from a platform location provider, detects
//! significant position changes, adapts acquisition parameters to the host
//! app's foreground/background state and reconciles persisted state across
//! process restarts. Platform collaborators (provider client, persistence,
//! notifications) are consumed as ports.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod config;
pub mod power;
pub mod reconcile;
pub mod platform;
pub mod api;

// Re-export commonly used types
pub use crate::core::{AcquisitionRequest, LocationSample, PriorityTier, RunMode};
pub use crate::core::{LOCATION_UPDATED_EVENT, SIGNIFICANT_CHANGE_THRESHOLD_M};
pub use crate::config::{AccuracyTier, ConfigError, ConfigStore, LocationConfiguration};
pub use crate::processing::{ChangeVerdict, SampleBuffer};
pub use crate::algorithms::great_circle_distance_m;
pub use crate::platform::{
    FileStore, LocationEvent, LocationProvider, LocationStore, NotificationSink, ProviderError,
    RawFix,
};
pub use crate::api::{GeoError, GeoResult, LocationSession, NotAvailableReason};
