//! Domain constants for the location core

/// Mean Earth radius used for great-circle distance (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// Distance at which a fix counts as a significant change (meters).
/// Notification policy only; the configurable distance filter governs
/// provider sampling, not this threshold.
pub const SIGNIFICANT_CHANGE_THRESHOLD_M: f64 = 100.0;

/// Polling interval forced while the app is backgrounded (milliseconds)
pub const BACKGROUND_UPDATE_INTERVAL_MS: u32 = 60_000;

/// Minimum displacement forced while the app is backgrounded (meters)
pub const BACKGROUND_MIN_DISPLACEMENT_M: u32 = 500;

/// Event name under which location notifications reach the bridge
pub const LOCATION_UPDATED_EVENT: &str = "LOCATION_UPDATED";
