//! Geodesic math used by the location core

pub mod distance;

pub use distance::great_circle_distance_m;
