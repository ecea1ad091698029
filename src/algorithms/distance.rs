//! Great-circle distance between two coordinates
//!
//! Haversine over a spherical Earth. The formula stays well-conditioned for
//! closely spaced points, which is where the significance threshold lives;
//! the spherical-earth error (< 0.5%) is far below the 100 m policy scale.

use crate::core::constants::EARTH_RADIUS_M;

/// Distance in meters between two (latitude, longitude) pairs in degrees.
pub fn great_circle_distance_m(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let phi_a = lat_a.to_radians();
    let phi_b = lat_b.to_radians();
    let d_phi = (lat_b - lat_a).to_radians();
    let d_lambda = (lon_b - lon_a).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_for_identical_points() {
        assert_eq!(great_circle_distance_m(48.8566, 2.3522, 48.8566, 2.3522), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let d_ab = great_circle_distance_m(48.8566, 2.3522, 51.5074, -0.1278);
        let d_ba = great_circle_distance_m(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((d_ab - d_ba).abs() < 1e-6);
    }

    #[test]
    fn test_meter_scale_accuracy_at_equator() {
        // 0.001 degrees of latitude is ~111.2 m on the chosen sphere
        let d = great_circle_distance_m(0.0, 0.0, 0.001, 0.0);
        assert!((d - 111.2).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn test_longitude_step_shrinks_with_latitude() {
        let at_equator = great_circle_distance_m(0.0, 0.0, 0.0, 0.001);
        let at_60_north = great_circle_distance_m(60.0, 0.0, 60.0, 0.001);
        // cos(60 deg) = 0.5
        assert!((at_60_north / at_equator - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_known_city_pair() {
        // Paris -> London, ~343.5 km
        let d = great_circle_distance_m(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((d - 343_500.0).abs() < 1_500.0, "got {}", d);
    }

    #[test]
    fn test_result_is_non_negative() {
        let d = great_circle_distance_m(-33.86, 151.21, -33.86, 151.21 + 1e-9);
        assert!(d >= 0.0);
    }
}
