//! Significant-change detection
//!
//! Pure verdict computation: the caller applies the outcome (advancing the
//! last-used pointer, persisting, notifying).

use crate::algorithms::distance::great_circle_distance_m;
use crate::core::constants::SIGNIFICANT_CHANGE_THRESHOLD_M;
use crate::core::types::LocationSample;

/// Outcome of comparing an incoming sample against the last used one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeVerdict {
    /// Whether the incoming sample counts as a significant change
    pub significant: bool,
    /// Great-circle distance to the last used sample, absent when the
    /// pointer has never been set
    pub distance_m: Option<f64>,
}

/// Evaluate an incoming sample against the current last-used sample.
///
/// An absent last-used sample bootstraps the pointer: the incoming sample is
/// unconditionally significant. Otherwise the sample is significant iff its
/// great-circle distance from the last used one meets the fixed threshold.
pub fn evaluate(last_used: Option<&LocationSample>, candidate: &LocationSample) -> ChangeVerdict {
    match last_used {
        None => ChangeVerdict {
            significant: true,
            distance_m: None,
        },
        Some(reference) => {
            let distance_m = great_circle_distance_m(
                reference.latitude,
                reference.longitude,
                candidate.latitude,
                candidate.longitude,
            );
            ChangeVerdict {
                significant: distance_m >= SIGNIFICANT_CHANGE_THRESHOLD_M,
                distance_m: Some(distance_m),
            }
        }
    }
}
