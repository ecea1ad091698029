//! Startup reconciliation of persisted session state
//!
//! Runs once per session, after configuration has fixed the buffer capacity
//! and strictly before any live fix is ingested. Repairs the case where the
//! process died after buffering a fix but before the last-used pointer was
//! advanced: the owed notification is detected here and replayed by the
//! session.

use crate::algorithms::distance::great_circle_distance_m;
use crate::core::constants::SIGNIFICANT_CHANGE_THRESHOLD_M;
use crate::core::types::LocationSample;
use crate::platform::store::LocationStore;
use tracing::debug;

/// What the persisted state resolved to.
#[derive(Debug, Clone, Default)]
pub struct RestoredState {
    /// Restored buffer contents, oldest first; empty when nothing usable
    /// was persisted
    pub buffer: Vec<LocationSample>,
    /// Last-used pointer to install, already advanced when a notification
    /// is owed
    pub last_used: Option<LocationSample>,
    /// Sample whose promotion was interrupted last session; the caller
    /// persists the new pointer and emits one notification for it
    pub owed_notification: Option<LocationSample>,
}

/// Load and reconcile persisted state. Absent or corrupt data degrades to
/// empty; this never fails.
///
/// A persisted buffer without a persisted last-used pointer restores the
/// samples but fires nothing: bootstrapping the pointer is the first live
/// fix's job.
pub fn restore_session_state(store: &mut dyn LocationStore) -> RestoredState {
    let buffer = store.load_buffer().unwrap_or_default();
    let last_used = store.load_last_used();

    let owed = match (last_used.as_ref(), buffer.last()) {
        (Some(reference), Some(newest)) => {
            let distance_m = great_circle_distance_m(
                reference.latitude,
                reference.longitude,
                newest.latitude,
                newest.longitude,
            );
            if distance_m >= SIGNIFICANT_CHANGE_THRESHOLD_M {
                debug!(
                    distance_m,
                    "restored buffer moved past the last-used location, notification owed"
                );
                Some(newest.clone())
            } else {
                None
            }
        }
        _ => None,
    };

    match owed {
        Some(promoted) => RestoredState {
            buffer,
            last_used: Some(promoted.clone()),
            owed_notification: Some(promoted),
        },
        None => RestoredState {
            buffer,
            last_used,
            owed_notification: None,
        },
    }
}
