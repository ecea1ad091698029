//! Bridge-facing API of the location core
//!
//! The session controller owns all mutable state and is driven by the host
//! through discrete, non-overlapping calls.

pub mod session;
pub mod types;

pub use session::LocationSession;
pub use types::{GeoError, GeoResult, NotAvailableReason};
