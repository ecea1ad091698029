//! Platform ports consumed by the location core
//!
//! The core never talks to the mobile platform directly. Acquisition,
//! persistence and notification go through the traits here; the host app
//! supplies real implementations and tests use the mocks.

pub mod provider;
pub mod store;
pub mod notify;
pub mod mock;

pub use provider::{LocationProvider, ProviderError, ProviderResult, RawFix};
pub use store::{FileStore, LocationStore};
pub use notify::{LocationEvent, NotificationSink};
pub use mock::{CallJournal, MemoryStore, MockProvider, RecordingSink};
