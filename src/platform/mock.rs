//! Mock port implementations for testing and development
//!
//! Each mock shares its state behind an `Rc` so a test can keep a handle
//! after handing the mock to a session, and can register a common call
//! journal to assert cross-port ordering.

use crate::core::types::{AcquisitionRequest, LocationSample};
use crate::platform::notify::{LocationEvent, NotificationSink};
use crate::platform::provider::{LocationProvider, ProviderError, ProviderResult};
use crate::platform::store::LocationStore;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

/// Shared journal of port calls, in invocation order.
pub type CallJournal = Rc<RefCell<Vec<String>>>;

fn journal(journal: &Option<CallJournal>, entry: &str) {
    if let Some(journal) = journal {
        journal.borrow_mut().push(entry.to_string());
    }
}

#[derive(Debug, Default)]
struct ProviderState {
    active: Option<AcquisitionRequest>,
    start_history: Vec<AcquisitionRequest>,
    stop_count: u32,
    simulate_errors: bool,
    error_probability: f32,
}

/// Mock location provider recording start/stop interactions.
#[derive(Clone, Default)]
pub struct MockProvider {
    state: Rc<RefCell<ProviderState>>,
    journal: Option<CallJournal>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: CallJournal) -> Self {
        Self {
            state: Rc::new(RefCell::new(ProviderState::default())),
            journal: Some(journal),
        }
    }

    /// Enable start-failure simulation with the given probability (0.0 to 1.0).
    pub fn simulate_errors(&self, enable: bool, probability: f32) {
        let mut state = self.state.borrow_mut();
        state.simulate_errors = enable;
        state.error_probability = probability.clamp(0.0, 1.0);
    }

    /// Request currently in force, if any.
    pub fn active_request(&self) -> Option<AcquisitionRequest> {
        self.state.borrow().active.clone()
    }

    /// Every request ever issued, oldest first.
    pub fn start_history(&self) -> Vec<AcquisitionRequest> {
        self.state.borrow().start_history.clone()
    }

    pub fn stop_count(&self) -> u32 {
        self.state.borrow().stop_count
    }

    fn should_simulate_error(&self) -> bool {
        let state = self.state.borrow();
        if !state.simulate_errors {
            return false;
        }
        use rand::Rng;
        let mut rng = rand::thread_rng();
        rng.gen::<f32>() < state.error_probability
    }
}

impl LocationProvider for MockProvider {
    fn start(&mut self, request: &AcquisitionRequest) -> ProviderResult<()> {
        if self.should_simulate_error() {
            return Err(ProviderError::Unavailable {
                details: "simulated start failure".to_string(),
            });
        }
        journal(&self.journal, "provider.start");
        let mut state = self.state.borrow_mut();
        state.active = Some(request.clone());
        state.start_history.push(request.clone());
        Ok(())
    }

    fn stop(&mut self) {
        journal(&self.journal, "provider.stop");
        let mut state = self.state.borrow_mut();
        state.active = None;
        state.stop_count += 1;
    }
}

#[derive(Debug, Default)]
struct StoreState {
    buffer_json: Option<String>,
    last_used_json: Option<String>,
    buffer_saves: u32,
    last_used_saves: u32,
}

/// In-memory persistence mock holding raw JSON strings, the way the real
/// platform key/value store does. Seeding garbage exercises the
/// corrupt-data tolerance of consumers.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<StoreState>>,
    journal: Option<CallJournal>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: CallJournal) -> Self {
        Self {
            state: Rc::new(RefCell::new(StoreState::default())),
            journal: Some(journal),
        }
    }

    /// Seed the persisted buffer with well-formed samples.
    pub fn seed_buffer(&self, samples: &[LocationSample]) {
        let json = serde_json::to_string(samples).expect("samples serialize");
        self.state.borrow_mut().buffer_json = Some(json);
    }

    /// Seed the persisted last-used location with a well-formed sample.
    pub fn seed_last_used(&self, sample: &LocationSample) {
        let json = serde_json::to_string(sample).expect("sample serializes");
        self.state.borrow_mut().last_used_json = Some(json);
    }

    /// Seed the raw buffer document, malformed input included.
    pub fn seed_buffer_document(&self, document: &str) {
        self.state.borrow_mut().buffer_json = Some(document.to_string());
    }

    /// Seed the raw last-used document, malformed input included.
    pub fn seed_last_used_document(&self, document: &str) {
        self.state.borrow_mut().last_used_json = Some(document.to_string());
    }

    pub fn buffer_saves(&self) -> u32 {
        self.state.borrow().buffer_saves
    }

    pub fn last_used_saves(&self) -> u32 {
        self.state.borrow().last_used_saves
    }

    /// Last persisted buffer as parsed samples, if well-formed.
    pub fn persisted_buffer(&self) -> Option<Vec<LocationSample>> {
        let state = self.state.borrow();
        state
            .buffer_json
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
    }

    /// Last persisted last-used location, if well-formed.
    pub fn persisted_last_used(&self) -> Option<LocationSample> {
        let state = self.state.borrow();
        state
            .last_used_json
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
    }
}

impl LocationStore for MemoryStore {
    fn load_buffer(&mut self) -> Option<Vec<LocationSample>> {
        let state = self.state.borrow();
        let json = state.buffer_json.as_deref()?;
        match serde_json::from_str(json) {
            Ok(samples) => Some(samples),
            Err(e) => {
                warn!(error = %e, "corrupt persisted buffer, treating as absent");
                None
            }
        }
    }

    fn save_buffer(&mut self, samples: &[LocationSample]) {
        journal(&self.journal, "store.save_buffer");
        let json = serde_json::to_string(samples).expect("samples serialize");
        let mut state = self.state.borrow_mut();
        state.buffer_json = Some(json);
        state.buffer_saves += 1;
    }

    fn load_last_used(&mut self) -> Option<LocationSample> {
        let state = self.state.borrow();
        let json = state.last_used_json.as_deref()?;
        match serde_json::from_str(json) {
            Ok(sample) => Some(sample),
            Err(e) => {
                warn!(error = %e, "corrupt persisted last-used location, treating as absent");
                None
            }
        }
    }

    fn save_last_used(&mut self, sample: &LocationSample) {
        journal(&self.journal, "store.save_last_used");
        let json = serde_json::to_string(sample).expect("sample serializes");
        let mut state = self.state.borrow_mut();
        state.last_used_json = Some(json);
        state.last_used_saves += 1;
    }
}

/// Notification sink capturing every emitted event.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<LocationEvent>>>,
    journal: Option<CallJournal>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: CallJournal) -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
            journal: Some(journal),
        }
    }

    pub fn events(&self) -> Vec<LocationEvent> {
        self.events.borrow().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.borrow().len()
    }
}

impl NotificationSink for RecordingSink {
    fn emit(&mut self, event: LocationEvent) {
        journal(&self.journal, "sink.emit");
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PriorityTier;

    fn request() -> AcquisitionRequest {
        AcquisitionRequest {
            priority: PriorityTier::BalancedPowerAccuracy,
            interval_ms: 10_000,
            min_displacement_m: 20,
        }
    }

    fn sample(tag: u64) -> LocationSample {
        LocationSample {
            provider: "fused".to_string(),
            latitude: 0.0,
            longitude: tag as f64,
            accuracy: 1.0,
            time: tag,
            mock: None,
        }
    }

    #[test]
    fn test_provider_records_requests() {
        let provider = MockProvider::new();
        let mut port: Box<dyn LocationProvider> = Box::new(provider.clone());
        port.start(&request()).unwrap();
        assert_eq!(provider.active_request(), Some(request()));

        port.stop();
        assert_eq!(provider.active_request(), None);
        assert_eq!(provider.stop_count(), 1);
        assert_eq!(provider.start_history().len(), 1);
    }

    #[test]
    fn test_provider_stop_is_idempotent() {
        let provider = MockProvider::new();
        let mut port: Box<dyn LocationProvider> = Box::new(provider.clone());
        port.stop();
        port.stop();
        assert_eq!(provider.stop_count(), 2);
        assert_eq!(provider.active_request(), None);
    }

    #[test]
    fn test_provider_error_simulation() {
        let provider = MockProvider::new();
        provider.simulate_errors(true, 1.0);
        let mut port: Box<dyn LocationProvider> = Box::new(provider.clone());
        assert!(port.start(&request()).is_err());
        assert!(provider.start_history().is_empty());
    }

    #[test]
    fn test_store_round_trip() {
        let store = MemoryStore::new();
        let mut port: Box<dyn LocationStore> = Box::new(store.clone());
        port.save_buffer(&[sample(1), sample(2)]);
        port.save_last_used(&sample(2));
        assert_eq!(port.load_buffer().unwrap().len(), 2);
        assert_eq!(port.load_last_used().unwrap(), sample(2));
        assert_eq!(store.buffer_saves(), 1);
        assert_eq!(store.last_used_saves(), 1);
    }

    #[test]
    fn test_store_corrupt_documents_load_as_absent() {
        let store = MemoryStore::new();
        store.seed_buffer_document("{truncated");
        store.seed_last_used_document("[]");
        let mut port: Box<dyn LocationStore> = Box::new(store);
        assert!(port.load_buffer().is_none());
        assert!(port.load_last_used().is_none());
    }

    #[test]
    fn test_sink_records_events() {
        let sink = RecordingSink::new();
        let mut port: Box<dyn NotificationSink> = Box::new(sink.clone());
        port.emit(LocationEvent::ProviderFailure {
            message: "x".to_string(),
        });
        assert_eq!(sink.event_count(), 1);
    }

    #[test]
    fn test_journal_preserves_cross_port_order() {
        let journal: CallJournal = Rc::new(RefCell::new(Vec::new()));
        let mut provider = MockProvider::with_journal(Rc::clone(&journal));
        let mut store = MemoryStore::with_journal(Rc::clone(&journal));
        let mut sink = RecordingSink::with_journal(Rc::clone(&journal));

        provider.start(&request()).unwrap();
        store.save_buffer(&[sample(1)]);
        sink.emit(LocationEvent::ProviderFailure {
            message: "x".to_string(),
        });

        assert_eq!(
            *journal.borrow(),
            vec!["provider.start", "store.save_buffer", "sink.emit"]
        );
    }
}
