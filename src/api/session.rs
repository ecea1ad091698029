//! Session controller owning the location core's state
//!
//! One `LocationSession` exists per host session and is the sole owner of
//! the buffer, the configuration store and the last-used pointer. The host
//! drives it through discrete, non-overlapping calls: bridge operations,
//! lifecycle signals and fix deliveries all arrive on one logical execution
//! context, so nothing here blocks or locks.

use crate::api::types::{GeoError, GeoResult, NotAvailableReason};
use crate::config::{ConfigStore, LocationConfiguration};
use crate::core::types::{AcquisitionRequest, LocationSample, RunMode};
use crate::platform::notify::{LocationEvent, NotificationSink};
use crate::platform::provider::{LocationProvider, RawFix};
use crate::platform::store::LocationStore;
use crate::power;
use crate::processing::buffer::SampleBuffer;
use crate::processing::change;
use crate::reconcile;
use tracing::{debug, info, warn};

/// Location acquisition and retention session.
pub struct LocationSession {
    provider: Box<dyn LocationProvider>,
    store: Box<dyn LocationStore>,
    sink: Box<dyn NotificationSink>,
    configs: Option<ConfigStore>,
    buffer: Option<SampleBuffer>,
    last_used: Option<LocationSample>,
    run_mode: RunMode,
    active_request: Option<AcquisitionRequest>,
}

impl LocationSession {
    /// Create a session over the host-supplied ports. Nothing is acquired
    /// or restored until `configure` runs.
    pub fn new(
        provider: Box<dyn LocationProvider>,
        store: Box<dyn LocationStore>,
        sink: Box<dyn NotificationSink>,
    ) -> Self {
        Self {
            provider,
            store,
            sink,
            configs: None,
            buffer: None,
            last_used: None,
            run_mode: RunMode::Foreground,
            active_request: None,
        }
    }

    /// Install a configuration, allocate the buffer and reconcile persisted
    /// state. The only path that sets buffer capacity. On validation
    /// failure nothing changes.
    ///
    /// Acquisition does not begin here; the host calls `start` separately.
    pub fn configure(&mut self, configuration: LocationConfiguration) -> GeoResult<()> {
        configuration.validate()?;

        let mut buffer = SampleBuffer::new(configuration.buffer_size);
        let restored = reconcile::restore_session_state(self.store.as_mut());
        if !restored.buffer.is_empty() {
            buffer.replace(restored.buffer);
        }

        self.configs = Some(ConfigStore::new(configuration));
        self.buffer = Some(buffer);
        self.last_used = restored.last_used;
        self.recompute_request();

        if let Some(sample) = restored.owed_notification {
            // pointer durable before any observer hears about it
            self.store.save_last_used(&sample);
            self.sink.emit(LocationEvent::SignificantChange { sample });
        }

        info!(mode = ?self.run_mode, "location session configured");
        Ok(())
    }

    /// Begin acquisition under the parameters in force. A provider that
    /// cannot start is logged and absorbed; the session stays usable.
    pub fn start(&mut self) {
        let Some(request) = self.active_request.clone() else {
            debug!("start before configure, nothing to do");
            return;
        };
        if let Err(e) = self.provider.start(&request) {
            warn!(error = %e, "location acquisition did not start");
        }
    }

    /// Up to `number` most recent samples, newest first. Distinguishes a
    /// session that was never configured from one whose buffer is still
    /// empty.
    pub fn get_last_locations(&self, number: usize) -> GeoResult<Vec<LocationSample>> {
        let buffer = self.buffer.as_ref().ok_or(GeoError::NotAvailable {
            reason: NotAvailableReason::NotConfigured,
        })?;
        if buffer.is_empty() {
            return Err(GeoError::NotAvailable {
                reason: NotAvailableReason::EmptyBuffer,
            });
        }
        Ok(buffer.snapshot(number))
    }

    /// Temporarily replace the active configuration. Buffer capacity is
    /// untouched; parameters are recomputed under the current run mode and
    /// the acquisition request is re-issued.
    pub fn set_temporary_configuration(
        &mut self,
        configuration: LocationConfiguration,
    ) -> GeoResult<()> {
        configuration.validate()?;
        let Some(configs) = self.configs.as_mut() else {
            warn!("temporary configuration before configure, ignored");
            return Ok(());
        };
        configs.set_temporary(configuration);
        self.reset_acquisition();
        Ok(())
    }

    /// Restore the initial configuration and re-issue the acquisition
    /// request. Safe with no override active; repeating it changes nothing.
    pub fn revert_temporary_configuration(&mut self) {
        if let Some(configs) = self.configs.as_mut() {
            configs.revert_temporary();
            self.reset_acquisition();
        }
    }

    /// Entry point for every fix the platform delivers.
    ///
    /// The sample is always retained (evicting as needed); while
    /// backgrounded the buffer is flushed to persistence on every fix; a
    /// significant change advances the last-used pointer, persists it and
    /// emits a notification. Buffer mutation and persistence writes both
    /// happen before the emission, so an observer only ever sees state
    /// that is already durable.
    pub fn ingest_fix(&mut self, fix: RawFix) {
        let sample = LocationSample::from(fix);
        if !sample.in_domain() {
            warn!(provider = %sample.provider, "fix outside coordinate domain, dropped");
            return;
        }
        let Some(buffer) = self.buffer.as_mut() else {
            warn!("fix before configure, dropped");
            return;
        };

        let verdict = change::evaluate(self.last_used.as_ref(), &sample);
        buffer.push(sample.clone());
        let background_flush = match self.run_mode {
            RunMode::Background => Some(buffer.to_vec()),
            RunMode::Foreground => None,
        };
        if let Some(samples) = background_flush {
            self.store.save_buffer(&samples);
        }

        if verdict.significant {
            self.last_used = Some(sample.clone());
            self.store.save_last_used(&sample);
            self.sink.emit(LocationEvent::SignificantChange { sample });
        } else {
            debug!(distance_m = ?verdict.distance_m, "fix retained without notification");
        }
    }

    /// Host came to the foreground: switch profile and re-issue.
    pub fn on_foreground(&mut self) {
        self.run_mode = RunMode::Foreground;
        if self.configs.is_some() {
            self.reset_acquisition();
        }
    }

    /// Host went to the background: flush the buffer, switch profile and
    /// re-issue.
    ///
    /// The flush skips an empty buffer; a permission pop-up can trigger a
    /// spurious pause before any fix arrived, and that must not overwrite
    /// previously persisted samples with nothing.
    pub fn on_background(&mut self) {
        if let Some(buffer) = self.buffer.as_ref() {
            if !buffer.is_empty() {
                let samples = buffer.to_vec();
                self.store.save_buffer(&samples);
            }
        }
        self.run_mode = RunMode::Background;
        if self.configs.is_some() {
            self.reset_acquisition();
        }
    }

    /// Surface a platform client failure to the bridge. The session keeps
    /// running; the next delivered fix is processed normally.
    pub fn on_provider_error(&mut self, message: &str) {
        warn!(message, "location provider reported a failure");
        self.sink.emit(LocationEvent::ProviderFailure {
            message: message.to_string(),
        });
    }

    /// Stop acquisition at host teardown. Idempotent.
    pub fn shutdown(&mut self) {
        self.provider.stop();
    }

    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Acquisition parameters currently in force, once configured.
    pub fn active_request(&self) -> Option<&AcquisitionRequest> {
        self.active_request.as_ref()
    }

    pub fn current_configuration(&self) -> Option<&LocationConfiguration> {
        self.configs.as_ref().map(|c| c.current())
    }

    pub fn last_used_location(&self) -> Option<&LocationSample> {
        self.last_used.as_ref()
    }

    /// Recompute the request descriptor for the current mode and
    /// configuration. Descriptors are replaced wholesale, never edited.
    fn recompute_request(&mut self) {
        if let Some(configs) = self.configs.as_ref() {
            self.active_request = Some(power::acquisition_request(self.run_mode, configs.current()));
        }
    }

    /// Stop the in-flight request, recompute parameters, issue a new
    /// request. Runs on every transition and configuration change.
    fn reset_acquisition(&mut self) {
        self.provider.stop();
        self.recompute_request();
        self.start();
    }
}
