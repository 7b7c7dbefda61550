//! Page controller — drives the pairing page from load to submission.
//!
//! On [`load`](PageController::load) the device, pincode and status fetches
//! are issued together and applied to the page in whatever order they
//! complete. The device fetch is the only one with a follow-up: populating
//! the selector and deriving the initial field visibility happen in the same
//! state transition, so no view ever shows options without it.
//!
//! Failures never change the page. They are reported back to the caller and
//! logged, and the affected region keeps its pre-fetch state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use btpair_domain::device::DeviceKey;
use btpair_domain::error::PairingError;
use btpair_domain::form::FormField;
use btpair_domain::page::{PageEvent, PageState};
use btpair_domain::view::PageView;

use crate::ports::{PairingBackend, PageRenderer};

/// Outcome of each page-load fetch.
#[derive(Debug)]
pub struct LoadReport {
    /// Number of devices listed, on success.
    pub devices: Result<usize, PairingError>,
    pub pincode: Result<(), PairingError>,
    pub status: Result<(), PairingError>,
}

impl LoadReport {
    /// Whether all three fetches succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.devices.is_ok() && self.pincode.is_ok() && self.status.is_ok()
    }
}

/// Outcome of a submit action.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The form was not submittable (pre-submit region hidden or nothing selected).
    Skipped,
    /// The backend answered and the page moved to its post-submit stage.
    Completed,
    /// The request failed; the submission stays pending.
    Failed(PairingError),
}

/// Use-case driving a single pairing page.
pub struct PageController<B, R> {
    backend: B,
    renderer: R,
    state: Mutex<PageState>,
}

impl<B: PairingBackend, R: PageRenderer> PageController<B, R> {
    /// Create a controller for a fresh page.
    pub fn new(backend: B, renderer: R) -> Self {
        Self {
            backend,
            renderer,
            state: Mutex::new(PageState::new()),
        }
    }

    /// Snapshot of the current page state.
    #[must_use]
    pub fn state(&self) -> PageState {
        self.lock().clone()
    }

    /// Current view of the page.
    #[must_use]
    pub fn view(&self) -> PageView {
        self.lock().view()
    }

    /// Page-ready: render the initial page, then fetch devices, pincode and
    /// status concurrently.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> LoadReport {
        self.renderer.render(&self.view());

        let (devices, pincode, status) =
            tokio::join!(self.load_devices(), self.load_pincode(), self.load_status());

        LoadReport {
            devices,
            pincode,
            status,
        }
    }

    async fn load_devices(&self) -> Result<usize, PairingError> {
        match self.backend.fetch_devices().await {
            Ok(directory) => {
                let count = directory.len();
                if count == 0 {
                    tracing::info!("backend reported no pairable devices");
                } else {
                    tracing::info!(count, "device directory loaded");
                }
                self.dispatch(PageEvent::DevicesLoaded(directory));
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, "device directory fetch failed");
                Err(err)
            }
        }
    }

    async fn load_pincode(&self) -> Result<(), PairingError> {
        let outcome = self.backend.fetch_pincode().await;
        self.reflect("pincode", outcome, PageEvent::PincodeLoaded)
    }

    async fn load_status(&self) -> Result<(), PairingError> {
        let outcome = self.backend.fetch_status().await;
        self.reflect("status", outcome, PageEvent::StatusLoaded)
    }

    fn reflect(
        &self,
        what: &'static str,
        outcome: Result<String, PairingError>,
        event: fn(String) -> PageEvent,
    ) -> Result<(), PairingError> {
        match outcome {
            Ok(value) => {
                tracing::debug!(what, empty = value.is_empty(), "value fetched");
                self.dispatch(event(value));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(what, error = %err, "fetch failed");
                Err(err)
            }
        }
    }

    /// Selection change on the device selector.
    ///
    /// Returns `true` when the selection actually changed.
    #[tracing::instrument(skip(self, key), fields(device = %key))]
    pub fn select_device(&self, key: DeviceKey) -> bool {
        let changed = self.dispatch(PageEvent::DeviceSelected(key));
        if !changed {
            tracing::debug!("selection unchanged");
        }
        changed
    }

    /// Input into one of the optional form fields.
    pub fn edit_field(&self, field: FormField, value: impl Into<String>) -> bool {
        self.dispatch(PageEvent::FieldEdited {
            field,
            value: value.into(),
        })
    }

    /// Submit the connect form.
    ///
    /// Posts the serialized form once. On any response the page moves to its
    /// post-submit stage and the response is reflected as the new status.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let form = {
            let mut state = self.lock();
            if !state.can_submit() {
                tracing::debug!(stage = %state.submission(), "form not submittable");
                return SubmitOutcome::Skipped;
            }
            state.apply(PageEvent::SubmitRequested);
            let Some(form) = state.connect_form() else {
                return SubmitOutcome::Skipped;
            };
            let view = state.view();
            drop(state);
            self.renderer.render(&view);
            form
        };

        tracing::info!(device = %form.bt_addr, "submitting connect form");
        match self.backend.connect(form).await {
            Ok(body) => {
                self.dispatch(PageEvent::ConnectResponded(body));
                SubmitOutcome::Completed
            }
            Err(err) => {
                tracing::warn!(error = %err, "connect request failed");
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Apply an event and re-render when it changed the page.
    fn dispatch(&self, event: PageEvent) -> bool {
        let view = {
            let mut state = self.lock();
            if !state.apply(event) {
                return false;
            }
            state.view()
        };
        self.renderer.render(&view);
        true
    }

    // Critical sections never await, so a poisoned lock still holds a
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
