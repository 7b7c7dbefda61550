//! Backend port — the HTTP endpoints the pairing page talks to.
//!
//! | Endpoint | Method | Result |
//! |----------|--------|--------|
//! | `/devices` | GET | [`DeviceDirectory`] |
//! | `/pincode` | GET | plain string, empty when there is no pincode |
//! | `/status` | GET | plain string, empty when there is nothing to report |
//! | `/connect` | POST (form) | plain string, reused as the new status |
//!
//! The returned futures carry no `Send` bound: browser fetch futures are
//! tied to the page's event loop.

use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use btpair_domain::device::DeviceDirectory;
use btpair_domain::error::PairingError;
use btpair_domain::form::ConnectForm;

/// Access to the pairing backend.
pub trait PairingBackend {
    /// Retrieve the directory of pairable devices.
    fn fetch_devices(&self) -> impl Future<Output = Result<DeviceDirectory, PairingError>>;

    /// Retrieve the device registration pincode.
    fn fetch_pincode(&self) -> impl Future<Output = Result<String, PairingError>>;

    /// Retrieve the current connection status.
    fn fetch_status(&self) -> impl Future<Output = Result<String, PairingError>>;

    /// Post the connect form and return the response body.
    fn connect(&self, form: ConnectForm) -> impl Future<Output = Result<String, PairingError>>;
}

impl<T: PairingBackend> PairingBackend for Arc<T> {
    fn fetch_devices(&self) -> impl Future<Output = Result<DeviceDirectory, PairingError>> {
        (**self).fetch_devices()
    }

    fn fetch_pincode(&self) -> impl Future<Output = Result<String, PairingError>> {
        (**self).fetch_pincode()
    }

    fn fetch_status(&self) -> impl Future<Output = Result<String, PairingError>> {
        (**self).fetch_status()
    }

    fn connect(&self, form: ConnectForm) -> impl Future<Output = Result<String, PairingError>> {
        (**self).connect(form)
    }
}

impl<T: PairingBackend> PairingBackend for Rc<T> {
    fn fetch_devices(&self) -> impl Future<Output = Result<DeviceDirectory, PairingError>> {
        (**self).fetch_devices()
    }

    fn fetch_pincode(&self) -> impl Future<Output = Result<String, PairingError>> {
        (**self).fetch_pincode()
    }

    fn fetch_status(&self) -> impl Future<Output = Result<String, PairingError>> {
        (**self).fetch_status()
    }

    fn connect(&self, form: ConnectForm) -> impl Future<Output = Result<String, PairingError>> {
        (**self).connect(form)
    }
}
