//! Connect form — the payload posted to `/connect`.

use url::form_urlencoded;

use crate::device::DeviceKey;

/// Editable text fields of the connect form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Service name or UUID to connect to (e.g. `Audio Sink`).
    Service,
    /// Protocol and port, `proto:port` (e.g. `3:25`).
    Protoport,
}

impl FormField {
    /// Form control name, as parsed by the backend.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Protoport => "protoport",
        }
    }
}

/// Values of the connect form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectForm {
    pub bt_addr: String,
    pub service: String,
    pub protoport: String,
}

impl ConnectForm {
    /// Form control name of the device selector.
    pub const BT_ADDR: &'static str = "bt_addr";

    /// Start a form for the given device with empty optional fields.
    #[must_use]
    pub fn for_device(key: &DeviceKey) -> Self {
        Self {
            bt_addr: key.to_string(),
            ..Self::default()
        }
    }

    /// Update one of the editable fields.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Service => self.service = value,
            FormField::Protoport => self.protoport = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Service => &self.service,
            FormField::Protoport => &self.protoport,
        }
    }

    /// Serialize as `application/x-www-form-urlencoded`.
    ///
    /// Every control is included, hidden sections too, in document order.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(Self::BT_ADDR, &self.bt_addr)
            .append_pair(FormField::Service.name(), &self.service)
            .append_pair(FormField::Protoport.name(), &self.protoport)
            .finish()
    }
}
