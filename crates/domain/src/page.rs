//! Page state — the whole interaction state of the pairing page.
//!
//! Every change goes through [`PageState::apply`], a reducer over
//! [`PageEvent`]s. Visibility of the form sections and page regions is
//! never stored; it is derived on read (see [`crate::view`]).

use crate::device::{DeviceDirectory, DeviceEntry, DeviceKey};
use crate::form::{ConnectForm, FormField};
use crate::submission::SubmissionLifecycle;
use crate::view::PageView;
use crate::visibility::FieldVisibility;

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The `/devices` fetch completed.
    DevicesLoaded(DeviceDirectory),
    /// The `/pincode` fetch completed with this body.
    PincodeLoaded(String),
    /// The `/status` fetch completed with this body.
    StatusLoaded(String),
    /// The user picked a device in the selector.
    DeviceSelected(DeviceKey),
    /// The user typed into an optional form field.
    FieldEdited { field: FormField, value: String },
    /// The user submitted the connect form.
    SubmitRequested,
    /// The `/connect` request completed with this body.
    ConnectResponded(String),
}

/// Progress of the device directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DirectoryState {
    /// Not loaded yet, or the fetch failed.
    #[default]
    Pending,
    /// The backend reported no pairable devices.
    Empty,
    Loaded(DeviceDirectory),
}

/// Explicit state of the pairing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    directory: DirectoryState,
    selection: Option<DeviceKey>,
    service: String,
    protoport: String,
    submission: SubmissionLifecycle,
    status: Option<String>,
    pincode: Option<String>,
    registration_row_hidden: bool,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event. Returns `true` when the state changed.
    pub fn apply(&mut self, event: PageEvent) -> bool {
        match event {
            PageEvent::DevicesLoaded(directory) => self.load_directory(directory),
            PageEvent::PincodeLoaded(value) => {
                reflect(value, &mut self.pincode, &mut self.registration_row_hidden)
            }
            PageEvent::StatusLoaded(value) => {
                reflect(value, &mut self.status, &mut self.registration_row_hidden)
            }
            PageEvent::DeviceSelected(key) => self.select(key),
            PageEvent::FieldEdited { field, value } => {
                let slot = match field {
                    FormField::Service => &mut self.service,
                    FormField::Protoport => &mut self.protoport,
                };
                if *slot == value {
                    return false;
                }
                *slot = value;
                true
            }
            PageEvent::SubmitRequested => {
                if !self.can_submit() {
                    return false;
                }
                let next = self.submission.submit();
                let changed = next != self.submission;
                self.submission = next;
                changed
            }
            PageEvent::ConnectResponded(value) => {
                if self.submission == SubmissionLifecycle::NotSubmitted {
                    return false;
                }
                self.submission = self.submission.respond();
                reflect(value, &mut self.status, &mut self.registration_row_hidden);
                true
            }
        }
    }

    // The directory is materialised once per page.
    fn load_directory(&mut self, directory: DeviceDirectory) -> bool {
        if self.directory != DirectoryState::Pending {
            return false;
        }
        if directory.is_empty() {
            self.directory = DirectoryState::Empty;
            return true;
        }
        self.selection = directory.first().map(|entry| entry.key.clone());
        self.directory = DirectoryState::Loaded(directory);
        true
    }

    fn select(&mut self, key: DeviceKey) -> bool {
        let known = self.directory().is_some_and(|dir| dir.contains(&key));
        if !known || self.selection.as_ref() == Some(&key) {
            return false;
        }
        self.selection = Some(key);
        true
    }

    #[must_use]
    pub fn directory_state(&self) -> &DirectoryState {
        &self.directory
    }

    /// The loaded directory, if it has any devices.
    #[must_use]
    pub fn directory(&self) -> Option<&DeviceDirectory> {
        match &self.directory {
            DirectoryState::Loaded(directory) => Some(directory),
            DirectoryState::Pending | DirectoryState::Empty => None,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<&DeviceKey> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&DeviceEntry> {
        let key = self.selection.as_ref()?;
        self.directory()?.get(key)
    }

    /// Visibility of the optional form sections for the current selection.
    #[must_use]
    pub fn field_visibility(&self) -> FieldVisibility {
        FieldVisibility::for_security(
            self.selected_entry()
                .and_then(|entry| entry.security.as_ref()),
        )
    }

    #[must_use]
    pub fn submission(&self) -> SubmissionLifecycle {
        self.submission
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn pincode(&self) -> Option<&str> {
        self.pincode.as_deref()
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Service => &self.service,
            FormField::Protoport => &self.protoport,
        }
    }

    #[must_use]
    pub fn no_devices(&self) -> bool {
        self.directory == DirectoryState::Empty
    }

    #[must_use]
    pub fn before_submit_visible(&self) -> bool {
        !self.no_devices() && !self.submission.is_complete()
    }

    #[must_use]
    pub fn registration_row_visible(&self) -> bool {
        !self.registration_row_hidden
    }

    /// Whether a submit action would be accepted.
    ///
    /// Hiding the pre-submit region is the only guard against resubmission.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.before_submit_visible() && self.selection.is_some()
    }

    /// Current values of the connect form, if a device is selected.
    #[must_use]
    pub fn connect_form(&self) -> Option<ConnectForm> {
        let mut form = ConnectForm::for_device(self.selection.as_ref()?);
        form.set(FormField::Service, self.service.as_str());
        form.set(FormField::Protoport, self.protoport.as_str());
        Some(form)
    }

    /// Project the state onto the page's named regions.
    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::of(self)
    }
}

/// Write a non-empty backend value into its display field, or hide the
/// registration row when the backend had nothing to report.
fn reflect(value: String, field: &mut Option<String>, registration_row_hidden: &mut bool) -> bool {
    if value.is_empty() {
        let changed = !*registration_row_hidden;
        *registration_row_hidden = true;
        return changed;
    }
    let changed = field.as_deref() != Some(value.as_str());
    *field = Some(value);
    changed
}
