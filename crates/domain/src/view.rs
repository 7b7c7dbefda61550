//! Page view — the state projected onto the page's named regions.
//!
//! This is the contract with the markup: every region is addressed by the
//! selector the page uses for it, and a renderer only has to show, hide or
//! fill what the view says.

use std::fmt;

use crate::page::PageState;
use crate::submission::SubmissionLifecycle;
use crate::visibility::FieldVisibility;

/// Element id of the device selector.
pub const SELECT_ID: &str = "bt_addr-select";
/// Element id of the connect form.
pub const FORM_ID: &str = "connect-form";
/// Element id of the status field.
pub const STATUS_ID: &str = "status";
/// Element id of the pincode field.
pub const PINCODE_ID: &str = "pincode";

/// A region of the page whose visibility the controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Everything shown before submission (selector, form, registration).
    BeforeSubmit,
    /// Confirmation shown once the connect request answered.
    SubmitMessage,
    /// Shown when the backend reports no pairable devices.
    NoDevicesMessage,
    /// Pincode and status display.
    RegistrationRow,
    ServiceGroup,
    ProtoportGroup,
}

impl Region {
    pub const ALL: [Self; 6] = [
        Self::BeforeSubmit,
        Self::SubmitMessage,
        Self::NoDevicesMessage,
        Self::RegistrationRow,
        Self::ServiceGroup,
        Self::ProtoportGroup,
    ];

    /// Markup name of the region.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BeforeSubmit => "before-submit",
            Self::SubmitMessage => "submit-message",
            Self::NoDevicesMessage => "no-devices-message",
            Self::RegistrationRow => "reg-row",
            Self::ServiceGroup => "service-group",
            Self::ProtoportGroup => "protoport-group",
        }
    }

    /// CSS selector of the region. Grouped regions are classes.
    #[must_use]
    pub fn selector(self) -> String {
        match self {
            Self::BeforeSubmit | Self::RegistrationRow => format!(".{}", self.name()),
            _ => format!("#{}", self.name()),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One `<option>` of the device selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Device key, submitted as `bt_addr`.
    pub value: String,
    /// Display name.
    pub label: String,
}

/// Everything a renderer needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub before_submit: bool,
    pub submit_message: bool,
    pub no_devices_message: bool,
    pub registration_row: bool,
    pub fields: FieldVisibility,
    pub options: Vec<SelectOption>,
    pub selected: Option<String>,
    pub status: Option<String>,
    pub pincode: Option<String>,
    pub submission: SubmissionLifecycle,
}

impl PageView {
    #[must_use]
    pub fn of(state: &PageState) -> Self {
        let options = state
            .directory()
            .map(|directory| {
                directory
                    .iter()
                    .map(|entry| SelectOption {
                        value: entry.key.to_string(),
                        label: entry.name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            before_submit: state.before_submit_visible(),
            submit_message: state.submission().is_complete(),
            no_devices_message: state.no_devices(),
            registration_row: state.registration_row_visible(),
            fields: state.field_visibility(),
            options,
            selected: state.selection().map(ToString::to_string),
            status: state.status().map(str::to_string),
            pincode: state.pincode().map(str::to_string),
            submission: state.submission(),
        }
    }

    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::BeforeSubmit => self.before_submit,
            Region::SubmitMessage => self.submit_message,
            Region::NoDevicesMessage => self.no_devices_message,
            Region::RegistrationRow => self.registration_row,
            Region::ServiceGroup => self.fields.service,
            Region::ProtoportGroup => self.fields.protoport,
        }
    }

    /// Regions currently shown, in [`Region::ALL`] order.
    pub fn visible_regions(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL
            .into_iter()
            .filter(|region| self.is_visible(*region))
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::of(&PageState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceDirectory, DeviceEntry, Security};
    use crate::page::PageEvent;

    fn scenario_directory() -> DeviceDirectory {
        DeviceDirectory::parse(r#"{"aa:bb":"Printer","cc:dd":"TV"}"#).unwrap()
    }

    #[test]
    fn should_show_pre_submit_and_registration_on_fresh_page() {
        let view = PageView::default();
        let visible: Vec<Region> = view.visible_regions().collect();
        assert_eq!(visible, vec![Region::BeforeSubmit, Region::RegistrationRow]);
        assert!(view.options.is_empty());
    }

    #[test]
    fn should_list_one_option_per_device_in_order() {
        let mut state = PageState::new();
        state.apply(PageEvent::DevicesLoaded(scenario_directory()));
        let view = state.view();

        assert_eq!(
            view.options,
            vec![
                SelectOption {
                    value: "aa:bb".into(),
                    label: "Printer".into()
                },
                SelectOption {
                    value: "cc:dd".into(),
                    label: "TV".into()
                },
            ]
        );
        assert_eq!(view.selected.as_deref(), Some("aa:bb"));
    }

    #[test]
    fn should_hide_optional_sections_for_devices_without_classification() {
        let mut state = PageState::new();
        state.apply(PageEvent::DevicesLoaded(scenario_directory()));
        for key in ["aa:bb", "cc:dd"] {
            state.apply(PageEvent::DeviceSelected(key.into()));
            let view = state.view();
            assert!(!view.is_visible(Region::ServiceGroup));
            assert!(!view.is_visible(Region::ProtoportGroup));
        }
    }

    #[test]
    fn should_show_no_devices_message_and_hide_pre_submit_for_empty_directory() {
        let mut state = PageState::new();
        state.apply(PageEvent::DevicesLoaded(DeviceDirectory::parse("{}").unwrap()));
        let view = state.view();
        assert!(view.is_visible(Region::NoDevicesMessage));
        assert!(!view.is_visible(Region::BeforeSubmit));
        assert!(view.options.is_empty());
    }

    #[test]
    fn should_reveal_both_sections_together_for_enterprise_device() {
        let mut state = PageState::new();
        let directory: DeviceDirectory =
            vec![DeviceEntry::new("cc:dd", "Reader").with_security(Security::Enterprise)]
                .into_iter()
                .collect();
        state.apply(PageEvent::DevicesLoaded(directory));
        let view = state.view();
        assert!(view.is_visible(Region::ServiceGroup));
        assert!(view.is_visible(Region::ProtoportGroup));
    }

    #[test]
    fn should_swap_pre_submit_for_confirmation_after_response() {
        let mut state = PageState::new();
        state.apply(PageEvent::DevicesLoaded(scenario_directory()));
        state.apply(PageEvent::SubmitRequested);
        state.apply(PageEvent::ConnectResponded("Connected".into()));
        let view = state.view();

        assert!(!view.is_visible(Region::BeforeSubmit));
        assert!(view.is_visible(Region::SubmitMessage));
        assert_eq!(view.status.as_deref(), Some("Connected"));
    }

    #[test]
    fn should_use_class_selectors_for_grouped_regions() {
        assert_eq!(Region::BeforeSubmit.selector(), ".before-submit");
        assert_eq!(Region::RegistrationRow.selector(), ".reg-row");
        assert_eq!(Region::ServiceGroup.selector(), "#service-group");
        assert_eq!(Region::NoDevicesMessage.selector(), "#no-devices-message");
    }
}
