//! Console renderer — draws the pairing page as plain text.
//!
//! Only visible regions are printed. A view identical to the previous one
//! is not printed again.

use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;

use btpair_app::ports::PageRenderer;
use btpair_domain::view::{PageView, Region};

/// [`PageRenderer`] writing to any [`Write`] sink (stdout in production).
pub struct ConsoleRenderer<W> {
    inner: Mutex<Inner<W>>,
}

struct Inner<W> {
    out: W,
    last: Option<PageView>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            inner: Mutex::new(Inner { out, last: None }),
        }
    }

    /// Give back the underlying sink.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .out
    }
}

impl<W: Write> PageRenderer for ConsoleRenderer<W> {
    fn render(&self, view: &PageView) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if inner.last.as_ref() == Some(view) {
            return;
        }
        let text = format_view(view);
        if let Err(err) = inner.out.write_all(text.as_bytes()).and_then(|()| inner.out.flush()) {
            tracing::warn!(%err, "failed to write page to console");
        }
        inner.last = Some(view.clone());
    }
}

/// Text rendition of a page view.
pub fn format_view(view: &PageView) -> String {
    let mut text = String::from("--- pairing ---\n");

    if view.is_visible(Region::RegistrationRow) {
        let pincode = view.pincode.as_deref().unwrap_or("");
        let status = view.status.as_deref().unwrap_or("");
        let _ = writeln!(text, "pincode: {pincode}");
        let _ = writeln!(text, "status:  {status}");
    }

    if view.is_visible(Region::BeforeSubmit) {
        if view.options.is_empty() {
            text.push_str("looking for devices...\n");
        }
        for (index, option) in view.options.iter().enumerate() {
            let marker = if view.selected.as_deref() == Some(option.value.as_str()) {
                '*'
            } else {
                ' '
            };
            let _ = writeln!(
                text,
                "{marker} {}) {} [{}]",
                index + 1,
                option.label,
                option.value
            );
        }
        if view.is_visible(Region::ServiceGroup) {
            text.push_str("  service required\n");
        }
        if view.is_visible(Region::ProtoportGroup) {
            text.push_str("  protocol:port required\n");
        }
    }

    if view.is_visible(Region::NoDevicesMessage) {
        text.push_str("No pairable devices found.\n");
    }
    if view.is_visible(Region::SubmitMessage) {
        text.push_str("Connection request sent.\n");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use btpair_domain::device::{DeviceDirectory, DeviceEntry, Security};
    use btpair_domain::page::{PageEvent, PageState};

    fn loaded_state() -> PageState {
        let directory: DeviceDirectory = vec![
            DeviceEntry::new("aa:bb", "Printer"),
            DeviceEntry::new("cc:dd", "Reader").with_security(Security::Enterprise),
        ]
        .into_iter()
        .collect();
        let mut state = PageState::new();
        state.apply(PageEvent::DevicesLoaded(directory));
        state.apply(PageEvent::PincodeLoaded("0000".into()));
        state
    }

    #[test]
    fn should_list_devices_and_mark_selection() {
        let text = format_view(&loaded_state().view());
        assert!(text.contains("* 1) Printer [aa:bb]"));
        assert!(text.contains("  2) Reader [cc:dd]"));
        assert!(text.contains("pincode: 0000"));
        assert!(!text.contains("service required"));
    }

    #[test]
    fn should_mention_required_fields_for_enterprise_selection() {
        let mut state = loaded_state();
        state.apply(PageEvent::DeviceSelected("cc:dd".into()));
        let text = format_view(&state.view());
        assert!(text.contains("service required"));
        assert!(text.contains("protocol:port required"));
    }

    #[test]
    fn should_print_only_no_devices_message_for_empty_directory() {
        let mut state = PageState::new();
        state.apply(PageEvent::DevicesLoaded(DeviceDirectory::default()));
        state.apply(PageEvent::StatusLoaded(String::new()));
        let text = format_view(&state.view());
        assert_eq!(text, "--- pairing ---\nNo pairable devices found.\n");
    }

    #[test]
    fn should_print_confirmation_after_submission() {
        let mut state = loaded_state();
        state.apply(PageEvent::SubmitRequested);
        state.apply(PageEvent::ConnectResponded("aa:bb Connected: Yes".into()));
        let text = format_view(&state.view());
        assert!(text.contains("status:  aa:bb Connected: Yes"));
        assert!(text.contains("Connection request sent."));
        assert!(!text.contains("Printer"));
    }

    #[test]
    fn should_skip_repeated_identical_views() {
        let renderer = ConsoleRenderer::new(Vec::new());
        let view = loaded_state().view();
        renderer.render(&view);
        renderer.render(&view);

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.matches("--- pairing ---").count(), 1);
    }
}
