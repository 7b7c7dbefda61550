//! Signal-backed renderer: every rendered view replaces the page signal and
//! Leptos updates whatever markup reads it.

use leptos::prelude::*;

use btpair_app::ports::PageRenderer;
use btpair_domain::view::PageView;

pub struct SignalRenderer {
    set_view: WriteSignal<PageView>,
}

impl SignalRenderer {
    pub fn new(set_view: WriteSignal<PageView>) -> Self {
        Self { set_view }
    }
}

impl PageRenderer for SignalRenderer {
    fn render(&self, view: &PageView) {
        self.set_view.set(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btpair_domain::view::Region;

    #[test]
    fn should_publish_rendered_view() {
        let owner = Owner::new();
        owner.with(|| {
            let (view, set_view) = signal(PageView::default());
            let renderer = SignalRenderer::new(set_view);

            let mut next = PageView::default();
            next.no_devices_message = true;
            next.before_submit = false;
            renderer.render(&next);

            assert!(view.get_untracked().is_visible(Region::NoDevicesMessage));
            assert!(!view.get_untracked().is_visible(Region::BeforeSubmit));
        });
    }
}
