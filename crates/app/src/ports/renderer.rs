//! Renderer port — translates a [`PageView`] into visible output.
//!
//! Renderers hold no page logic: they show, hide and fill exactly what the
//! view describes.

use std::sync::Arc;

use btpair_domain::view::PageView;

/// Draws the page.
pub trait PageRenderer {
    /// Called after every state change with the full, current view.
    fn render(&self, view: &PageView);
}

impl<T: PageRenderer + ?Sized> PageRenderer for Arc<T> {
    fn render(&self, view: &PageView) {
        (**self).render(view);
    }
}

impl<T: PageRenderer + ?Sized> PageRenderer for &T {
    fn render(&self, view: &PageView) {
        (**self).render(view);
    }
}
