use glide_gesture::{EventVocabulary, PointerPhase, PointerSample};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent, TouchEvent, Window};

use crate::error::WebAdapterError;

/// Where a widget listens for the end of a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseScope {
    /// The widget's own container.
    Widget,
    /// `document.body`, so a mouse released outside the widget still ends the drag.
    Body,
}

/// Browser capabilities resolved once at startup.
#[derive(Clone, Copy, Debug)]
pub struct WebPlatform {
    vocabulary: EventVocabulary,
}

impl WebPlatform {
    pub fn new(supports_touch: bool) -> Self {
        Self {
            vocabulary: EventVocabulary::for_capability(supports_touch),
        }
    }

    /// Picks touch or mouse events from the navigator's touch points.
    pub fn detect(window: &Window) -> Self {
        let supports_touch = window.navigator().max_touch_points() > 0;
        log::debug!("touch support: {}", supports_touch);
        Self::new(supports_touch)
    }

    pub fn vocabulary(&self) -> EventVocabulary {
        self.vocabulary
    }

    pub fn supports_touch(&self) -> bool {
        self.vocabulary.is_touch()
    }

    /// Touches keep targeting the element they started on; mouse releases
    /// only reach the element under the cursor.
    pub fn release_scope(&self) -> ReleaseScope {
        if self.supports_touch() {
            ReleaseScope::Widget
        } else {
            ReleaseScope::Body
        }
    }

    pub fn phase_of(&self, event: &Event) -> Option<PointerPhase> {
        self.vocabulary.phase_of(&event.type_())
    }

    /// Page coordinates of the pointer. Touch events report the first
    /// changed touch, which is the only one still present on `touchend`.
    pub fn pointer_sample(&self, event: &Event) -> Option<PointerSample> {
        if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
            let touch = touch_event.changed_touches().get(0)?;
            return Some(PointerSample::new(touch.page_x() as f32, touch.page_y() as f32));
        }
        let mouse = event.dyn_ref::<MouseEvent>()?;
        Some(PointerSample::new(mouse.page_x() as f32, mouse.page_y() as f32))
    }
}

impl Default for WebPlatform {
    fn default() -> Self {
        Self::new(false)
    }
}

pub fn window() -> Result<Window, WebAdapterError> {
    web_sys::window().ok_or(WebAdapterError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, WebAdapterError> {
    window.document().ok_or(WebAdapterError::NoDocument)
}

/// Vertical scroll of the page. Browsers disagree on whether the body or the
/// root element scrolls, so the larger of the two is used.
pub fn page_scroll_top(document: &Document) -> f32 {
    let body = document.body().map(|body| body.scroll_top()).unwrap_or(0);
    let root = document
        .document_element()
        .map(|root| root.scroll_top())
        .unwrap_or(0);
    body.max(root) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_releases_are_heard_on_the_body() {
        let mouse = WebPlatform::new(false);
        assert_eq!(mouse.release_scope(), ReleaseScope::Body);
        assert_eq!(mouse.vocabulary().name(PointerPhase::End), Some("mouseup"));

        let touch = WebPlatform::new(true);
        assert_eq!(touch.release_scope(), ReleaseScope::Widget);
        assert_eq!(touch.vocabulary().name(PointerPhase::End), Some("touchend"));
    }
}
