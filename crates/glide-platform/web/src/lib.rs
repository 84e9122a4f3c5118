//! Web platform adapter for Glide widgets.
//!
//! Resolves the browser's pointer vocabulary, turns DOM events into
//! [`PointerSample`](glide_gesture::PointerSample)s and writes the widgets'
//! style directives back onto elements.

mod dom;
mod error;
mod events;
mod platform;

pub use dom::{DomStyleSink, PANEL_CLASS, PANEL_ID, TRACK_CLASS};
pub use error::WebAdapterError;
pub use events::{mount_carousel, mount_reveal};
pub use platform::{document, page_scroll_top, window, ReleaseScope, WebPlatform};

/// Routes Rust panics to the browser console. Does nothing off wasm32.
pub fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}
