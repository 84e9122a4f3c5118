//! Gesture-driven widgets: a pull-down reveal banner and a carousel swipe
//! selector.
//!
//! Both widgets are pure state machines. They consume pointer samples, emit
//! style directives for a rendering collaborator, and hand out settle
//! requests whose completion the host reports back from either the
//! transition-end event or a fallback timer.

pub mod carousel;
mod config;
pub mod reveal;
mod settle;
pub mod style;

pub use carousel::{
    CarouselConfig, CarouselMetrics, CarouselSwipe, SwipeFrame, SwipeMove, SwipePhase,
    SwipeRelease, SwipeUpdate, TranslateBounds,
};
pub use reveal::{RevealConfig, RevealMove, RevealPanel, RevealPhase, RevealRelease};
pub use settle::SettleTarget;
pub use style::{ItemStyle, PanelStyle, StyleSink, TrackStyle};

pub use glide_animation::{CompletionSource, SettleRequest, SettleTicket};
pub use glide_gesture::PointerSample;

pub mod prelude {
    pub use crate::carousel::{CarouselConfig, CarouselMetrics, CarouselSwipe};
    pub use crate::reveal::{RevealConfig, RevealPanel};
    pub use crate::settle::SettleTarget;
    pub use crate::style::{ItemStyle, PanelStyle, StyleSink, TrackStyle};
    pub use glide_animation::{CompletionSource, SettleTicket};
    pub use glide_gesture::PointerSample;
}
