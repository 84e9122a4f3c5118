mod config;
mod deferred;
mod layout;
mod swipe;

pub use config::{
    CarouselConfig, Falloff, DEBOUNCE_RATIO, DEFAULT_ACTIVE_CLASS_NAME, DEFAULT_FONT_SIZE,
    DEFAULT_FONT_SIZE_DECREASE, DEFAULT_HEIGHT_DECREASE, DEFAULT_OPACITY_DECREASE,
    DEFAULT_SELECTOR, DEFAULT_SWIPE_NUMBER,
};
pub use deferred::{DeferredReset, RESET_DELAY};
pub use layout::{
    index_steps, item_styles, resolve_index, snap_target, CarouselMetrics, TranslateBounds,
};
pub use swipe::{
    CarouselSwipe, SwipeCallback, SwipeFrame, SwipeMove, SwipePhase, SwipeRelease, SwipeUpdate,
};
