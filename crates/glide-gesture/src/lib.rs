//! Pointer gesture tracking for Glide widgets.
//!
//! Turns a stream of start/move/end pointer samples into deltas relative to
//! the point where the gesture began.

mod tracker;
mod types;

pub use tracker::{GestureEnd, GestureTracker};
pub use types::{Axis, EventVocabulary, GestureDelta, PointerPhase, PointerSample};

pub mod prelude {
    pub use crate::tracker::{GestureEnd, GestureTracker};
    pub use crate::types::{Axis, EventVocabulary, GestureDelta, PointerPhase, PointerSample};
}
