//! Start/move/end bookkeeping shared by every Glide widget.
//!
//! The tracker owns nothing but the gesture's origin and two flags. Widgets
//! feed it raw samples and get back deltas relative to the origin; whether a
//! delta is applied (dominance tests, settle guards) is the widget's call.

use crate::types::{GestureDelta, PointerSample};

/// How a gesture finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEnd {
    /// No gesture was being tracked when the end sample arrived.
    Untracked,
    /// Pointer went down and up without moving.
    Tap,
    /// Pointer moved at least once; carries the displacement at release.
    Release(GestureDelta),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureTracker {
    tracking: bool,
    moving: bool,
    start: PointerSample,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// True only between the first move and the end of a tracked gesture.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn on_start(&mut self, sample: PointerSample) {
        self.tracking = true;
        self.moving = false;
        self.start = sample;
        log::trace!("gesture start at ({}, {})", sample.x, sample.y);
    }

    /// Returns `None` when no gesture is tracked.
    pub fn on_move(&mut self, sample: PointerSample) -> Option<GestureDelta> {
        if !self.tracking {
            return None;
        }
        self.moving = true;
        Some(GestureDelta::between(self.start, sample))
    }

    pub fn on_end(&mut self, sample: PointerSample) -> GestureEnd {
        let was_tracking = self.tracking;
        let moved = self.moving;
        self.tracking = false;
        self.moving = false;

        if !moved {
            return if was_tracking {
                GestureEnd::Tap
            } else {
                GestureEnd::Untracked
            };
        }

        let delta = GestureDelta::between(self.start, sample);
        log::trace!("gesture release dx={} dy={}", delta.dx, delta.dy);
        GestureEnd::Release(delta)
    }

    /// Drops the current gesture without producing a release.
    pub fn on_cancel(&mut self) {
        self.tracking = false;
        self.moving = false;
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
