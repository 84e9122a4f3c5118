//! Pull-down reveal banner.
//!
//! Dragging down from the top of the page grows the banner; releasing before
//! it is fully open bounces it back to zero. Once fully open it stays open
//! until an upward drag pulls it below `max_height`, which bounces it shut the
//! same way.
//!
//! The banner hard-stops at `max_height`. Unlike the carousel there is no
//! elastic overscroll.

use glide_animation::{AnimationSpec, CompletionSource, SettleHandle, SettleRequest, SettleTicket};
use glide_gesture::{GestureDelta, GestureEnd, GestureTracker, PointerSample};
use web_time::Duration;

use crate::config::positive_or;
use crate::settle::SettleTarget;
use crate::style::PanelStyle;

pub const DEFAULT_MAX_HEIGHT: f32 = 155.0;
pub const DEFAULT_SWIPE_RATIO: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fully revealed banner height.
    pub max_height: f32,
    /// Banner growth per pixel of finger travel.
    pub swipe_ratio: f32,
    /// Bounce-back timing.
    pub settle: AnimationSpec,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            swipe_ratio: DEFAULT_SWIPE_RATIO,
            settle: AnimationSpec::default(),
        }
    }
}

impl RevealConfig {
    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_swipe_ratio(mut self, swipe_ratio: f32) -> Self {
        self.swipe_ratio = swipe_ratio;
        self
    }

    pub fn with_settle(mut self, settle: AnimationSpec) -> Self {
        self.settle = settle;
        self
    }

    /// Replaces unusable values with their defaults.
    pub fn sanitized(self) -> Self {
        Self {
            max_height: positive_or("max_height", self.max_height, DEFAULT_MAX_HEIGHT),
            swipe_ratio: positive_or("swipe_ratio", self.swipe_ratio, DEFAULT_SWIPE_RATIO),
            settle: self.settle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Dragging,
    /// Bounce in flight; slides are blocked until it completes.
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealMove {
    /// No gesture in progress.
    NotTracking,
    /// A bounce is running.
    Suppressed,
    /// Wrong axis, wrong direction, or the page is scrolled.
    Ignored,
    Slid(PanelStyle),
}

impl RevealMove {
    /// Whether the host should cancel the browser's default scroll.
    pub fn prevent_default(&self) -> bool {
        matches!(self, RevealMove::Slid(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RevealRelease {
    Untracked,
    Tap,
    Suppressed,
    /// Banner ended fully open and stays open.
    Revealed(PanelStyle),
    /// Banner bounces back to zero; report completion with `settle.ticket`.
    Bounce {
        style: PanelStyle,
        settle: SettleRequest<f32>,
    },
}

#[derive(Debug, Clone)]
pub struct RevealPanel {
    config: RevealConfig,
    tracker: GestureTracker,
    phase: RevealPhase,
    current_offset: f32,
    committed_offset: f32,
    showed: bool,
    settle: SettleHandle,
}

impl Default for RevealPanel {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

impl RevealPanel {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config: config.sanitized(),
            tracker: GestureTracker::new(),
            phase: RevealPhase::Idle,
            current_offset: 0.0,
            committed_offset: 0.0,
            showed: false,
            settle: SettleHandle::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_settling(&self) -> bool {
        self.phase == RevealPhase::Settling
    }

    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    pub fn committed_offset(&self) -> f32 {
        self.committed_offset
    }

    /// True while the banner rests fully open.
    pub fn is_showed(&self) -> bool {
        self.showed
    }

    pub fn pending_settle(&self) -> Option<SettleTicket> {
        self.settle.current()
    }

    pub fn style(&self) -> PanelStyle {
        PanelStyle {
            height: self.current_offset,
            transition: if self.is_settling() {
                self.config.settle.duration
            } else {
                Duration::ZERO
            },
        }
    }

    pub fn on_start(&mut self, sample: PointerSample) {
        self.tracker.on_start(sample);
        if !self.is_settling() {
            self.phase = RevealPhase::Dragging;
        }
    }

    /// `scroll_top` is the page's vertical scroll position; the banner only
    /// follows the finger when the page sits at its top edge.
    pub fn on_move(&mut self, sample: PointerSample, scroll_top: f32) -> RevealMove {
        let Some(delta) = self.tracker.on_move(sample) else {
            return RevealMove::NotTracking;
        };
        if self.is_settling() {
            return RevealMove::Suppressed;
        }
        if !self.accepts(delta, scroll_top) {
            return RevealMove::Ignored;
        }
        self.slide(delta.dy);
        RevealMove::Slid(self.style())
    }

    pub fn on_end(&mut self, sample: PointerSample, scroll_top: f32) -> RevealRelease {
        let delta = match self.tracker.on_end(sample) {
            GestureEnd::Untracked => return RevealRelease::Untracked,
            GestureEnd::Tap => {
                if self.phase == RevealPhase::Dragging {
                    self.phase = RevealPhase::Idle;
                }
                return RevealRelease::Tap;
            }
            GestureEnd::Release(delta) => delta,
        };
        if self.is_settling() {
            return RevealRelease::Suppressed;
        }

        // Tracking is over, so this slide also commits the final offset.
        if self.accepts(delta, scroll_top) {
            self.slide(delta.dy);
        }
        self.phase = RevealPhase::Idle;

        if self.current_offset < self.config.max_height {
            let settle = self.begin_bounce();
            RevealRelease::Bounce {
                style: self.style(),
                settle,
            }
        } else {
            self.committed_offset = self.current_offset;
            self.showed = true;
            log::debug!("reveal panel fully shown");
            RevealRelease::Revealed(self.style())
        }
    }

    /// Abandons the drag and restores the last committed height.
    pub fn on_cancel(&mut self) -> PanelStyle {
        self.tracker.on_cancel();
        if self.phase == RevealPhase::Dragging {
            self.current_offset = self.committed_offset;
            self.phase = RevealPhase::Idle;
        }
        self.style()
    }

    /// Finishes a bounce. Safe to call from both the transition-end event and
    /// the fallback timer; only the first call for the current bounce has any
    /// effect, and its return value is `true`.
    pub fn complete_settle(&mut self, ticket: SettleTicket, source: CompletionSource) -> bool {
        if !self.settle.complete(ticket, source) {
            return false;
        }
        self.committed_offset = 0.0;
        self.current_offset = 0.0;
        self.showed = false;
        self.phase = if self.tracker.is_tracking() {
            RevealPhase::Dragging
        } else {
            RevealPhase::Idle
        };
        true
    }

    fn accepts(&self, delta: GestureDelta, scroll_top: f32) -> bool {
        let toward_expected = if self.showed {
            delta.dy < 0.0
        } else {
            delta.dy > 0.0
        };
        delta.is_vertical() && toward_expected && scroll_top <= 0.0
    }

    fn slide(&mut self, dy: f32) {
        let offset = (dy * self.config.swipe_ratio + self.committed_offset)
            .min(self.config.max_height)
            .max(0.0);
        if !self.tracker.is_tracking() {
            self.committed_offset = offset;
        }
        self.current_offset = offset;
        log::trace!("reveal slide dy={} offset={}", dy, offset);
    }

    fn begin_bounce(&mut self) -> SettleRequest<f32> {
        let ticket = self.settle.begin();
        let from = self.current_offset;
        self.current_offset = 0.0;
        self.phase = RevealPhase::Settling;
        log::debug!("reveal panel bouncing back from {}", from);
        SettleRequest::new(ticket, from, 0.0, self.config.settle)
    }
}

impl SettleTarget for RevealPanel {
    fn pending_settle(&self) -> Option<SettleTicket> {
        RevealPanel::pending_settle(self)
    }

    fn complete_settle(&mut self, ticket: SettleTicket, source: CompletionSource) -> bool {
        RevealPanel::complete_settle(self, ticket, source)
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
