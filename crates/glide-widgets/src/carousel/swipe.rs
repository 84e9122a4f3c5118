//! Horizontal carousel selector.
//!
//! Dragging moves the track with the finger; every sample re-derives the
//! active item and restyles the whole list around it. On release the track
//! snaps to a whole item (or back to the edge it was pulled past) and the
//! snap runs as a settle, during which further drags are ignored.

use std::fmt;

use glide_animation::{CompletionSource, SettleHandle, SettleRequest, SettleTicket};
use glide_gesture::{GestureEnd, GestureTracker, PointerSample};
use smallvec::SmallVec;
use web_time::{Duration, Instant};

use super::config::CarouselConfig;
use super::deferred::DeferredReset;
use super::layout::{
    index_steps, item_styles, resolve_index, snap_target, CarouselMetrics, TranslateBounds,
};
use crate::settle::SettleTarget;
use crate::style::{ItemStyle, StyleSink, TrackStyle};

pub type SwipeCallback = Box<dyn FnMut(usize)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    /// Snap in flight; slides are blocked until it completes.
    Settling,
}

/// Styles for one carousel frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeFrame {
    pub active_index: usize,
    pub track: TrackStyle,
    pub items: SmallVec<[ItemStyle; 8]>,
}

impl SwipeFrame {
    pub fn apply<S: StyleSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.apply_items(&self.items)?;
        sink.apply_track(&self.track)
    }
}

/// Result of a relayout. `settle` is present when the relayout ended a
/// gesture (or was requested programmatically) and started a snap.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeUpdate {
    pub frame: SwipeFrame,
    pub settle: Option<SettleRequest<f32>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SwipeMove {
    NotTracking,
    /// Mostly vertical: the page should scroll normally.
    Ignored,
    /// Horizontal, but a snap is running.
    Suppressed,
    Slid(SwipeFrame),
}

impl SwipeMove {
    /// Whether the host should cancel the browser's default scroll.
    pub fn prevent_default(&self) -> bool {
        matches!(self, SwipeMove::Suppressed | SwipeMove::Slid(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SwipeRelease {
    Untracked,
    Tap,
    Suppressed,
    Snapped(SwipeUpdate),
}

pub struct CarouselSwipe {
    config: CarouselConfig,
    metrics: CarouselMetrics,
    bounds: TranslateBounds,
    initial_index: usize,
    active_index: usize,
    committed_translate: f32,
    displayed_translate: f32,
    phase: SwipePhase,
    tracker: GestureTracker,
    settle: SettleHandle,
    deferred_reset: DeferredReset,
    on_swipe: Option<SwipeCallback>,
}

impl fmt::Debug for CarouselSwipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselSwipe")
            .field("metrics", &self.metrics)
            .field("bounds", &self.bounds)
            .field("initial_index", &self.initial_index)
            .field("active_index", &self.active_index)
            .field("committed_translate", &self.committed_translate)
            .field("displayed_translate", &self.displayed_translate)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl CarouselSwipe {
    /// Creates the carousel and measures its layout. Call [`init`](Self::init)
    /// to produce the first frame.
    pub fn new(config: CarouselConfig, metrics: CarouselMetrics) -> Self {
        let initial_index = metrics.active_index.unwrap_or_else(|| {
            log::warn!("carousel has no active item, starting at the first one");
            0
        });
        let mut carousel = Self {
            config: config.sanitized(),
            metrics,
            bounds: TranslateBounds { first: 0.0, last: 0.0 },
            initial_index: initial_index.min(metrics.last_index()),
            active_index: 0,
            committed_translate: 0.0,
            displayed_translate: 0.0,
            phase: SwipePhase::Idle,
            tracker: GestureTracker::new(),
            settle: SettleHandle::new(),
            deferred_reset: DeferredReset::default(),
            on_swipe: None,
        };
        carousel.measure(metrics);
        carousel.active_index = carousel.initial_index;
        carousel
    }

    /// Invoked with the active index on every recompute, including each
    /// intermediate drag sample.
    pub fn with_on_swipe(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_swipe = Some(Box::new(callback));
        self
    }

    pub fn set_on_swipe(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_swipe = Some(Box::new(callback));
    }

    /// First layout. Like every relayout outside a gesture it snaps, so the
    /// returned update carries a settle to complete.
    pub fn init(&mut self) -> SwipeUpdate {
        self.relayout(0.0)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn metrics(&self) -> &CarouselMetrics {
        &self.metrics
    }

    pub fn bounds(&self) -> TranslateBounds {
        self.bounds
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn is_settling(&self) -> bool {
        self.phase == SwipePhase::Settling
    }

    /// Index the translate is measured from.
    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn committed_translate(&self) -> f32 {
        self.committed_translate
    }

    /// Translate currently shown, including elastic overscroll.
    pub fn displayed_translate(&self) -> f32 {
        self.displayed_translate
    }

    pub fn pending_settle(&self) -> Option<SettleTicket> {
        self.settle.current()
    }

    pub fn frame(&self) -> SwipeFrame {
        SwipeFrame {
            active_index: self.active_index,
            track: TrackStyle {
                translate_x: self.displayed_translate,
                transition: if self.is_settling() {
                    self.config.settle.duration
                } else {
                    Duration::ZERO
                },
            },
            items: item_styles(&self.config, &self.metrics, self.active_index),
        }
    }

    pub fn on_start(&mut self, sample: PointerSample) {
        self.tracker.on_start(sample);
        if !self.is_settling() {
            self.phase = SwipePhase::Dragging;
        }
    }

    pub fn on_move(&mut self, sample: PointerSample) -> SwipeMove {
        let Some(delta) = self.tracker.on_move(sample) else {
            return SwipeMove::NotTracking;
        };
        if !delta.is_horizontal() {
            return SwipeMove::Ignored;
        }
        if self.is_settling() {
            return SwipeMove::Suppressed;
        }
        SwipeMove::Slid(self.relayout(delta.dx).frame)
    }

    /// Releases always relayout at the final horizontal delta, even when the
    /// last stretch of the drag was mostly vertical.
    pub fn on_end(&mut self, sample: PointerSample) -> SwipeRelease {
        let delta = match self.tracker.on_end(sample) {
            GestureEnd::Untracked => return SwipeRelease::Untracked,
            GestureEnd::Tap => {
                if self.phase == SwipePhase::Dragging {
                    self.phase = SwipePhase::Idle;
                }
                return SwipeRelease::Tap;
            }
            GestureEnd::Release(delta) => delta,
        };
        if self.is_settling() {
            return SwipeRelease::Suppressed;
        }
        SwipeRelease::Snapped(self.relayout(delta.dx))
    }

    /// Abandons the drag and snaps back to the committed translate.
    pub fn on_cancel(&mut self) -> Option<SwipeUpdate> {
        let was_dragging = self.tracker.is_moving() && !self.is_settling();
        self.tracker.on_cancel();
        if self.phase == SwipePhase::Dragging {
            self.phase = SwipePhase::Idle;
        }
        was_dragging.then(|| self.relayout(0.0))
    }

    /// Finishes a snap. Safe to call from both the transition-end event and
    /// the fallback timer; only the first call for the current snap counts.
    pub fn complete_settle(&mut self, ticket: SettleTicket, source: CompletionSource) -> bool {
        if !self.settle.complete(ticket, source) {
            return false;
        }
        self.phase = if self.tracker.is_tracking() {
            SwipePhase::Dragging
        } else {
            SwipePhase::Idle
        };
        true
    }

    /// Moves to `index` programmatically, e.g. when an item is clicked.
    pub fn translate_to(&mut self, index: usize) -> SwipeUpdate {
        let index = index.min(self.metrics.last_index());
        let target = (self.initial_index as f32 - index as f32) * self.metrics.item_width;
        // relayout adds the committed translate back on.
        self.relayout(target - self.committed_translate)
    }

    /// Re-measures after a resize or orientation change and restores the
    /// active item.
    pub fn reset(&mut self, metrics: CarouselMetrics) -> SwipeUpdate {
        self.measure(metrics);
        self.translate_to(self.active_index)
    }

    /// Records a resize; the host re-measures once [`poll_reset`](Self::poll_reset)
    /// reports the viewport has had time to settle.
    pub fn schedule_reset(&mut self, now: Instant) {
        self.deferred_reset.schedule(now);
    }

    pub fn poll_reset(&mut self, now: Instant) -> bool {
        self.deferred_reset.take_due(now)
    }

    fn measure(&mut self, metrics: CarouselMetrics) {
        if metrics.is_degenerate() {
            log::warn!(
                "carousel layout is degenerate ({} items, width {}), swiping disabled",
                metrics.item_count,
                metrics.item_width
            );
        }
        let violations = self.config.falloff_violations(&metrics);
        if !violations.is_empty() {
            log::warn!(
                "carousel falloff {:?} turns negative across {} items",
                violations,
                metrics.item_count
            );
        }
        self.metrics = metrics;
        self.committed_translate = 0.0;
        self.bounds = TranslateBounds::measure(&metrics, self.config.swipe_number);
        log::debug!(
            "carousel measured: {} items, width {}, bounds {:?}",
            metrics.item_count,
            metrics.item_width,
            self.bounds
        );
    }

    fn relayout(&mut self, dx: f32) -> SwipeUpdate {
        let raw = dx + self.committed_translate;
        let steps = index_steps(raw, self.metrics.item_width);
        let index = resolve_index(self.initial_index, steps, self.metrics.item_count);
        self.active_index = index;
        if let Some(callback) = self.on_swipe.as_mut() {
            callback(index);
        }

        self.displayed_translate = self.bounds.elastic(raw, self.config.debounce_ratio);
        log::trace!(
            "carousel relayout raw={} shown={} index={}",
            raw,
            self.displayed_translate,
            index
        );

        let settle = if self.tracker.is_tracking() {
            None
        } else {
            Some(self.begin_snap())
        };
        SwipeUpdate {
            frame: self.frame(),
            settle,
        }
    }

    fn begin_snap(&mut self) -> SettleRequest<f32> {
        let ticket = self.settle.begin();
        let from = self.displayed_translate;
        let target = snap_target(&self.bounds, from, self.metrics.item_width);
        self.committed_translate = target;
        self.displayed_translate = target;
        self.phase = SwipePhase::Settling;
        log::debug!("carousel snapping from {} to {}", from, target);
        SettleRequest::new(ticket, from, target, self.config.settle)
    }
}

impl SettleTarget for CarouselSwipe {
    fn pending_settle(&self) -> Option<SettleTicket> {
        CarouselSwipe::pending_settle(self)
    }

    fn complete_settle(&mut self, ticket: SettleTicket, source: CompletionSource) -> bool {
        CarouselSwipe::complete_settle(self, ticket, source)
    }
}

#[cfg(test)]
#[path = "../tests/carousel_swipe_tests.rs"]
mod tests;
