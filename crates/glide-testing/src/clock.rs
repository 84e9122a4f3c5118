//! Deterministic time for settle races.

use glide_animation::{CompletionSource, FallbackTimers, Lerp, SettleRequest, SettleTicket};
use glide_widgets::SettleTarget;
use web_time::{Duration, Instant};

/// A clock that only moves when told to.
#[derive(Clone, Copy, Debug)]
pub struct ManualClock {
    now: Instant,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance(&mut self, by: Duration) -> Instant {
        self.now += by;
        self.now
    }
}

/// Plays the host's side of a settle: arms a fallback timer for every
/// request and lets tests fire the transition-end signal by hand.
///
/// One driver serves one widget.
#[derive(Debug, Default)]
pub struct SettleDriver {
    clock: ManualClock,
    timers: FallbackTimers,
    completions: Vec<(SettleTicket, CompletionSource)>,
}

impl SettleDriver {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            timers: FallbackTimers::new(),
            completions: Vec::new(),
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Arms the fallback timer for `request`.
    pub fn track<T: Lerp + Clone>(&mut self, request: &SettleRequest<T>) {
        self.timers.schedule(request, self.clock.now());
    }

    pub fn transition_end<W: SettleTarget>(&mut self, widget: &mut W, ticket: SettleTicket) -> bool {
        self.deliver(widget, ticket, CompletionSource::TransitionEnd)
    }

    /// Moves time forward and fires every fallback timer that came due.
    /// Returns how many of them actually completed a settle.
    pub fn advance<W: SettleTarget>(&mut self, widget: &mut W, by: Duration) -> usize {
        let now = self.clock.advance(by);
        self.timers
            .drain_due(now)
            .into_iter()
            .filter(|&ticket| self.deliver(widget, ticket, CompletionSource::FallbackTimer))
            .count()
    }

    pub fn has_armed_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Successful completions, in the order they happened.
    pub fn completions(&self) -> &[(SettleTicket, CompletionSource)] {
        &self.completions
    }

    fn deliver<W: SettleTarget>(
        &mut self,
        widget: &mut W,
        ticket: SettleTicket,
        source: CompletionSource,
    ) -> bool {
        let completed = widget.complete_settle(ticket, source);
        if completed {
            self.completions.push((ticket, source));
        }
        completed
    }
}
