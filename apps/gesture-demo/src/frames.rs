//! Simulated host loop: samples settle animations at 60 fps, delivers the
//! transition-end signal when an animation finishes and fires fallback
//! timers as they come due.

use glide_animation::{
    CompletionSource, FallbackTimers, SettleAnimation, SettleRequest, SettleTicket,
};
use glide_widgets::SettleTarget;
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

pub struct FrameLoop {
    now: Instant,
    timers: FallbackTimers,
    running: Vec<(SettleTicket, SettleAnimation<f32>)>,
    /// Simulates browsers that swallow `transitionend`.
    drop_transition_end: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
            timers: FallbackTimers::new(),
            running: Vec::new(),
            drop_transition_end: false,
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn set_drop_transition_end(&mut self, drop: bool) {
        self.drop_transition_end = drop;
    }

    pub fn start(&mut self, request: &SettleRequest<f32>) {
        log::info!(
            "settle {} from {:.1} to {:.1} over {}ms",
            request.ticket.generation(),
            request.from,
            request.to,
            request.fallback_delay().as_millis()
        );
        self.timers.schedule(request, self.now);
        self.running.push((request.ticket, request.animation(self.now)));
    }

    /// Advances time without settling anything.
    pub fn idle(&mut self, by: Duration) {
        self.now += by;
    }

    /// Runs frames until every animation has finished and every fallback
    /// timer has fired.
    pub fn run_until_idle<W: SettleTarget>(&mut self, widget: &mut W) {
        while !self.running.is_empty() || !self.timers.is_empty() {
            self.now += FRAME;
            self.step(widget);
        }
    }

    fn step<W: SettleTarget>(&mut self, widget: &mut W) {
        let now = self.now;
        let mut finished = Vec::new();
        self.running.retain(|(ticket, animation)| {
            log::debug!("frame value {:.1}", animation.value_at(now));
            if animation.is_finished(now) {
                finished.push(*ticket);
                false
            } else {
                true
            }
        });

        if !self.drop_transition_end {
            for ticket in finished {
                let done = widget.complete_settle(ticket, CompletionSource::TransitionEnd);
                log::info!("transitionend for settle {}: completed={}", ticket.generation(), done);
            }
        }
        for ticket in self.timers.drain_due(now) {
            let done = widget.complete_settle(ticket, CompletionSource::FallbackTimer);
            log::info!("fallback timer for settle {}: completed={}", ticket.generation(), done);
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
