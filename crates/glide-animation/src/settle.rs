//! Dual-signal settle completion.
//!
//! A settle finishes when either the renderer reports the end of its
//! transition or a fallback timer of the same length fires, whichever comes
//! first. Both signals call [`SettleHandle::complete`] with the ticket they
//! were given; only the first call for the current generation succeeds, every
//! later or stale call is a no-op.

use web_time::Instant;

use crate::animation::{AnimationSpec, Lerp, SettleAnimation};

/// Identifies one settle. Starting another settle invalidates older tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SettleTicket {
    generation: u64,
}

impl SettleTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Which of the two racing signals delivered a completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionSource {
    TransitionEnd,
    FallbackTimer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleHandle {
    generation: u64,
    pending: Option<u64>,
}

impl SettleHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new settle, superseding any settle still in flight.
    pub fn begin(&mut self) -> SettleTicket {
        self.generation = self.generation.wrapping_add(1);
        if self.pending.is_some() {
            log::debug!("settle {} superseded", self.generation - 1);
        }
        self.pending = Some(self.generation);
        SettleTicket {
            generation: self.generation,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current(&self) -> Option<SettleTicket> {
        self.pending.map(|generation| SettleTicket { generation })
    }

    /// Returns `true` only for the first completion of the pending settle.
    pub fn complete(&mut self, ticket: SettleTicket, source: CompletionSource) -> bool {
        if self.pending == Some(ticket.generation) {
            self.pending = None;
            log::debug!("settle {} completed by {:?}", ticket.generation, source);
            true
        } else {
            log::trace!(
                "ignoring {:?} for settle {} (pending: {:?})",
                source,
                ticket.generation,
                self.pending
            );
            false
        }
    }
}

/// Everything a host needs to run one settle: where the value goes, how long
/// it takes, and the ticket to hand back when it is done.
#[derive(Clone, Debug, PartialEq)]
pub struct SettleRequest<T> {
    pub ticket: SettleTicket,
    pub from: T,
    pub to: T,
    pub spec: AnimationSpec,
}

impl<T: Lerp + Clone> SettleRequest<T> {
    pub fn new(ticket: SettleTicket, from: T, to: T, spec: AnimationSpec) -> Self {
        Self {
            ticket,
            from,
            to,
            spec,
        }
    }

    /// Frame-sampled version of this settle for hosts without CSS transitions.
    pub fn animation(&self, started_at: Instant) -> SettleAnimation<T> {
        SettleAnimation::new(self.from.clone(), self.to.clone(), self.spec, started_at)
    }

    pub fn fallback_delay(&self) -> web_time::Duration {
        self.spec.total()
    }
}

/// Fallback timers for hosts that drive settles from their own event loop.
///
/// Timers cannot be cancelled: a timer whose settle already finished through
/// the transition-end path still fires, and the stale completion is rejected
/// by [`SettleHandle::complete`].
#[derive(Clone, Debug, Default)]
pub struct FallbackTimers {
    timers: Vec<(Instant, SettleTicket)>,
}

impl FallbackTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<T: Lerp + Clone>(&mut self, request: &SettleRequest<T>, now: Instant) {
        self.timers
            .push((now + request.fallback_delay(), request.ticket));
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|(deadline, _)| *deadline).min()
    }

    /// Removes and returns the tickets whose timers have fired by `now`, in
    /// deadline order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<SettleTicket> {
        let mut due: Vec<(Instant, SettleTicket)> = Vec::new();
        self.timers.retain(|&(deadline, ticket)| {
            if deadline <= now {
                due.push((deadline, ticket));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }
}

#[cfg(test)]
#[path = "tests/settle_tests.rs"]
mod tests;
