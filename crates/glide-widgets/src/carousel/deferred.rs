use web_time::{Duration, Instant};

/// Wait after a resize/orientation change before re-measuring.
pub const RESET_DELAY: Duration = Duration::from_millis(300);

/// Holds a pending re-measure until the viewport has stopped changing.
///
/// Scheduling again before the deadline pushes it back, so a burst of resize
/// events produces a single re-measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredReset {
    delay: Duration,
    due: Option<Instant>,
}

impl Default for DeferredReset {
    fn default() -> Self {
        Self::new(RESET_DELAY)
    }
}

impl DeferredReset {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.due
    }

    /// Returns `true` once when the deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut reset = DeferredReset::default();
        reset.schedule(start);

        assert!(!reset.take_due(start + Duration::from_millis(299)));
        assert!(reset.take_due(start + Duration::from_millis(300)));
        assert!(!reset.take_due(start + Duration::from_millis(900)));
    }

    #[test]
    fn rescheduling_pushes_the_deadline_back() {
        let start = Instant::now();
        let mut reset = DeferredReset::default();
        reset.schedule(start);
        reset.schedule(start + Duration::from_millis(200));

        assert!(!reset.take_due(start + Duration::from_millis(350)));
        assert_eq!(reset.due_at(), Some(start + Duration::from_millis(500)));
        assert!(reset.take_due(start + Duration::from_millis(500)));
    }
}
