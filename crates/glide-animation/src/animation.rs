//! Time-based settle animations.
//!
//! Browsers normally run the settle as a CSS transition, so most hosts only
//! need the [`AnimationSpec`] to configure `transition-duration` and
//! `transition-timing-function`. Hosts without CSS transitions sample a
//! [`SettleAnimation`] once per frame instead.

use web_time::{Duration, Instant};

/// Default settle duration used by both widgets.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Timing curves, named after their CSS `transition-timing-function` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// CSS initial value, `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self.curve() {
            None => fraction.clamp(0.0, 1.0),
            Some(curve) => curve.y_for_x(fraction),
        }
    }

    /// Keyword written to `transition-timing-function`.
    pub fn css_name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }

    fn curve(&self) -> Option<TimingCurve> {
        let points = match self {
            Easing::Linear => return None,
            Easing::Ease => [0.25, 0.1, 0.25, 1.0],
            Easing::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Easing::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Easing::EaseInOut => [0.42, 0.0, 0.58, 1.0],
        };
        Some(TimingCurve { points })
    }
}

/// CSS timing curve through (0,0), the two control points, and (1,1).
#[derive(Debug, Clone, Copy)]
struct TimingCurve {
    points: [f32; 4],
}

impl TimingCurve {
    const TOLERANCE: f32 = 1e-5;

    /// One coordinate of the Bernstein form, given the two control values.
    fn bernstein(p1: f32, p2: f32, t: f32) -> f32 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    }

    /// x(t) is monotonic for control x values in [0, 1], so bisection always
    /// finds the curve parameter.
    fn y_for_x(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let [x1, y1, x2, y2] = self.points;
        let (mut low, mut high) = (0.0f32, 1.0f32);
        let mut t = x;
        for _ in 0..32 {
            let error = Self::bernstein(x1, x2, t) - x;
            if error.abs() < Self::TOLERANCE {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = (low + high) / 2.0;
        }
        Self::bernstein(y1, y2, t)
    }
}

/// Duration, easing and delay of a settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::tween(duration, Easing::Linear)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Time after which the fallback timer should force completion.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(SETTLE_DURATION, Easing::default())
    }
}

/// A started tween from `from` to `to`, sampled against wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimation<T> {
    from: T,
    to: T,
    spec: AnimationSpec,
    started_at: Instant,
}

impl<T: Lerp + Clone> SettleAnimation<T> {
    pub fn new(from: T, to: T, spec: AnimationSpec, started_at: Instant) -> Self {
        Self {
            from,
            to,
            spec,
            started_at,
        }
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    /// Linear progress in [0, 1], before easing.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed < self.spec.delay {
            return 0.0;
        }
        let running = elapsed - self.spec.delay;
        let duration = self.spec.duration.as_secs_f32();
        if duration <= 0.0 {
            return 1.0;
        }
        (running.as_secs_f32() / duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Instant) -> T {
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.spec.easing.transform(progress))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }

    /// When the fallback timer for this animation fires.
    pub fn deadline(&self) -> Instant {
        self.started_at + self.spec.total()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
