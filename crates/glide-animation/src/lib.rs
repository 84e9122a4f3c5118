//! Settle animations for Glide widgets
//!
//! Tween timing, easing curves, and the idempotent completion handle that
//! lets a transition-end event and a fallback timer race safely.

pub mod animation;
pub mod settle;

pub use animation::{AnimationSpec, Easing, Lerp, SettleAnimation, SETTLE_DURATION};
pub use settle::{CompletionSource, FallbackTimers, SettleHandle, SettleRequest, SettleTicket};

pub use web_time::{Duration, Instant};
