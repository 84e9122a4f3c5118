//! Testing utilities and harness for Glide widgets

pub mod assertions;
pub mod clock;
pub mod recording;
pub mod script;

pub use clock::{ManualClock, SettleDriver};
pub use recording::{RecordingSink, SwipeLog};
pub use script::{play_carousel, play_reveal, GestureScript, RevealRun, ScriptStep, SwipeRun};

pub mod prelude {
    pub use crate::assertions;
    pub use crate::clock::*;
    pub use crate::recording::*;
    pub use crate::script::*;
}
