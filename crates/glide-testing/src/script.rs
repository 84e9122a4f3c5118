//! Scripted pointer gestures.
//!
//! A [`GestureScript`] is a recorded sequence of pointer phases that can be
//! replayed against either widget, the same way a browser would deliver
//! start/move/end events.
//!
//! # Example
//!
//! ```
//! use glide_testing::script::{play_reveal, GestureScript};
//! use glide_widgets::RevealPanel;
//!
//! let mut panel = RevealPanel::default();
//! let run = play_reveal(&mut panel, &GestureScript::drag((0.0, 0.0), (0.0, 60.0), 4), 0.0);
//! assert_eq!(run.moves.len(), 4);
//! ```

use glide_gesture::{PointerPhase, PointerSample};
use glide_widgets::{
    CarouselSwipe, PanelStyle, RevealMove, RevealPanel, RevealRelease, SwipeMove, SwipeRelease,
    SwipeUpdate,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    pub phase: PointerPhase,
    pub sample: PointerSample,
}

#[derive(Clone, Debug, Default)]
pub struct GestureScript {
    steps: Vec<ScriptStep>,
    cursor: PointerSample,
}

impl GestureScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press, `steps` evenly spaced moves, release at `to`.
    pub fn drag(from: (f32, f32), to: (f32, f32), steps: usize) -> Self {
        let mut script = Self::new().press(from.0, from.1);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            script = script.move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        }
        script.release()
    }

    pub fn press(self, x: f32, y: f32) -> Self {
        self.push(PointerPhase::Start, PointerSample::new(x, y))
    }

    pub fn move_to(self, x: f32, y: f32) -> Self {
        self.push(PointerPhase::Move, PointerSample::new(x, y))
    }

    /// Releases where the pointer last was.
    pub fn release(self) -> Self {
        let at = self.cursor;
        self.push(PointerPhase::End, at)
    }

    pub fn release_at(self, x: f32, y: f32) -> Self {
        self.push(PointerPhase::End, PointerSample::new(x, y))
    }

    pub fn cancel(self) -> Self {
        let at = self.cursor;
        self.push(PointerPhase::Cancel, at)
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    fn push(mut self, phase: PointerPhase, sample: PointerSample) -> Self {
        self.cursor = sample;
        self.steps.push(ScriptStep { phase, sample });
        self
    }
}

/// What a [`RevealPanel`] answered while a script played.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealRun {
    pub moves: Vec<RevealMove>,
    pub release: Option<RevealRelease>,
    pub cancelled: Option<PanelStyle>,
}

impl RevealRun {
    /// Number of moves the host would have to `preventDefault`.
    pub fn prevented(&self) -> usize {
        self.moves.iter().filter(|m| m.prevent_default()).count()
    }
}

pub fn play_reveal(panel: &mut RevealPanel, script: &GestureScript, scroll_top: f32) -> RevealRun {
    let mut run = RevealRun::default();
    for step in script.steps() {
        match step.phase {
            PointerPhase::Start => panel.on_start(step.sample),
            PointerPhase::Move => run.moves.push(panel.on_move(step.sample, scroll_top)),
            PointerPhase::End => run.release = Some(panel.on_end(step.sample, scroll_top)),
            PointerPhase::Cancel => run.cancelled = Some(panel.on_cancel()),
        }
    }
    run
}

/// What a [`CarouselSwipe`] answered while a script played.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeRun {
    pub moves: Vec<SwipeMove>,
    pub release: Option<SwipeRelease>,
    pub cancelled: Option<SwipeUpdate>,
}

impl SwipeRun {
    pub fn prevented(&self) -> usize {
        self.moves.iter().filter(|m| m.prevent_default()).count()
    }

    /// The snap started by the release, if any.
    pub fn snapped(&self) -> Option<&SwipeUpdate> {
        match &self.release {
            Some(SwipeRelease::Snapped(update)) => Some(update),
            _ => None,
        }
    }
}

pub fn play_carousel(carousel: &mut CarouselSwipe, script: &GestureScript) -> SwipeRun {
    let mut run = SwipeRun::default();
    for step in script.steps() {
        match step.phase {
            PointerPhase::Start => carousel.on_start(step.sample),
            PointerPhase::Move => run.moves.push(carousel.on_move(step.sample)),
            PointerPhase::End => run.release = Some(carousel.on_end(step.sample)),
            PointerPhase::Cancel => run.cancelled = carousel.on_cancel(),
        }
    }
    run
}
