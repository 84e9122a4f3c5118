/// Page-space position of a single pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: PointerSample = PointerSample { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Main axis of a drag, decided by which displacement component is larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Displacement of the pointer from the position where the gesture started.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureDelta {
    pub dx: f32,
    pub dy: f32,
}

impl GestureDelta {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn between(start: PointerSample, current: PointerSample) -> Self {
        Self {
            dx: current.x - start.x,
            dy: current.y - start.y,
        }
    }

    /// Vertical dominance: `|dx| < |dy|`.
    ///
    /// Ties go to the horizontal axis, so a perfectly diagonal drag is never
    /// treated as a vertical reveal.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.dx.abs() < self.dy.abs()
    }

    /// Horizontal dominance: `|dx| >= |dy|`.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical()
    }

    pub fn dominant_axis(&self) -> Axis {
        if self.is_vertical() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

/// The three DOM event names a widget listens to.
///
/// Touch-capable surfaces use the touch vocabulary exclusively; everything
/// else falls back to mouse events. The choice is made once when the host
/// loads and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventVocabulary {
    pub start: &'static str,
    pub moved: &'static str,
    pub end: &'static str,
    pub cancel: Option<&'static str>,
}

impl EventVocabulary {
    pub const TOUCH: EventVocabulary = EventVocabulary {
        start: "touchstart",
        moved: "touchmove",
        end: "touchend",
        cancel: Some("touchcancel"),
    };

    pub const MOUSE: EventVocabulary = EventVocabulary {
        start: "mousedown",
        moved: "mousemove",
        end: "mouseup",
        cancel: None,
    };

    pub fn for_capability(supports_touch: bool) -> Self {
        if supports_touch {
            Self::TOUCH
        } else {
            Self::MOUSE
        }
    }

    pub fn is_touch(&self) -> bool {
        *self == Self::TOUCH
    }

    pub fn name(&self, phase: PointerPhase) -> Option<&'static str> {
        match phase {
            PointerPhase::Start => Some(self.start),
            PointerPhase::Move => Some(self.moved),
            PointerPhase::End => Some(self.end),
            PointerPhase::Cancel => self.cancel,
        }
    }

    /// Maps a DOM event name back to its phase, if it belongs to this vocabulary.
    pub fn phase_of(&self, event_name: &str) -> Option<PointerPhase> {
        if event_name == self.start {
            Some(PointerPhase::Start)
        } else if event_name == self.moved {
            Some(PointerPhase::Move)
        } else if event_name == self.end {
            Some(PointerPhase::End)
        } else if self.cancel == Some(event_name) {
            Some(PointerPhase::Cancel)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_drag_counts_as_horizontal() {
        let delta = GestureDelta::new(30.0, -30.0);
        assert!(delta.is_horizontal());
        assert!(!delta.is_vertical());
        assert_eq!(delta.dominant_axis(), Axis::Horizontal);
    }

    #[test]
    fn steep_drag_counts_as_vertical() {
        let delta = GestureDelta::new(-10.0, 50.0);
        assert!(delta.is_vertical());
        assert_eq!(delta.dominant_axis(), Axis::Vertical);
    }

    #[test]
    fn vocabulary_follows_capability() {
        assert_eq!(EventVocabulary::for_capability(true).start, "touchstart");
        assert_eq!(EventVocabulary::for_capability(false).end, "mouseup");
        assert!(EventVocabulary::for_capability(true).is_touch());
    }

    #[test]
    fn vocabulary_maps_names_back_to_phases() {
        let touch = EventVocabulary::TOUCH;
        assert_eq!(touch.phase_of("touchmove"), Some(PointerPhase::Move));
        assert_eq!(touch.phase_of("touchcancel"), Some(PointerPhase::Cancel));
        assert_eq!(touch.phase_of("mousemove"), None);

        let mouse = EventVocabulary::MOUSE;
        assert_eq!(mouse.name(PointerPhase::Cancel), None);
        assert_eq!(mouse.phase_of("mousedown"), Some(PointerPhase::Start));
    }
}
