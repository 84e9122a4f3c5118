//! Style directives handed to the rendering collaborator.
//!
//! All lengths are logical pixels; the renderer appends units. A zero
//! `transition` means "apply immediately" (`transition-duration: 0ms`).

use web_time::Duration;

/// Height of the reveal banner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle {
    pub height: f32,
    pub transition: Duration,
}

/// Horizontal offset of the carousel track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackStyle {
    pub translate_x: f32,
    pub transition: Duration,
}

/// Fisheye styling of one carousel item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemStyle {
    pub index: usize,
    pub translate_y: f32,
    pub height: f32,
    pub opacity: f32,
    pub font_size: f32,
    /// Only the active item carries the active class.
    pub active: bool,
}

/// Applies style directives to whatever backs the widgets on screen.
pub trait StyleSink {
    type Error;

    fn apply_panel(&mut self, style: &PanelStyle) -> Result<(), Self::Error>;

    fn apply_track(&mut self, style: &TrackStyle) -> Result<(), Self::Error>;

    fn apply_items(&mut self, items: &[ItemStyle]) -> Result<(), Self::Error>;
}
