//! In-memory collaborators that record what the widgets emit.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use glide_widgets::{ItemStyle, PanelStyle, StyleSink, TrackStyle};

/// A [`StyleSink`] that keeps every directive it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub panels: Vec<PanelStyle>,
    pub tracks: Vec<TrackStyle>,
    pub item_frames: Vec<Vec<ItemStyle>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_panel(&self) -> Option<&PanelStyle> {
        self.panels.last()
    }

    pub fn last_track(&self) -> Option<&TrackStyle> {
        self.tracks.last()
    }

    pub fn last_items(&self) -> Option<&[ItemStyle]> {
        self.item_frames.last().map(Vec::as_slice)
    }

    /// Active item of each recorded item frame.
    pub fn active_indices(&self) -> Vec<Option<usize>> {
        self.item_frames
            .iter()
            .map(|items| items.iter().find(|item| item.active).map(|item| item.index))
            .collect()
    }

    pub fn clear(&mut self) {
        self.panels.clear();
        self.tracks.clear();
        self.item_frames.clear();
    }
}

impl StyleSink for RecordingSink {
    type Error = Infallible;

    fn apply_panel(&mut self, style: &PanelStyle) -> Result<(), Infallible> {
        self.panels.push(*style);
        Ok(())
    }

    fn apply_track(&mut self, style: &TrackStyle) -> Result<(), Infallible> {
        self.tracks.push(*style);
        Ok(())
    }

    fn apply_items(&mut self, items: &[ItemStyle]) -> Result<(), Infallible> {
        self.item_frames.push(items.to_vec());
        Ok(())
    }
}

/// Shared log of indices passed to a carousel's swipe callback.
#[derive(Clone, Debug, Default)]
pub struct SwipeLog {
    indices: Rc<RefCell<Vec<usize>>>,
}

impl SwipeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback for [`CarouselSwipe::with_on_swipe`](glide_widgets::CarouselSwipe::with_on_swipe)
    /// that appends to this log.
    pub fn callback(&self) -> impl FnMut(usize) + 'static {
        let indices = Rc::clone(&self.indices);
        move |index| indices.borrow_mut().push(index)
    }

    pub fn indices(&self) -> Vec<usize> {
        self.indices.borrow().clone()
    }

    pub fn last(&self) -> Option<usize> {
        self.indices.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.indices.borrow_mut().clear();
    }
}
