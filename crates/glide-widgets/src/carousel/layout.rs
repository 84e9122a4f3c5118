//! Pure carousel geometry: bounds, index mapping, snapping, and the fisheye
//! item falloff.

use smallvec::SmallVec;

use super::config::CarouselConfig;
use crate::style::ItemStyle;

/// Measurements of the carousel as laid out by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselMetrics {
    /// Width of one item; the snapping step.
    pub item_width: f32,
    /// Container height, used as the active item's height.
    pub item_height: f32,
    pub item_count: usize,
    /// Index of the item carrying the active class when measured.
    pub active_index: Option<usize>,
}

impl CarouselMetrics {
    pub fn new(item_width: f32, item_height: f32, item_count: usize) -> Self {
        Self {
            item_width,
            item_height,
            item_count,
            active_index: None,
        }
    }

    pub fn with_active_index(mut self, index: usize) -> Self {
        self.active_index = Some(index);
        self
    }

    /// A layout with no items or no width cannot be swiped.
    pub fn is_degenerate(&self) -> bool {
        self.item_count == 0 || !(self.item_width > 0.0) || !self.item_width.is_finite()
    }

    pub fn last_index(&self) -> usize {
        self.item_count.saturating_sub(1)
    }
}

/// Track translate range. `first` is the unscrolled position, `last` pulls the
/// items beyond the visible window fully on screen; `last <= first`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslateBounds {
    pub first: f32,
    pub last: f32,
}

impl TranslateBounds {
    pub fn measure(metrics: &CarouselMetrics, swipe_number: usize) -> Self {
        let hidden = metrics.item_count as f32 - swipe_number as f32;
        let first = 0.0;
        // Fewer items than the window leaves nothing to scroll to.
        let last = (-hidden * metrics.item_width).min(first);
        Self { first, last }
    }

    /// The edge `translate` has been dragged past, if any.
    pub fn overscrolled_edge(&self, translate: f32) -> Option<f32> {
        if translate < self.last {
            Some(self.last)
        } else if translate > self.first {
            Some(self.first)
        } else {
            None
        }
    }

    /// Rubber-band damping: past an edge only `ratio` of the excess shows.
    pub fn elastic(&self, translate: f32, ratio: f32) -> f32 {
        match self.overscrolled_edge(translate) {
            Some(edge) => edge + (translate - edge) * ratio,
            None => translate,
        }
    }
}

/// Whole items covered by `translate`, rounded toward zero.
pub fn index_steps(translate: f32, item_width: f32) -> i64 {
    if !(item_width > 0.0) || !translate.is_finite() {
        return 0;
    }
    // Casting also folds -0.0 into 0.
    (translate / item_width).trunc() as i64
}

/// Active index after moving `steps` items away from `reference`.
pub fn resolve_index(reference: usize, steps: i64, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    let last = item_count as i64 - 1;
    (reference as i64 - steps).clamp(0, last) as usize
}

/// Resting translate after a release: the nearer edge when overscrolled,
/// otherwise a whole multiple of `item_width`.
pub fn snap_target(bounds: &TranslateBounds, translate: f32, item_width: f32) -> f32 {
    match bounds.overscrolled_edge(translate) {
        Some(edge) => edge,
        None => index_steps(translate, item_width) as f32 * item_width,
    }
}

pub fn item_styles(
    config: &CarouselConfig,
    metrics: &CarouselMetrics,
    active_index: usize,
) -> SmallVec<[ItemStyle; 8]> {
    (0..metrics.item_count)
        .map(|index| {
            let distance = active_index.abs_diff(index) as f32;
            ItemStyle {
                index,
                translate_y: config.height_decrease / 2.0 * distance,
                height: metrics.item_height - config.height_decrease * distance,
                opacity: 1.0 - config.opacity_decrease * distance,
                font_size: config.font_size - config.font_size_decrease * distance,
                active: index == active_index,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/carousel_layout_tests.rs"]
mod tests;
