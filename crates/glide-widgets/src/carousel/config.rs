use glide_animation::AnimationSpec;
use smallvec::SmallVec;

use super::layout::CarouselMetrics;
use crate::config::{count_or, positive_or, text_or};

pub const DEFAULT_SELECTOR: &str = "li";
pub const DEFAULT_FONT_SIZE: f32 = 18.0;
pub const DEFAULT_FONT_SIZE_DECREASE: f32 = 1.0;
pub const DEFAULT_HEIGHT_DECREASE: f32 = 6.0;
pub const DEFAULT_OPACITY_DECREASE: f32 = 0.2;
pub const DEFAULT_SWIPE_NUMBER: usize = 5;
pub const DEFAULT_ACTIVE_CLASS_NAME: &str = "active";
/// Share of the overscroll distance that still moves the track past an edge.
pub const DEBOUNCE_RATIO: f32 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// CSS selector matching the items inside the container.
    pub selector: String,
    /// Font size of the active item.
    pub font_size: f32,
    pub font_size_decrease: f32,
    pub height_decrease: f32,
    pub opacity_decrease: f32,
    /// Number of items visible at once.
    pub swipe_number: usize,
    pub active_class_name: String,
    pub debounce_ratio: f32,
    pub settle: AnimationSpec,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_owned(),
            font_size: DEFAULT_FONT_SIZE,
            font_size_decrease: DEFAULT_FONT_SIZE_DECREASE,
            height_decrease: DEFAULT_HEIGHT_DECREASE,
            opacity_decrease: DEFAULT_OPACITY_DECREASE,
            swipe_number: DEFAULT_SWIPE_NUMBER,
            active_class_name: DEFAULT_ACTIVE_CLASS_NAME.to_owned(),
            debounce_ratio: DEBOUNCE_RATIO,
            settle: AnimationSpec::default(),
        }
    }
}

/// A per-item value that can fall below zero for far-away items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Falloff {
    Height,
    Opacity,
    FontSize,
}

impl CarouselConfig {
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_size_decrease(mut self, decrease: f32) -> Self {
        self.font_size_decrease = decrease;
        self
    }

    pub fn with_height_decrease(mut self, decrease: f32) -> Self {
        self.height_decrease = decrease;
        self
    }

    pub fn with_opacity_decrease(mut self, decrease: f32) -> Self {
        self.opacity_decrease = decrease;
        self
    }

    pub fn with_swipe_number(mut self, swipe_number: usize) -> Self {
        self.swipe_number = swipe_number;
        self
    }

    pub fn with_active_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.active_class_name = class_name.into();
        self
    }

    pub fn with_debounce_ratio(mut self, ratio: f32) -> Self {
        self.debounce_ratio = ratio;
        self
    }

    pub fn with_settle(mut self, settle: AnimationSpec) -> Self {
        self.settle = settle;
        self
    }

    /// Replaces unusable values with their defaults.
    pub fn sanitized(self) -> Self {
        Self {
            selector: text_or("selector", self.selector, DEFAULT_SELECTOR),
            font_size: positive_or("font_size", self.font_size, DEFAULT_FONT_SIZE),
            font_size_decrease: positive_or(
                "font_size_decrease",
                self.font_size_decrease,
                DEFAULT_FONT_SIZE_DECREASE,
            ),
            height_decrease: positive_or(
                "height_decrease",
                self.height_decrease,
                DEFAULT_HEIGHT_DECREASE,
            ),
            opacity_decrease: positive_or(
                "opacity_decrease",
                self.opacity_decrease,
                DEFAULT_OPACITY_DECREASE,
            ),
            swipe_number: count_or("swipe_number", self.swipe_number, DEFAULT_SWIPE_NUMBER),
            active_class_name: text_or(
                "active_class_name",
                self.active_class_name,
                DEFAULT_ACTIVE_CLASS_NAME,
            ),
            debounce_ratio: positive_or("debounce_ratio", self.debounce_ratio, DEBOUNCE_RATIO),
            settle: self.settle,
        }
    }

    /// Lists the falloffs that turn negative for the farthest item.
    ///
    /// Styles stay non-negative only while `(item_count - 1) * decrease` is
    /// below the base value; an empty result means every item renders with a
    /// positive height, opacity, and font size.
    pub fn falloff_violations(&self, metrics: &CarouselMetrics) -> SmallVec<[Falloff; 3]> {
        let max_distance = metrics.item_count.saturating_sub(1) as f32;
        let mut violations = SmallVec::new();
        if max_distance * self.height_decrease >= metrics.item_height {
            violations.push(Falloff::Height);
        }
        if max_distance * self.opacity_decrease >= 1.0 {
            violations.push(Falloff::Opacity);
        }
        if max_distance * self.font_size_decrease >= self.font_size {
            violations.push(Falloff::FontSize);
        }
        violations
    }
}
