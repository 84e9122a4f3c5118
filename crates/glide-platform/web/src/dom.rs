//! Style directives written to DOM elements.

use glide_animation::Easing;
use glide_widgets::{CarouselConfig, CarouselMetrics, ItemStyle, PanelStyle, StyleSink, TrackStyle};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, HtmlElement};
use web_time::Duration;

use crate::error::WebAdapterError;

pub(crate) fn px(value: f32) -> String {
    format!("{}px", value)
}

pub(crate) fn millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

pub(crate) fn translate_x(value: f32) -> String {
    format!("translate3d({}px, 0, 0)", value)
}

pub(crate) fn translate_y(value: f32) -> String {
    format!("translate3d(0, {}px, 0)", value)
}

fn set(style: &CssStyleDeclaration, property: &str, value: &str) -> Result<(), WebAdapterError> {
    style.set_property(property, value)?;
    Ok(())
}

fn set_transform(style: &CssStyleDeclaration, value: &str) -> Result<(), WebAdapterError> {
    set(style, "transform", value)?;
    set(style, "-webkit-transform", value)
}

/// Duration and timing function of a transition, with their `-webkit-` twins.
pub(crate) fn transition_declarations(
    duration: Duration,
    easing: Easing,
) -> [(&'static str, String); 4] {
    let duration = millis(duration);
    let timing = easing.css_name().to_string();
    [
        ("transition-duration", duration.clone()),
        ("-webkit-transition-duration", duration),
        ("transition-timing-function", timing.clone()),
        ("-webkit-transition-timing-function", timing),
    ]
}

fn set_transition(
    style: &CssStyleDeclaration,
    duration: Duration,
    easing: Easing,
) -> Result<(), WebAdapterError> {
    for (property, value) in transition_declarations(duration, easing) {
        set(style, property, &value)?;
    }
    Ok(())
}

pub const TRACK_CLASS: &str = "swipe-wrapper";
pub const PANEL_ID: &str = "dragdown";
pub const PANEL_CLASS: &str = "box-dragdown";

/// Writes widget styles onto the elements they were bound to.
#[derive(Debug, Clone, Default)]
pub struct DomStyleSink {
    panel: Option<HtmlElement>,
    container: Option<HtmlElement>,
    track: Option<HtmlElement>,
    items: Vec<HtmlElement>,
    active_class: String,
    easing: Easing,
}

impl DomStyleSink {
    pub fn for_panel(panel: HtmlElement, easing: Easing) -> Self {
        Self {
            panel: Some(panel),
            easing,
            ..Self::default()
        }
    }

    /// Creates the banner element at the top of `container` and binds it.
    pub fn mount_panel(
        document: &Document,
        container: &HtmlElement,
        easing: Easing,
    ) -> Result<Self, WebAdapterError> {
        let panel = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebAdapterError::NotAnHtmlElement)?;
        panel.set_id(PANEL_ID);
        panel.set_class_name(PANEL_CLASS);
        container.prepend_with_node_1(&panel)?;
        Ok(Self::for_panel(panel, easing))
    }

    /// Binds the `.swipe-wrapper` track inside `container` and the items
    /// matching `config.selector`.
    pub fn for_carousel(
        container: HtmlElement,
        config: &CarouselConfig,
    ) -> Result<Self, WebAdapterError> {
        let track = container
            .query_selector(&format!(".{}", TRACK_CLASS))?
            .ok_or(WebAdapterError::MissingElement("track"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebAdapterError::NotAnHtmlElement)?;
        let items = carousel_items(&container, &config.selector)?;
        Ok(Self {
            panel: None,
            container: Some(container),
            track: Some(track),
            items,
            active_class: config.active_class_name.clone(),
            easing: config.settle.easing,
        })
    }

    pub fn panel(&self) -> Option<&HtmlElement> {
        self.panel.as_ref()
    }

    pub fn track(&self) -> Option<&HtmlElement> {
        self.track.as_ref()
    }

    pub fn items(&self) -> &[HtmlElement] {
        &self.items
    }

    /// Current layout of the bound carousel: item width from the active
    /// item, item height from the container.
    pub fn measure_carousel(&self) -> CarouselMetrics {
        let active_index = self
            .items
            .iter()
            .position(|item| item.class_list().contains(&self.active_class));
        let width = active_index
            .and_then(|index| self.items.get(index))
            .or_else(|| self.items.first())
            .map(|item| item.offset_width() as f32)
            .unwrap_or(0.0);
        let height = self
            .container
            .as_ref()
            .map(|container| container.offset_height() as f32)
            .unwrap_or(0.0);
        let metrics = CarouselMetrics::new(width, height, self.items.len());
        match active_index {
            Some(index) => metrics.with_active_index(index),
            None => metrics,
        }
    }
}

fn carousel_items(
    container: &HtmlElement,
    selector: &str,
) -> Result<Vec<HtmlElement>, WebAdapterError> {
    let nodes = container.query_selector_all(selector)?;
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| {
            node.dyn_into::<HtmlElement>()
                .map_err(|_| WebAdapterError::NotAnHtmlElement)
        })
        .collect()
}

impl StyleSink for DomStyleSink {
    type Error = WebAdapterError;

    fn apply_panel(&mut self, style: &PanelStyle) -> Result<(), WebAdapterError> {
        let panel = self
            .panel
            .as_ref()
            .ok_or(WebAdapterError::MissingElement("panel"))?;
        let css = panel.style();
        set_transition(&css, style.transition, self.easing)?;
        set(&css, "height", &px(style.height))
    }

    fn apply_track(&mut self, style: &TrackStyle) -> Result<(), WebAdapterError> {
        let track = self
            .track
            .as_ref()
            .ok_or(WebAdapterError::MissingElement("track"))?;
        let css = track.style();
        set_transition(&css, style.transition, self.easing)?;
        set_transform(&css, &translate_x(style.translate_x))
    }

    fn apply_items(&mut self, items: &[ItemStyle]) -> Result<(), WebAdapterError> {
        for item in items {
            let element = self
                .items
                .get(item.index)
                .ok_or(WebAdapterError::ItemOutOfRange {
                    index: item.index,
                    len: self.items.len(),
                })?;
            let css = element.style();
            set_transform(&css, &translate_y(item.translate_y))?;
            set(&css, "height", &px(item.height))?;
            set(&css, "opacity", &item.opacity.to_string())?;
            set(&css, "font-size", &px(item.font_size))?;
            element
                .class_list()
                .toggle_with_force(&self.active_class, item.active)?;
        }
        Ok(())
    }
}
