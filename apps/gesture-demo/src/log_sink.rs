use std::convert::Infallible;

use glide_widgets::{ItemStyle, PanelStyle, StyleSink, TrackStyle};

/// Prints style directives instead of rendering them.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: usize,
}

impl LogSink {
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl StyleSink for LogSink {
    type Error = Infallible;

    fn apply_panel(&mut self, style: &PanelStyle) -> Result<(), Infallible> {
        self.frames += 1;
        log::info!(
            "panel  height={:>6.1}px transition={}ms",
            style.height,
            style.transition.as_millis()
        );
        Ok(())
    }

    fn apply_track(&mut self, style: &TrackStyle) -> Result<(), Infallible> {
        self.frames += 1;
        log::info!(
            "track  translateX={:>7.1}px transition={}ms",
            style.translate_x,
            style.transition.as_millis()
        );
        Ok(())
    }

    fn apply_items(&mut self, items: &[ItemStyle]) -> Result<(), Infallible> {
        let row: Vec<String> = items
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{:.0}]", item.height)
                } else {
                    format!("{:.0}", item.height)
                }
            })
            .collect();
        log::debug!("items  heights {}", row.join(" "));
        Ok(())
    }
}
