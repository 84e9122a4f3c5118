mod frames;
mod log_sink;

use glide_gesture::PointerSample;
use glide_widgets::prelude::*;
use glide_widgets::{RevealMove, RevealRelease, SwipeMove, SwipeRelease, SwipeUpdate};
use web_time::Duration;

use frames::FrameLoop;
use log_sink::LogSink;

/// Pointer samples of a straight drag, excluding the press point.
fn drag(from: (f32, f32), to: (f32, f32), steps: usize) -> Vec<PointerSample> {
    (1..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            PointerSample::new(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
        })
        .collect()
}

fn pull_banner(
    panel: &mut RevealPanel,
    sink: &mut LogSink,
    frames: &mut FrameLoop,
    from: (f32, f32),
    to: (f32, f32),
) {
    panel.on_start(PointerSample::new(from.0, from.1));
    let samples = drag(from, to, 6);
    for sample in &samples {
        if let RevealMove::Slid(style) = panel.on_move(*sample, 0.0) {
            let _ = sink.apply_panel(&style);
        }
    }
    let end = samples.last().copied().unwrap_or(PointerSample::new(from.0, from.1));
    match panel.on_end(end, 0.0) {
        RevealRelease::Revealed(style) => {
            log::info!("banner fully revealed");
            let _ = sink.apply_panel(&style);
        }
        RevealRelease::Bounce { style, settle } => {
            let _ = sink.apply_panel(&style);
            frames.start(&settle);
            frames.run_until_idle(panel);
            let _ = sink.apply_panel(&panel.style());
        }
        other => log::info!("release ignored: {:?}", other),
    }
}

fn reveal_scene() {
    log::info!("=== pull-down reveal ===");
    let mut panel = RevealPanel::new(RevealConfig::default());
    let mut sink = LogSink::default();
    let mut frames = FrameLoop::new();

    log::info!("-- short pull bounces back");
    pull_banner(&mut panel, &mut sink, &mut frames, (0.0, 0.0), (0.0, 60.0));

    log::info!("-- long pull stays open");
    pull_banner(&mut panel, &mut sink, &mut frames, (0.0, 0.0), (0.0, 140.0));

    log::info!("-- push up closes, transitionend lost");
    frames.set_drop_transition_end(true);
    pull_banner(&mut panel, &mut sink, &mut frames, (0.0, 200.0), (0.0, 150.0));
    frames.set_drop_transition_end(false);

    log::info!("reveal scene emitted {} frames", sink.frames());
}

fn show(sink: &mut LogSink, frames: &mut FrameLoop, carousel: &mut CarouselSwipe, update: SwipeUpdate) {
    let _ = update.frame.apply(sink);
    if let Some(settle) = update.settle {
        frames.start(&settle);
        frames.run_until_idle(carousel);
    }
}

fn swipe(carousel: &mut CarouselSwipe, sink: &mut LogSink, frames: &mut FrameLoop, dx: f32) {
    let from = (300.0, 40.0);
    carousel.on_start(PointerSample::new(from.0, from.1));
    let samples = drag(from, (from.0 + dx, from.1), 5);
    for sample in &samples {
        if let SwipeMove::Slid(frame) = carousel.on_move(*sample) {
            let _ = frame.apply(sink);
        }
    }
    let end = samples.last().copied().unwrap_or(PointerSample::new(from.0, from.1));
    if let SwipeRelease::Snapped(update) = carousel.on_end(end) {
        show(sink, frames, carousel, update);
    }
}

fn carousel_scene() {
    log::info!("=== carousel swipe ===");
    let metrics = CarouselMetrics::new(64.0, 48.0, 9).with_active_index(4);
    let mut carousel = CarouselSwipe::new(CarouselConfig::default(), metrics)
        .with_on_swipe(|index| log::debug!("onSwipe({})", index));
    let mut sink = LogSink::default();
    let mut frames = FrameLoop::new();

    let first = carousel.init();
    show(&mut sink, &mut frames, &mut carousel, first);

    log::info!("-- swipe left by two and a half items");
    swipe(&mut carousel, &mut sink, &mut frames, -160.0);
    log::info!("active item {}", carousel.active_index());

    log::info!("-- overscroll past the first item");
    swipe(&mut carousel, &mut sink, &mut frames, 400.0);
    log::info!("active item {}", carousel.active_index());

    log::info!("-- tap item 6");
    let update = carousel.translate_to(6);
    show(&mut sink, &mut frames, &mut carousel, update);

    log::info!("-- rotate to a narrower viewport");
    carousel.schedule_reset(frames.now());
    frames.idle(Duration::from_millis(150));
    carousel.schedule_reset(frames.now());
    frames.idle(Duration::from_millis(300));
    if carousel.poll_reset(frames.now()) {
        let update = carousel.reset(CarouselMetrics::new(48.0, 40.0, 9).with_active_index(6));
        show(&mut sink, &mut frames, &mut carousel, update);
    }
    log::info!(
        "active item {} at translate {:.1}",
        carousel.active_index(),
        carousel.committed_translate()
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Glide gesture demo ===");
    println!("Set RUST_LOG=debug to see every animation frame and item row.");
    println!();

    reveal_scene();
    carousel_scene();
}
