//! DOM event wiring for mounted widgets.
//!
//! Widgets live in `Rc<RefCell<_>>` shared by the listener closures. Every
//! settle arms two one-shot callbacks, a `transitionend` listener on the
//! animated element and a fallback timeout; the widget's settle handle keeps
//! whichever fires second from doing anything.

use std::cell::RefCell;
use std::rc::Rc;

use glide_animation::{CompletionSource, SettleRequest};
use glide_gesture::PointerPhase;
use glide_widgets::carousel::RESET_DELAY;
use glide_widgets::{
    CarouselConfig, CarouselSwipe, RevealMove, RevealPanel, RevealRelease, SettleTarget,
    StyleSink, SwipeMove, SwipeRelease, SwipeUpdate,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, Window};
use web_time::{Duration, Instant};

use crate::dom::DomStyleSink;
use crate::error::WebAdapterError;
use crate::platform::{document, page_scroll_top, ReleaseScope, WebPlatform};

const TRANSITION_END_EVENTS: [&str; 2] = ["transitionend", "webkitTransitionEnd"];
const RESIZE_EVENTS: [&str; 2] = ["resize", "orientationchange"];

fn listen(
    target: &EventTarget,
    event_name: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebAdapterError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_name,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Binds every phase of `platform`'s vocabulary on `target`, except the end
/// phase, which goes to `release_target`.
fn listen_pointer(
    platform: WebPlatform,
    target: &EventTarget,
    release_target: &EventTarget,
    handler: impl FnMut(PointerPhase, &Event) + 'static,
) -> Result<(), WebAdapterError> {
    let handler = Rc::new(RefCell::new(handler));
    let vocabulary = platform.vocabulary();
    for phase in [
        PointerPhase::Start,
        PointerPhase::Move,
        PointerPhase::End,
        PointerPhase::Cancel,
    ] {
        let Some(event_name) = vocabulary.name(phase) else {
            continue;
        };
        let bound_to = match phase {
            PointerPhase::End => release_target,
            _ => target,
        };
        let handler = Rc::clone(&handler);
        // Moves must stay cancellable so horizontal swipes can stop the page scroll.
        listen(bound_to, event_name, phase != PointerPhase::Move, move |event| {
            let mut handler = handler.borrow_mut();
            (*handler)(phase, &event)
        })?;
    }
    Ok(())
}

fn report(result: Result<(), WebAdapterError>) {
    if let Err(err) = result {
        log::warn!("failed to apply widget styles: {}", err);
    }
}

fn millis_i32(duration: Duration) -> i32 {
    duration.as_millis().min(i32::MAX as u128) as i32
}

fn set_timeout(
    window: &Window,
    delay: Duration,
    callback: impl FnOnce() + 'static,
) -> Result<(), WebAdapterError> {
    let callback = Closure::once_into_js(callback);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        millis_i32(delay),
    )?;
    Ok(())
}

/// The two one-shot signals that can finish a settle.
trait SettleSignals {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Result<(), WebAdapterError>;

    fn once_transition_end(
        &self,
        event_name: &str,
        callback: Box<dyn FnOnce()>,
    ) -> Result<(), WebAdapterError>;
}

struct DomSettleSignals<'a> {
    window: &'a Window,
    animated: &'a HtmlElement,
}

impl SettleSignals for DomSettleSignals<'_> {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Result<(), WebAdapterError> {
        set_timeout(self.window, delay, callback)
    }

    fn once_transition_end(
        &self,
        event_name: &str,
        callback: Box<dyn FnOnce()>,
    ) -> Result<(), WebAdapterError> {
        let callback = Closure::once_into_js(move |_: Event| callback());
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        self.animated
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.unchecked_ref(),
                &options,
            )?;
        Ok(())
    }
}

/// Races the transition-end event against a fallback timeout for one settle.
/// `on_complete` runs once, for whichever signal finishes the settle.
///
/// The timeout is armed before any listener, so the settle still finishes
/// when a listener cannot be registered.
fn arm_settle<W: SettleTarget + 'static>(
    signals: &impl SettleSignals,
    widget: &Rc<RefCell<W>>,
    request: &SettleRequest<f32>,
    on_complete: impl Fn(&W) + 'static,
) -> Result<(), WebAdapterError> {
    let ticket = request.ticket;
    let finish = {
        let widget = Rc::clone(widget);
        Rc::new(move |source: CompletionSource| {
            let mut widget = widget.borrow_mut();
            if widget.complete_settle(ticket, source) {
                on_complete(&*widget);
            }
        })
    };

    let fallback = Rc::clone(&finish);
    signals.after(
        request.fallback_delay(),
        Box::new(move || (*fallback)(CompletionSource::FallbackTimer)),
    )?;

    for event_name in TRANSITION_END_EVENTS {
        let finish = Rc::clone(&finish);
        signals.once_transition_end(
            event_name,
            Box::new(move || (*finish)(CompletionSource::TransitionEnd)),
        )?;
    }
    Ok(())
}

fn bounce_request(release: &RevealRelease) -> Option<&SettleRequest<f32>> {
    match release {
        RevealRelease::Bounce { settle, .. } => Some(settle),
        _ => None,
    }
}

/// Mounts a reveal banner at the top of `container` and wires its gestures.
pub fn mount_reveal(
    window: &Window,
    platform: WebPlatform,
    container: &HtmlElement,
    panel: RevealPanel,
) -> Result<Rc<RefCell<RevealPanel>>, WebAdapterError> {
    let document = document(window)?;
    let easing = panel.config().settle.easing;
    let sink = Rc::new(RefCell::new(DomStyleSink::mount_panel(&document, container, easing)?));
    let animated = sink
        .borrow()
        .panel()
        .cloned()
        .ok_or(WebAdapterError::MissingElement("panel"))?;
    let panel = Rc::new(RefCell::new(panel));

    let handler = {
        let window = window.clone();
        let panel = Rc::clone(&panel);
        move |phase: PointerPhase, event: &Event| {
            let Some(sample) = platform.pointer_sample(event) else {
                return;
            };
            let scroll_top = page_scroll_top(&document);
            match phase {
                PointerPhase::Start => panel.borrow_mut().on_start(sample),
                PointerPhase::Move => {
                    let moved = panel.borrow_mut().on_move(sample, scroll_top);
                    if moved.prevent_default() {
                        event.prevent_default();
                    }
                    if let RevealMove::Slid(style) = moved {
                        report(sink.borrow_mut().apply_panel(&style));
                    }
                }
                PointerPhase::End => {
                    let release = panel.borrow_mut().on_end(sample, scroll_top);
                    let style = match &release {
                        RevealRelease::Revealed(style) | RevealRelease::Bounce { style, .. } => *style,
                        _ => return,
                    };
                    report(sink.borrow_mut().apply_panel(&style));
                    if let Some(settle) = bounce_request(&release) {
                        let sink = Rc::clone(&sink);
                        let signals = DomSettleSignals {
                            window: &window,
                            animated: &animated,
                        };
                        report(arm_settle(&signals, &panel, settle, move |panel| {
                            report(sink.borrow_mut().apply_panel(&panel.style()));
                        }));
                    }
                }
                PointerPhase::Cancel => {
                    let style = panel.borrow_mut().on_cancel();
                    report(sink.borrow_mut().apply_panel(&style));
                }
            }
        }
    };
    listen_pointer(platform, container, container, handler)?;
    log::info!("reveal panel mounted");
    Ok(panel)
}

/// Swipe notifications raised while the carousel is borrowed, delivered once
/// the borrow is released.
struct SwipeQueue {
    pending: Rc<RefCell<Vec<usize>>>,
    on_swipe: RefCell<Box<dyn FnMut(usize)>>,
}

impl SwipeQueue {
    fn new(on_swipe: impl FnMut(usize) + 'static) -> Self {
        Self {
            pending: Rc::new(RefCell::new(Vec::new())),
            on_swipe: RefCell::new(Box::new(on_swipe)),
        }
    }

    /// Callback for the carousel itself; it only records the index.
    fn recorder(&self) -> impl FnMut(usize) + 'static {
        let pending = Rc::clone(&self.pending);
        move |index| pending.borrow_mut().push(index)
    }

    fn flush(&self) {
        let indices = self.pending.take();
        let mut on_swipe = self.on_swipe.borrow_mut();
        for index in indices {
            (*on_swipe)(index);
        }
    }
}

struct CarouselHost {
    window: Window,
    carousel: Rc<RefCell<CarouselSwipe>>,
    sink: Rc<RefCell<DomStyleSink>>,
    track: HtmlElement,
    swipes: SwipeQueue,
}

impl CarouselHost {
    fn show(&self, update: &SwipeUpdate) {
        report(update.frame.apply(&mut *self.sink.borrow_mut()));
        if let Some(settle) = &update.settle {
            let sink = Rc::clone(&self.sink);
            let signals = DomSettleSignals {
                window: &self.window,
                animated: &self.track,
            };
            report(arm_settle(&signals, &self.carousel, settle, move |carousel| {
                report(sink.borrow_mut().apply_track(&carousel.frame().track));
            }));
        }
    }
}

/// Binds a carousel to `container`, which holds a `.swipe-wrapper` track and
/// the items. The first layout is shown immediately.
///
/// `on_swipe` runs after the event that changed the active item has been
/// handled, so it may borrow the returned handle.
pub fn mount_carousel(
    window: &Window,
    platform: WebPlatform,
    container: &HtmlElement,
    config: CarouselConfig,
    on_swipe: impl FnMut(usize) + 'static,
) -> Result<Rc<RefCell<CarouselSwipe>>, WebAdapterError> {
    let sink = DomStyleSink::for_carousel(container.clone(), &config)?;
    let track = sink
        .track()
        .cloned()
        .ok_or(WebAdapterError::MissingElement("track"))?;
    let items: Vec<HtmlElement> = sink.items().to_vec();
    let swipes = SwipeQueue::new(on_swipe);
    let carousel =
        CarouselSwipe::new(config, sink.measure_carousel()).with_on_swipe(swipes.recorder());
    let carousel = Rc::new(RefCell::new(carousel));
    let host = Rc::new(CarouselHost {
        window: window.clone(),
        carousel: Rc::clone(&carousel),
        sink: Rc::new(RefCell::new(sink)),
        track,
        swipes,
    });

    let first = host.carousel.borrow_mut().init();
    host.show(&first);
    host.swipes.flush();

    let handler = {
        let host = Rc::clone(&host);
        move |phase: PointerPhase, event: &Event| {
            let Some(sample) = platform.pointer_sample(event) else {
                return;
            };
            match phase {
                PointerPhase::Start => host.carousel.borrow_mut().on_start(sample),
                PointerPhase::Move => {
                    let moved = host.carousel.borrow_mut().on_move(sample);
                    if moved.prevent_default() {
                        event.prevent_default();
                    }
                    if let SwipeMove::Slid(frame) = moved {
                        report(frame.apply(&mut *host.sink.borrow_mut()));
                    }
                }
                PointerPhase::End => {
                    let release = host.carousel.borrow_mut().on_end(sample);
                    if let SwipeRelease::Snapped(update) = release {
                        host.show(&update);
                    }
                }
                PointerPhase::Cancel => {
                    let update = host.carousel.borrow_mut().on_cancel();
                    if let Some(update) = update {
                        host.show(&update);
                    }
                }
            }
            host.swipes.flush();
        }
    };
    let body = match platform.release_scope() {
        ReleaseScope::Widget => None,
        ReleaseScope::Body => Some(
            document(window)?
                .body()
                .ok_or(WebAdapterError::MissingElement("body"))?,
        ),
    };
    let release_target: &EventTarget = match &body {
        Some(body) => body,
        None => container,
    };
    listen_pointer(platform, container, release_target, handler)?;

    for (index, item) in items.iter().enumerate() {
        let host = Rc::clone(&host);
        listen(item, "click", true, move |_| {
            if host.carousel.borrow().is_settling() {
                return;
            }
            let update = host.carousel.borrow_mut().translate_to(index);
            host.show(&update);
            host.swipes.flush();
        })?;
    }

    for event_name in RESIZE_EVENTS {
        let host = Rc::clone(&host);
        listen(window, event_name, true, move |_| schedule_reset(&host))?;
    }

    log::info!("carousel mounted with {} items", items.len());
    Ok(carousel)
}

fn schedule_reset(host: &Rc<CarouselHost>) {
    host.carousel.borrow_mut().schedule_reset(Instant::now());
    let callback_host = Rc::clone(host);
    report(set_timeout(&host.window, RESET_DELAY, move || {
        let host = callback_host;
        if !host.carousel.borrow_mut().poll_reset(Instant::now()) {
            return;
        }
        let metrics = host.sink.borrow().measure_carousel();
        let update = host.carousel.borrow_mut().reset(metrics);
        host.show(&update);
        host.swipes.flush();
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_gesture::PointerSample;

    #[derive(Default)]
    struct QueuedSignals {
        timers: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
        listeners: RefCell<Vec<Box<dyn FnOnce()>>>,
        reject_listeners: bool,
    }

    impl SettleSignals for QueuedSignals {
        fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Result<(), WebAdapterError> {
            self.timers.borrow_mut().push((delay, callback));
            Ok(())
        }

        fn once_transition_end(
            &self,
            event_name: &str,
            callback: Box<dyn FnOnce()>,
        ) -> Result<(), WebAdapterError> {
            if self.reject_listeners {
                return Err(WebAdapterError::Js(format!("cannot listen for {}", event_name)));
            }
            self.listeners.borrow_mut().push(callback);
            Ok(())
        }
    }

    fn bouncing_panel() -> (Rc<RefCell<RevealPanel>>, SettleRequest<f32>) {
        let mut panel = RevealPanel::default();
        panel.on_start(PointerSample::new(0.0, 0.0));
        panel.on_move(PointerSample::new(0.0, 40.0), 0.0);
        let release = panel.on_end(PointerSample::new(0.0, 40.0), 0.0);
        let settle = match bounce_request(&release) {
            Some(settle) => settle.clone(),
            None => panic!("expected a bounce, got {:?}", release),
        };
        (Rc::new(RefCell::new(panel)), settle)
    }

    #[test]
    fn fallback_still_finishes_when_listeners_are_rejected() {
        let (panel, settle) = bouncing_panel();
        let signals = QueuedSignals {
            reject_listeners: true,
            ..QueuedSignals::default()
        };
        let completions = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&completions);
        let armed = arm_settle(&signals, &panel, &settle, move |_| *counter.borrow_mut() += 1);

        assert!(armed.is_err());
        let timers = signals.timers.take();
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].0, settle.fallback_delay());
        for (_, fire) in timers {
            fire();
        }
        assert!(!panel.borrow().is_settling());
        assert_eq!(*completions.borrow(), 1);
    }

    #[test]
    fn swipe_callback_may_read_the_carousel() {
        let carousel: Rc<RefCell<Option<CarouselSwipe>>> = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let swipes = {
            let carousel = Rc::clone(&carousel);
            let seen = Rc::clone(&seen);
            SwipeQueue::new(move |index| {
                let active = carousel.borrow().as_ref().map(CarouselSwipe::active_index);
                seen.borrow_mut().push((index, active));
            })
        };
        let metrics = glide_widgets::CarouselMetrics::new(100.0, 300.0, 10);
        *carousel.borrow_mut() = Some(
            CarouselSwipe::new(CarouselConfig::default(), metrics).with_on_swipe(swipes.recorder()),
        );

        if let Some(carousel) = carousel.borrow_mut().as_mut() {
            carousel.translate_to(3);
        }
        assert!(seen.borrow().is_empty(), "delivery waits for the borrow to end");

        swipes.flush();
        assert_eq!(*seen.borrow(), [(3, Some(3))]);
        swipes.flush();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn first_signal_wins_and_later_ones_are_ignored() {
        let (panel, settle) = bouncing_panel();
        let signals = QueuedSignals::default();
        let completions = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&completions);
        arm_settle(&signals, &panel, &settle, move |_| *counter.borrow_mut() += 1)
            .expect("all signals armed");

        let listeners = signals.listeners.take();
        assert_eq!(listeners.len(), TRANSITION_END_EVENTS.len());
        for fire in listeners {
            fire();
        }
        for (_, fire) in signals.timers.take() {
            fire();
        }
        assert!(!panel.borrow().is_settling());
        assert_eq!(*completions.borrow(), 1);
    }
}
