use super::*;

const AT_TOP: f32 = 0.0;

fn sample(x: f32, y: f32) -> PointerSample {
    PointerSample::new(x, y)
}

/// Drags straight down (or up for negative `dy`) and releases at the same point.
fn drag(panel: &mut RevealPanel, dy: f32) -> RevealRelease {
    panel.on_start(sample(100.0, 200.0));
    panel.on_move(sample(100.0, 200.0 + dy), AT_TOP);
    panel.on_end(sample(100.0, 200.0 + dy), AT_TOP)
}

fn settle_ticket(release: &RevealRelease) -> SettleTicket {
    match release {
        RevealRelease::Bounce { settle, .. } => settle.ticket,
        other => panic!("expected a bounce, got {:?}", other),
    }
}

#[test]
fn slide_scales_finger_travel_by_swipe_ratio() {
    let mut panel = RevealPanel::default();
    panel.on_start(sample(0.0, 0.0));

    let moved = panel.on_move(sample(0.0, 80.0), AT_TOP);

    assert_eq!(
        moved,
        RevealMove::Slid(PanelStyle {
            height: 120.0,
            transition: Duration::ZERO,
        })
    );
    assert!(moved.prevent_default());
    assert_eq!(panel.phase(), RevealPhase::Dragging);
    assert_eq!(panel.committed_offset(), 0.0, "drag must not commit");
}

#[test]
fn short_release_bounces_back_to_zero() {
    let mut panel = RevealPanel::default();

    let release = drag(&mut panel, 80.0);

    let RevealRelease::Bounce { style, settle } = &release else {
        panic!("expected bounce, got {:?}", release);
    };
    assert_eq!(settle.from, 120.0);
    assert_eq!(settle.to, 0.0);
    assert_eq!(settle.spec.duration, Duration::from_millis(300));
    assert_eq!(style.height, 0.0);
    assert_eq!(style.transition, Duration::from_millis(300));
    assert!(panel.is_settling());
    assert!(!panel.is_showed());

    assert!(panel.complete_settle(settle.ticket, CompletionSource::TransitionEnd));
    assert_eq!(panel.phase(), RevealPhase::Idle);
    assert_eq!(panel.committed_offset(), 0.0);
    assert_eq!(panel.current_offset(), 0.0);
    assert!(!panel.is_showed());
    assert_eq!(panel.style().transition, Duration::ZERO);
}

#[test]
fn full_release_stays_open_without_bounce() {
    let mut panel = RevealPanel::default();

    let release = drag(&mut panel, 200.0);

    assert_eq!(
        release,
        RevealRelease::Revealed(PanelStyle {
            height: 155.0,
            transition: Duration::ZERO,
        })
    );
    assert!(panel.is_showed());
    assert_eq!(panel.committed_offset(), 155.0);
    assert_eq!(panel.pending_settle(), None);
}

#[test]
fn offset_hard_stops_at_max_height() {
    let mut panel = RevealPanel::default();
    panel.on_start(sample(0.0, 0.0));
    panel.on_move(sample(0.0, 5000.0), AT_TOP);
    assert_eq!(panel.current_offset(), 155.0);
}

#[test]
fn upward_drag_from_open_composes_from_committed_offset() {
    let mut panel = RevealPanel::default();
    drag(&mut panel, 200.0);

    panel.on_start(sample(0.0, 300.0));
    panel.on_move(sample(0.0, 290.0), AT_TOP);
    assert_eq!(panel.current_offset(), 140.0);
    assert_eq!(panel.committed_offset(), 155.0);

    let release = panel.on_end(sample(0.0, 270.0), AT_TOP);
    let RevealRelease::Bounce { settle, .. } = release else {
        panic!("expected the panel to bounce shut");
    };
    assert_eq!(settle.from, 110.0);

    assert!(panel.complete_settle(settle.ticket, CompletionSource::FallbackTimer));
    assert!(!panel.is_showed());
    assert_eq!(panel.committed_offset(), 0.0);
}

#[test]
fn sideways_release_still_commits_the_open_height() {
    let mut panel = RevealPanel::default();
    panel.on_start(sample(0.0, 0.0));
    panel.on_move(sample(0.0, 200.0), AT_TOP);

    // The finger drifts sideways before lifting, so the final sample is not a slide.
    let release = panel.on_end(sample(250.0, 200.0), AT_TOP);

    assert!(matches!(release, RevealRelease::Revealed(style) if style.height == 155.0));
    assert!(panel.is_showed());
    assert_eq!(panel.committed_offset(), 155.0);

    panel.on_start(sample(0.0, 300.0));
    let moved = panel.on_move(sample(0.0, 290.0), AT_TOP);
    assert_eq!(
        moved,
        RevealMove::Slid(PanelStyle {
            height: 140.0,
            transition: Duration::ZERO,
        })
    );
}

#[test]
fn downward_drag_while_open_is_ignored() {
    let mut panel = RevealPanel::default();
    drag(&mut panel, 200.0);

    panel.on_start(sample(0.0, 0.0));
    assert_eq!(panel.on_move(sample(0.0, 30.0), AT_TOP), RevealMove::Ignored);
    let release = panel.on_end(sample(0.0, 30.0), AT_TOP);

    assert!(matches!(release, RevealRelease::Revealed(_)));
    assert!(panel.is_showed());
}

#[test]
fn horizontal_or_scrolled_drags_are_ignored() {
    let mut panel = RevealPanel::default();
    panel.on_start(sample(0.0, 0.0));

    let sideways = panel.on_move(sample(50.0, 10.0), AT_TOP);
    assert_eq!(sideways, RevealMove::Ignored);
    assert!(!sideways.prevent_default());

    assert_eq!(panel.on_move(sample(0.0, 60.0), 120.0), RevealMove::Ignored);
    assert_eq!(panel.current_offset(), 0.0);
}

#[test]
fn move_without_start_is_not_tracked() {
    let mut panel = RevealPanel::default();
    assert_eq!(
        panel.on_move(sample(0.0, 50.0), AT_TOP),
        RevealMove::NotTracking
    );
    assert_eq!(
        panel.on_end(sample(0.0, 50.0), AT_TOP),
        RevealRelease::Untracked
    );
}

#[test]
fn tap_skips_slide_and_settle() {
    let mut panel = RevealPanel::default();
    panel.on_start(sample(10.0, 10.0));

    assert_eq!(panel.on_end(sample(10.0, 10.0), AT_TOP), RevealRelease::Tap);
    assert_eq!(panel.phase(), RevealPhase::Idle);
    assert_eq!(panel.pending_settle(), None);
}

#[test]
fn bounce_blocks_new_slides_until_complete() {
    let mut panel = RevealPanel::default();
    let ticket = settle_ticket(&drag(&mut panel, 40.0));

    panel.on_start(sample(0.0, 0.0));
    assert_eq!(panel.on_move(sample(0.0, 50.0), AT_TOP), RevealMove::Suppressed);
    assert_eq!(panel.current_offset(), 0.0);

    assert!(panel.complete_settle(ticket, CompletionSource::TransitionEnd));
    assert_eq!(panel.phase(), RevealPhase::Dragging);

    assert!(matches!(
        panel.on_move(sample(0.0, 60.0), AT_TOP),
        RevealMove::Slid(_)
    ));
    assert_eq!(panel.current_offset(), 90.0);
}

#[test]
fn release_during_bounce_is_suppressed() {
    let mut panel = RevealPanel::default();
    let ticket = settle_ticket(&drag(&mut panel, 40.0));

    let release = drag(&mut panel, 300.0);

    assert_eq!(release, RevealRelease::Suppressed);
    assert!(!panel.is_showed());
    assert_eq!(panel.pending_settle(), Some(ticket));
}

#[test]
fn double_completion_matches_single_completion() {
    let mut once = RevealPanel::default();
    let ticket = settle_ticket(&drag(&mut once, 80.0));
    once.complete_settle(ticket, CompletionSource::TransitionEnd);

    let mut twice = RevealPanel::default();
    let ticket = settle_ticket(&drag(&mut twice, 80.0));
    assert!(twice.complete_settle(ticket, CompletionSource::TransitionEnd));
    assert!(!twice.complete_settle(ticket, CompletionSource::FallbackTimer));

    assert_eq!(once.phase(), twice.phase());
    assert_eq!(once.current_offset(), twice.current_offset());
    assert_eq!(once.committed_offset(), twice.committed_offset());
    assert_eq!(once.is_showed(), twice.is_showed());
    assert_eq!(once.pending_settle(), twice.pending_settle());
}

#[test]
fn stale_timer_does_not_disturb_later_reveal() {
    let mut panel = RevealPanel::default();
    let ticket = settle_ticket(&drag(&mut panel, 80.0));
    assert!(panel.complete_settle(ticket, CompletionSource::TransitionEnd));

    drag(&mut panel, 200.0);
    assert!(panel.is_showed());

    assert!(!panel.complete_settle(ticket, CompletionSource::FallbackTimer));
    assert!(panel.is_showed());
    assert_eq!(panel.committed_offset(), 155.0);
}

#[test]
fn cancel_restores_committed_offset() {
    let mut panel = RevealPanel::default();
    drag(&mut panel, 200.0);

    panel.on_start(sample(0.0, 100.0));
    panel.on_move(sample(0.0, 60.0), AT_TOP);
    let style = panel.on_cancel();

    assert_eq!(style.height, 155.0);
    assert_eq!(panel.phase(), RevealPhase::Idle);
    assert_eq!(panel.on_move(sample(0.0, 10.0), AT_TOP), RevealMove::NotTracking);
}

#[test]
fn unusable_config_falls_back_to_defaults() {
    let panel = RevealPanel::new(
        RevealConfig::default()
            .with_max_height(0.0)
            .with_swipe_ratio(f32::INFINITY),
    );
    assert_eq!(panel.config().max_height, DEFAULT_MAX_HEIGHT);
    assert_eq!(panel.config().swipe_ratio, DEFAULT_SWIPE_RATIO);
}

#[test]
fn offset_stays_within_bounds_for_arbitrary_drags() {
    let mut panel = RevealPanel::new(RevealConfig::default().with_max_height(155.0));
    let max = panel.config().max_height;
    let mut seed = 0x2545_f491_u32;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed
    };

    for _ in 0..500 {
        panel.on_start(sample(0.0, 0.0));
        for _ in 0..(next() % 6) {
            let dy = (next() % 801) as f32 - 400.0;
            panel.on_move(sample(0.0, dy), AT_TOP);
            let offset = panel.current_offset();
            assert!((0.0..=max).contains(&offset), "offset {} escaped", offset);
        }
        let dy = (next() % 801) as f32 - 400.0;
        if let RevealRelease::Bounce { settle, .. } = panel.on_end(sample(0.0, dy), AT_TOP) {
            if next() % 2 == 0 {
                panel.complete_settle(settle.ticket, CompletionSource::TransitionEnd);
            }
        }
        let offset = panel.current_offset();
        assert!((0.0..=max).contains(&offset), "offset {} escaped", offset);
        assert!((0.0..=max).contains(&panel.committed_offset()));
    }
}
