//! Assertion helpers for widget output.

use glide_widgets::ItemStyle;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that exactly one item is active and that it is `index`.
pub fn assert_active_item(items: &[ItemStyle], index: usize, msg: &str) {
    let active: Vec<usize> = items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.index)
        .collect();
    assert_eq!(active, vec![index], "{}: active items", msg);
}

/// Assert that item styles mirror around the active item and shrink with
/// distance from it.
pub fn assert_fisheye(items: &[ItemStyle], msg: &str) {
    let Some(active) = items.iter().find(|item| item.active) else {
        panic!("{}: no active item in {:?}", msg, items);
    };
    for item in items {
        let distance = item.index.abs_diff(active.index);
        if distance == 0 {
            continue;
        }
        assert!(
            item.height < active.height && item.font_size < active.font_size,
            "{}: item {} is not smaller than the active item",
            msg,
            item.index
        );
        if let Some(mirror) = active
            .index
            .checked_sub(distance)
            .and_then(|i| items.get(i))
        {
            assert_approx_eq(item.height, mirror.height, 1e-4, &format!("{} - height", msg));
            assert_approx_eq(item.opacity, mirror.opacity, 1e-4, &format!("{} - opacity", msg));
        }
    }
}
