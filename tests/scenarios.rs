use touch_gestures::{
    active_config, Detected, GestureConfig, GestureContext, GestureKind, GestureSet, Position,
    Rotation, Zoom,
};

fn config() -> GestureConfig {
    GestureConfig {
        resolution_x: 800,
        resolution_y: 480,
        click_timeout_min: 10,
        click_timeout_max: 200,
        click_distance_max: 10,
        second_click_interval_min: 10,
        second_click_interval_max: 300,
        second_click_distance_max: 20,
        scroll_debounce: 2,
        scroll_distance_min: 10,
        flick_timeout_max: 200,
        flick_distance_min: 100,
        edge_size: 64,
        edge_timeout_max: 1000,
        edge_angle_max: 45,
        edge_distance_min: 100,
        zoom_debounce: 3,
        zoom_distance_min: 20,
        rotate_debounce: 3,
        rotate_distance_min: 30,
        enabled: GestureSet::ALL,
        filtering: true,
    }
}

fn one(x: u16, y: u16) -> [Position; 2] {
    [Position::new(x, y), Position::default()]
}

fn two(x0: u16, y0: u16, x1: u16, y1: u16) -> [Position; 2] {
    [Position::new(x0, y0), Position::new(x1, y1)]
}

#[test]
fn built_in_config_is_valid() {
    let config = active_config();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.legacy_enable_mask(), 0x83FF);
}

#[test]
fn short_tap_is_a_single_click_and_nothing_else() {
    let config = config();
    let mut context = GestureContext::new();

    context.decode(0, 1, one(100, 100), &config);
    assert!(context.detected().touchdown);
    context.decode(30, 1, one(105, 102), &config);
    assert!(context.detected().is_empty());

    context.decode(50, 0, [Position::default(); 2], &config);
    assert_eq!(context.detected(), Detected::only(GestureKind::OneFingerSingleClick));
    assert_eq!(context.directions().packed(), 0);
}

#[test]
fn pinch_reports_zoom_out_once_debounced() {
    let config = config();
    let mut context = GestureContext::new();

    context.decode(0, 2, two(200, 240, 600, 240), &config);
    let mut reported = Vec::new();
    for step in 1..=5u16 {
        let inset = step * 30;
        context.decode(
            u32::from(step) * 10,
            2,
            two(200 + inset, 240, 600 - inset, 240),
            &config,
        );
        reported.push(context.detected() == Detected::only(GestureKind::TwoFingerZoom));
        if context.detected().contains(GestureKind::TwoFingerZoom) {
            assert_eq!(context.directions().zoom, Some(Zoom::Out));
        }
    }

    assert_eq!(reported, [false, false, true, true, true]);
}

fn trace_loop(turns: [(u16, u16); 4]) -> GestureContext {
    let config = config();
    let mut context = GestureContext::new();
    context.decode(0, 1, one(200, 200), &config);
    for (step, (x, y)) in turns.into_iter().enumerate() {
        let t = (step as u32 + 1) * 10;
        context.decode(t, 1, one(x, y), &config);
    }
    context
}

#[test]
fn up_right_down_left_is_clockwise() {
    let context = trace_loop([(200, 240), (240, 240), (240, 200), (200, 200)]);
    assert_eq!(context.detected(), Detected::only(GestureKind::OneFingerRotate));
    assert_eq!(context.directions().rotate, Some(Rotation::Clockwise));
    assert_eq!(context.directions().packed() & (1 << 6), 0);
}

#[test]
fn mirrored_loop_is_counter_clockwise() {
    let context = trace_loop([(200, 240), (160, 240), (160, 200), (200, 200)]);
    assert!(context.detected().contains(GestureKind::OneFingerRotate));
    assert_eq!(context.directions().rotate, Some(Rotation::CounterClockwise));
    assert_ne!(context.directions().packed() & (1 << 6), 0);
}

#[test]
fn reset_between_sessions_forgets_partial_gestures() {
    let config = config();
    let mut context = GestureContext::new();

    context.decode(0, 1, one(100, 100), &config);
    context.reset_state();
    context.reset_state();

    // The press was forgotten, so this release is not a click.
    context.decode(50, 0, [Position::default(); 2], &config);
    assert!(context.detected().is_empty());
}
