use super::*;
use crate::config::sample_config;
use crate::types::{GestureSet, Quadrant, Zoom};

fn none() -> [Position; 2] {
    [Position::default(); 2]
}

fn one(x: u16, y: u16) -> [Position; 2] {
    [Position::new(x, y), Position::default()]
}

fn two(x0: u16, y0: u16, x1: u16, y1: u16) -> [Position; 2] {
    [Position::new(x0, y0), Position::new(x1, y1)]
}

fn tap(context: &mut GestureContext, config: &GestureConfig) {
    context.decode(0, 0, none(), config);
    context.decode(10, 1, one(100, 100), config);
    context.decode(60, 0, none(), config);
}

#[test]
fn touchdown_and_liftoff_follow_count_changes() {
    let config = sample_config();
    let mut context = GestureContext::new();

    context.decode(0, 1, one(100, 100), &config);
    assert!(context.detected().touchdown);
    assert!(!context.detected().liftoff);
    assert_eq!(context.detected().bits(), Detected::TOUCHDOWN_BIT);

    context.decode(10, 1, one(100, 100), &config);
    assert!(context.detected().is_empty());

    context.decode(20, 2, two(100, 100, 300, 300), &config);
    assert!(context.detected().touchdown);
    assert_eq!(context.last_touch_count(), 2);
}

#[test]
fn filtered_click_drops_liftoff() {
    let config = sample_config();
    let mut context = GestureContext::new();
    tap(&mut context, &config);

    assert_eq!(context.detected(), Detected::only(GestureKind::OneFingerSingleClick));
    assert_eq!(context.detected().bits(), 0x0001);
}

#[test]
fn unfiltered_click_keeps_liftoff() {
    let mut config = sample_config();
    config.filtering = false;
    let mut context = GestureContext::new();
    tap(&mut context, &config);

    let detected = context.detected();
    assert!(detected.contains(GestureKind::OneFingerSingleClick));
    assert!(detected.liftoff);
    assert_eq!(detected.bits(), Detected::LIFTOFF_BIT | 0x0001);
}

#[test]
fn zoom_outranks_two_finger_scroll_in_the_same_cycle() {
    let mut raw_config = sample_config();
    raw_config.filtering = false;
    let filtered_config = sample_config();
    let mut raw = GestureContext::new();
    let mut filtered = GestureContext::new();

    // Both fingers travel up while spreading apart.
    let frames = [
        (0, two(300, 200, 500, 200)),
        (10, two(280, 240, 520, 240)),
        (20, two(260, 280, 540, 280)),
    ];
    for (t, positions) in frames {
        raw.decode(t, 2, positions, &raw_config);
        filtered.decode(t, 2, positions, &filtered_config);
    }

    assert!(raw.detected().contains(GestureKind::TwoFingerZoom));
    assert!(raw.detected().contains(GestureKind::TwoFingerScroll));
    assert_eq!(filtered.detected(), Detected::only(GestureKind::TwoFingerZoom));
    assert_eq!(filtered.directions().zoom, Some(Zoom::In));
}

#[test]
fn directions_clear_every_cycle() {
    let config = sample_config();
    let mut context = GestureContext::new();

    context.decode(0, 1, one(100, 100), &config);
    context.decode(10, 1, one(100, 120), &config);
    context.decode(20, 1, one(100, 140), &config);
    assert_eq!(context.directions().one_finger_scroll, Some(Quadrant::Up));

    context.decode(30, 1, one(100, 141), &config);
    assert_eq!(context.directions(), Directions::default());
    assert!(context.detected().is_empty());
}

#[test]
fn four_touches_restart_every_decoder_next_cycle() {
    let config = sample_config();
    let before = telemetry::snapshot();
    let mut context = GestureContext::new();

    context.decode(0, 1, one(100, 100), &config);
    assert_eq!(context.phase(GestureKind::OneFingerSingleClick), DecoderPhase::FirstTouch);

    context.decode(10, MULTIPLE_TOUCHES, two(100, 100, 300, 300), &config);
    assert_eq!(context.phase(GestureKind::OneFingerSingleClick), DecoderPhase::Invalid);

    // Without the rebuild an invalid decoder would wait for a clear panel.
    context.decode(20, 1, one(100, 100), &config);
    assert_eq!(context.phase(GestureKind::OneFingerSingleClick), DecoderPhase::FirstTouch);
    assert_eq!(context.touch_count(), 1);
    assert!(telemetry::snapshot().multi_touch_resets > before.multi_touch_resets);
}

#[test]
fn disabled_decoders_stay_idle() {
    let mut config = sample_config();
    config.enabled = GestureSet::EMPTY.with(GestureKind::OneFingerSingleClick);
    let mut context = GestureContext::new();

    context.decode(0, 1, one(100, 100), &config);
    assert_eq!(context.phase(GestureKind::OneFingerSingleClick), DecoderPhase::FirstTouch);
    for kind in GestureKind::ALL.into_iter().skip(1) {
        assert_eq!(context.phase(kind), DecoderPhase::Idle, "{kind:?}");
    }
}

#[test]
fn reset_state_is_idempotent() {
    let config = sample_config();
    let mut context = GestureContext::new();
    context.decode(0, 1, one(100, 100), &config);
    context.decode(10, 2, two(100, 100, 300, 300), &config);

    context.reset_state();
    let once = format!("{context:?}");
    context.reset_state();
    assert_eq!(format!("{context:?}"), once);
    assert_eq!(once, format!("{:?}", GestureContext::new()));
    assert_eq!(context.last_positions(), none());
    assert_eq!(context.timestamp(), 0);
}

#[test]
fn cycles_and_reports_are_counted() {
    let config = sample_config();
    let before = telemetry::snapshot();
    let mut context = GestureContext::new();
    tap(&mut context, &config);

    let after = telemetry::snapshot();
    assert!(after.decode_cycles >= before.decode_cycles + 3);
    assert!(
        after.reports(GestureKind::OneFingerSingleClick)
            > before.reports(GestureKind::OneFingerSingleClick)
    );
}

#[test]
fn click_spans_tick_rollover() {
    let config = sample_config();
    let mut context = GestureContext::new();

    context.decode(u32::MAX - 20, 1, one(100, 100), &config);
    context.decode(29, 0, none(), &config);
    assert_eq!(context.detected(), Detected::only(GestureKind::OneFingerSingleClick));
}

#[test]
fn scroll_wins_after_edge_swipe_is_accepted() {
    let config = sample_config();
    let mut context = GestureContext::new();

    context.decode(0, 1, one(10, 240), &config);
    context.decode(50, 1, one(60, 242), &config);
    context.decode(100, 1, one(150, 250), &config);
    assert_eq!(context.detected(), Detected::only(GestureKind::OneFingerEdgeSwipe));
    assert_eq!(context.directions().edge_swipe, Some(Quadrant::Right));

    for (t, x) in [(120, 200), (140, 250), (160, 300)] {
        context.decode(t, 1, one(x, 250), &config);
        assert_eq!(context.detected(), Detected::only(GestureKind::OneFingerScroll));
        assert_eq!(context.directions().one_finger_scroll, Some(Quadrant::Right));
        assert_eq!(context.directions().edge_swipe, None);
    }
}
