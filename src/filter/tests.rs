use super::*;

fn raw(kinds: &[GestureKind]) -> Detected {
    Detected {
        gestures: kinds.iter().copied().collect(),
        touchdown: false,
        liftoff: false,
    }
}

#[test]
fn zoom_beats_one_finger_scroll() {
    let filtered = apply_priority(raw(&[
        GestureKind::TwoFingerZoom,
        GestureKind::OneFingerScroll,
    ]));
    assert_eq!(filtered, Detected::only(GestureKind::TwoFingerZoom));
}

#[test]
fn each_gesture_outranks_the_next() {
    for pair in PRIORITY.windows(2) {
        let filtered = apply_priority(raw(pair));
        assert_eq!(filtered, Detected::only(pair[0]), "{pair:?}");
    }
}

#[test]
fn everything_at_once_reduces_to_zoom() {
    let filtered = apply_priority(raw(&GestureKind::ALL));
    assert_eq!(filtered.gestures.bits(), GestureKind::TwoFingerZoom.mask());
}

#[test]
fn gesture_clears_touchdown_and_liftoff() {
    let mut detected = raw(&[GestureKind::OneFingerSingleClick]);
    detected.liftoff = true;
    detected.touchdown = true;

    let filtered = apply_priority(detected);
    assert!(!filtered.touchdown);
    assert!(!filtered.liftoff);
    assert_eq!(filtered.bits(), 0x0001);
}

#[test]
fn touch_transitions_pass_when_no_gesture() {
    let detected = Detected {
        gestures: GestureSet::EMPTY,
        touchdown: true,
        liftoff: false,
    };
    assert_eq!(apply_priority(detected), detected);
    assert_eq!(apply_priority(Detected::NONE), Detected::NONE);
}

#[test]
fn priority_covers_every_gesture_once() {
    let covered: GestureSet = PRIORITY.iter().copied().collect();
    assert_eq!(covered, GestureSet::ALL);
}

#[test]
fn suppressed_lists_dropped_gestures() {
    let raw_set = GestureSet::EMPTY
        .with(GestureKind::TwoFingerZoom)
        .with(GestureKind::OneFingerScroll);
    let kept = GestureSet::EMPTY.with(GestureKind::TwoFingerZoom);
    assert_eq!(
        suppressed(raw_set, kept),
        GestureSet::EMPTY.with(GestureKind::OneFingerScroll)
    );
}
