use super::*;

fn trace_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("traces")
}

fn assert_trace_matches(name: &str) {
    let dir = trace_dir();
    let samples = parse_trace(&dir.join(format!("{name}.txt"))).expect("trace should parse");
    let expected =
        parse_expected_lines(&dir.join(format!("{name}.expect"))).expect("expect file missing");

    assert_eq!(replay(&samples, active_config()), expected, "{name}");
}

#[test]
fn single_tap_trace_matches_expectation() {
    assert_trace_matches("single_tap");
}

#[test]
fn swipe_right_trace_matches_expectation() {
    assert_trace_matches("swipe_right");
}

#[test]
fn quiet_cycles_are_not_printed() {
    let samples = [ReplaySample {
        ticks: 5,
        touch_count: 0,
        points: [Position::default(); 2],
    }];
    assert!(replay(&samples, active_config()).is_empty());
}

#[test]
fn describe_cycle_labels_directions() {
    let detected = Detected::only(GestureKind::OneFingerRotate);
    let directions = Directions {
        rotate: Some(Rotation::CounterClockwise),
        ..Directions::default()
    };
    assert_eq!(
        describe_cycle(40, detected, directions).as_deref(),
        Some("40 one_finger_rotate:ccw")
    );
}
