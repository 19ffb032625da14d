use super::*;
use crate::types::GestureKind;

#[test]
fn sample_config_is_valid() {
    assert_eq!(sample_config().validate(), Ok(()));
}

#[test]
fn built_in_config_is_valid_and_fully_enabled() {
    let config = active_config();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.resolution_x, 800);
    assert_eq!(config.resolution_y, 480);
    assert_eq!(config.enabled, GestureSet::ALL);
    assert!(config.filtering);
}

#[test]
fn legacy_enable_mask_carries_filtering_bit() {
    let mut config = sample_config();
    assert_eq!(config.legacy_enable_mask(), 0x83FF);

    config.filtering = false;
    config.enabled = GestureSet::EMPTY
        .with(GestureKind::OneFingerSingleClick)
        .with(GestureKind::TwoFingerZoom);
    assert_eq!(config.legacy_enable_mask(), 0x0201);
}

#[test]
fn zero_resolution_is_rejected() {
    let mut config = sample_config();
    config.resolution_y = 0;
    assert_eq!(config.validate(), Err(GestureConfigError::ZeroResolution));
}

#[test]
fn inverted_timing_windows_name_the_field() {
    let mut config = sample_config();
    config.click_timeout_min = 500;
    assert_eq!(
        config.validate(),
        Err(GestureConfigError::InvertedWindow {
            field: "click_timeout"
        })
    );

    let mut config = sample_config();
    config.second_click_interval_max = 5;
    assert_eq!(
        config.validate(),
        Err(GestureConfigError::InvertedWindow {
            field: "second_click_interval"
        })
    );
}

#[test]
fn edge_band_must_leave_an_interior() {
    let mut config = sample_config();
    config.edge_size = 240;
    assert_eq!(
        config.validate(),
        Err(GestureConfigError::EdgeBandTooWide { edge_size: 240 })
    );
}

#[test]
fn edge_angle_above_right_angle_is_rejected() {
    let mut config = sample_config();
    config.edge_angle_max = 91;
    assert_eq!(
        config.validate(),
        Err(GestureConfigError::EdgeAngleOutOfRange(91))
    );
}

#[test]
fn errors_render_readable_messages() {
    let err = GestureConfigError::InvertedWindow {
        field: "click_timeout",
    };
    assert_eq!(
        std::format!("{err}"),
        "click_timeout minimum must not exceed its maximum"
    );
    assert_eq!(
        std::format!("{}", GestureConfigError::EdgeAngleOutOfRange(120)),
        "edge angle limit 120 exceeds 90 degrees"
    );
}
