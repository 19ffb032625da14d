use super::*;
use crate::config::sample_config;

fn pos(x: u16, y: u16) -> Position {
    Position::new(x, y)
}

#[test]
fn arctan_matches_reference_codes() {
    // ratio (y << 8) / x of 256, 128 and 106.
    assert_eq!(arctan_octant(100, 100), 45);
    assert_eq!(arctan_octant(200, 100), 26);
    assert_eq!(arctan_octant(256, 106), 22);
    // Ratios of 0 and 1 fall below the fit and wrap to the 9-bit maximum.
    assert_eq!(arctan_octant(100, 0), 511);
    assert_eq!(arctan_octant(256, 1), 511);
    assert_eq!(arctan_octant(256, 2), 0);
}

#[test]
fn steep_angles_are_measured_from_the_other_axis() {
    assert_eq!(displacement_angle(100, 100), 45);
    assert_eq!(displacement_angle(100, 200), 90 - 26);
    assert_eq!(displacement_angle(140, 160), 49);
}

#[test]
fn quadrant_tie_goes_to_x_axis() {
    assert_eq!(quadrant(pos(10, 10), pos(0, 0)), Quadrant::Right);
    assert_eq!(quadrant(pos(0, 10), pos(10, 0)), Quadrant::Left);
    assert_eq!(quadrant(pos(5, 5), pos(5, 5)), Quadrant::Right);
}

#[test]
fn quadrant_follows_dominant_axis() {
    assert_eq!(quadrant(pos(0, 10), pos(0, 0)), Quadrant::Up);
    assert_eq!(quadrant(pos(3, 0), pos(0, 10)), Quadrant::Down);
    assert_eq!(quadrant(pos(0, 4), pos(20, 0)), Quadrant::Left);
}

#[test]
fn displacement_uses_max_norm() {
    assert!(within_displacement(10, pos(100, 100), pos(110, 90)));
    assert!(!within_displacement(10, pos(100, 100), pos(111, 100)));
    assert!(!within_displacement(10, pos(100, 100), pos(100, 89)));
}

#[test]
fn flick_classifier_at_canonical_angles() {
    let start = pos(1000, 1000);
    // 0 degrees.
    assert_eq!(flick_direction(start, pos(1100, 1000)), FlickDirection::Right);
    // tan(22.5) boundary stays on the axis.
    assert_eq!(flick_direction(start, pos(1128, 1053)), FlickDirection::Right);
    assert_eq!(flick_direction(start, pos(1128, 1054)), FlickDirection::UpRight);
    // 45 degrees.
    assert_eq!(flick_direction(start, pos(1100, 1100)), FlickDirection::UpRight);
    // tan(67.5) boundary stays on the diagonal.
    assert_eq!(flick_direction(start, pos(1128, 1309)), FlickDirection::UpRight);
    assert_eq!(flick_direction(start, pos(1128, 1310)), FlickDirection::Up);
    // 90 degrees.
    assert_eq!(flick_direction(start, pos(1000, 1100)), FlickDirection::Up);
}

#[test]
fn flick_classifier_mirrors_by_sign() {
    let start = pos(1000, 1000);
    assert_eq!(flick_direction(start, pos(900, 1000)), FlickDirection::Left);
    assert_eq!(flick_direction(start, pos(1000, 900)), FlickDirection::Down);
    assert_eq!(flick_direction(start, pos(900, 900)), FlickDirection::DownLeft);
    assert_eq!(flick_direction(start, pos(1100, 900)), FlickDirection::DownRight);
    assert_eq!(flick_direction(start, pos(900, 1100)), FlickDirection::UpLeft);
}

#[test]
fn edge_bands_map_to_inward_direction() {
    let config = sample_config();
    assert_eq!(edge_of(&config, pos(10, 240)), Some(Quadrant::Right));
    assert_eq!(edge_of(&config, pos(790, 240)), Some(Quadrant::Left));
    assert_eq!(edge_of(&config, pos(400, 10)), Some(Quadrant::Up));
    assert_eq!(edge_of(&config, pos(400, 470)), Some(Quadrant::Down));
}

#[test]
fn corners_and_interior_have_no_edge() {
    let config = sample_config();
    assert_eq!(edge_of(&config, pos(10, 10)), None);
    assert_eq!(edge_of(&config, pos(790, 470)), None);
    assert_eq!(edge_of(&config, pos(400, 240)), None);
}

#[test]
fn edge_angle_waits_for_travel_then_decides() {
    let config = sample_config();
    let start = pos(10, 240);
    assert_eq!(
        check_edge_angle(&config, Quadrant::Right, start, pos(60, 250)),
        EdgeAngleCheck::Pending
    );
    assert_eq!(
        check_edge_angle(&config, Quadrant::Right, start, pos(150, 250)),
        EdgeAngleCheck::Accepted
    );
    assert_eq!(
        check_edge_angle(&config, Quadrant::Right, start, pos(150, 400)),
        EdgeAngleCheck::Rejected
    );
}

#[test]
fn straight_edge_travel_is_accepted() {
    let config = sample_config();
    assert_eq!(
        check_edge_angle(&config, Quadrant::Up, pos(400, 10), pos(400, 200)),
        EdgeAngleCheck::Accepted
    );
}
