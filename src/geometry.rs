//! Integer geometry shared by the decoders.
//!
//! The arctan fit and the flick tangent boundaries are curve-fit constants that
//! downstream direction classification depends on bit-for-bit.

use fixed::types::U25F7;

use crate::config::GestureConfig;
use crate::types::{FlickDirection, Position, Quadrant};

const ARCTAN_COEFF_A: i32 = 54_595;
const ARCTAN_COEFF_B: i32 = 45_066;
const ARCTAN_COEFF_C: i32 = 47;
const ARCTAN_CODE_MASK: u32 = 0x1FF;

/// tan(22.5°) in 1/128 units.
const TAN_22_5: U25F7 = U25F7::from_bits(53);
/// tan(67.5°) in 1/128 units.
const TAN_67_5: U25F7 = U25F7::from_bits(309);

pub(crate) fn abs_diff(a: u16, b: u16) -> u16 {
    a.abs_diff(b)
}

/// Dominant direction of travel from `prev` to `curr`; the x axis wins ties.
pub fn quadrant(curr: Position, prev: Position) -> Quadrant {
    if abs_diff(curr.x, prev.x) >= abs_diff(curr.y, prev.y) {
        if curr.x >= prev.x {
            Quadrant::Right
        } else {
            Quadrant::Left
        }
    } else if curr.y >= prev.y {
        Quadrant::Up
    } else {
        Quadrant::Down
    }
}

/// Max-norm test: true only when both axis deltas are within `threshold`.
pub fn within_displacement(threshold: u16, a: Position, b: Position) -> bool {
    abs_diff(a.x, b.x) <= threshold && abs_diff(a.y, b.y) <= threshold
}

/// Quadratic fit of atan(y / x) in degrees for `0 <= y <= x`, `x != 0`.
///
/// Ratios below 2/256 fall off the fit and come back as a large code (511),
/// which callers treat as outside any sensible angle limit.
pub fn arctan_octant(x: u32, y: u32) -> u32 {
    let ratio = ((y << 8) / x) as i32;
    let mut angle = -ARCTAN_COEFF_A;
    angle += ARCTAN_COEFF_B * ratio;
    angle -= ARCTAN_COEFF_C * ratio * ratio;
    ((angle * 45) >> 23) as u32 & ARCTAN_CODE_MASK
}

/// Angle in degrees between a displacement and the axis carrying `adjacent`.
///
/// Returned as the raw unsigned code: results from the steep branch can wrap
/// to very large values, which compare as out of range.
pub fn displacement_angle(adjacent: u32, opposite: u32) -> u32 {
    if opposite <= adjacent {
        arctan_octant(adjacent, opposite)
    } else {
        (90i32 - arctan_octant(opposite, adjacent) as i32) as u32
    }
}

/// Eight-way compass classification of a flick from `start` to `end`.
pub fn flick_direction(start: Position, end: Position) -> FlickDirection {
    let dx = U25F7::from_num(abs_diff(end.x, start.x));
    let dy = U25F7::from_num(abs_diff(end.y, start.y));

    if dy <= dx * TAN_22_5 {
        if end.x > start.x {
            FlickDirection::Right
        } else {
            FlickDirection::Left
        }
    } else if dy > dx * TAN_67_5 {
        if end.y > start.y {
            FlickDirection::Up
        } else {
            FlickDirection::Down
        }
    } else {
        match (end.x >= start.x, end.y >= start.y) {
            (true, true) => FlickDirection::UpRight,
            (true, false) => FlickDirection::DownRight,
            (false, true) => FlickDirection::UpLeft,
            (false, false) => FlickDirection::DownLeft,
        }
    }
}

/// Which panel edge band `pos` starts in, expressed as the inward swipe
/// direction. Corners and interior points are `None`.
pub fn edge_of(config: &GestureConfig, pos: Position) -> Option<Quadrant> {
    let x = u32::from(pos.x);
    let y = u32::from(pos.y);
    let res_x = u32::from(config.resolution_x);
    let res_y = u32::from(config.resolution_y);
    let width = u32::from(config.edge_size);

    if y >= width && y < res_y.wrapping_sub(width) {
        if x < width {
            Some(Quadrant::Right)
        } else if x >= res_x.wrapping_sub(width) && x <= res_x {
            Some(Quadrant::Left)
        } else {
            None
        }
    } else if x >= width && x < res_x.wrapping_sub(width) {
        if y < width {
            Some(Quadrant::Up)
        } else if y >= res_y.wrapping_sub(width) && y <= res_y {
            Some(Quadrant::Down)
        } else {
            None
        }
    } else {
        None
    }
}

/// Outcome of checking an edge swipe's travel so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeAngleCheck {
    /// Not enough travel along the inward normal yet.
    Pending,
    Accepted,
    Rejected,
}

pub fn check_edge_angle(
    config: &GestureConfig,
    edge: Quadrant,
    start: Position,
    curr: Position,
) -> EdgeAngleCheck {
    let (opposite, adjacent) = match edge {
        Quadrant::Left | Quadrant::Right => (abs_diff(curr.y, start.y), abs_diff(curr.x, start.x)),
        Quadrant::Up | Quadrant::Down => (abs_diff(curr.x, start.x), abs_diff(curr.y, start.y)),
    };

    if adjacent < config.edge_distance_min {
        return EdgeAngleCheck::Pending;
    }
    if adjacent == 0 {
        return EdgeAngleCheck::Rejected;
    }

    let angle = if opposite != 0 {
        displacement_angle(u32::from(adjacent), u32::from(opposite))
    } else {
        0
    };
    if angle <= u32::from(config.edge_angle_max) {
        EdgeAngleCheck::Accepted
    } else {
        EdgeAngleCheck::Rejected
    }
}

#[cfg(test)]
mod tests;
