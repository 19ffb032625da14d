//! Reduces a cycle's raw detections to the single strongest gesture.

use crate::types::{Detected, GestureKind, GestureSet};

/// Strongest first. Two-finger gestures outrank one-finger motion, which
/// outranks every click.
pub const PRIORITY: [GestureKind; 10] = [
    GestureKind::TwoFingerZoom,
    GestureKind::TwoFingerScroll,
    GestureKind::OneFingerRotate,
    GestureKind::OneFingerEdgeSwipe,
    GestureKind::OneFingerFlick,
    GestureKind::OneFingerScroll,
    GestureKind::TwoFingerSingleClick,
    GestureKind::OneFingerClickDrag,
    GestureKind::OneFingerDoubleClick,
    GestureKind::OneFingerSingleClick,
];

/// Keeps the highest-priority gesture and drops touchdown/liftoff with the
/// rest. A cycle without any gesture is left untouched.
pub fn apply_priority(detected: Detected) -> Detected {
    match PRIORITY
        .iter()
        .copied()
        .find(|kind| detected.gestures.contains(*kind))
    {
        Some(winner) => Detected::only(winner),
        None => detected,
    }
}

/// The gestures a filtered cycle discarded.
pub(crate) fn suppressed(raw: GestureSet, kept: GestureSet) -> GestureSet {
    GestureSet::from_bits_truncate(raw.bits() & !kept.bits())
}

#[cfg(test)]
mod tests;
