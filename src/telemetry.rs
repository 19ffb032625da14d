use core::sync::atomic::{AtomicU32, Ordering};

use crate::types::{Detected, GestureKind, GestureSet};

static DECODE_CYCLES: AtomicU32 = AtomicU32::new(0);
static MULTI_TOUCH_RESETS: AtomicU32 = AtomicU32::new(0);
static CONTEXT_RESETS: AtomicU32 = AtomicU32::new(0);
static FILTERED_CYCLES: AtomicU32 = AtomicU32::new(0);
static GESTURE_REPORTS: [AtomicU32; 10] = [
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
    AtomicU32::new(0),
];

/// Process-wide counters. They are never reset, so compare two snapshots to
/// measure an interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub decode_cycles: u32,
    pub multi_touch_resets: u32,
    pub context_resets: u32,
    /// Cycles where the priority filter dropped at least one gesture.
    pub filtered_cycles: u32,
    /// Indexed by [`GestureKind::index`].
    pub gesture_reports: [u32; 10],
}

impl Snapshot {
    pub fn reports(&self, kind: GestureKind) -> u32 {
        self.gesture_reports[kind.index()]
    }
}

pub fn snapshot() -> Snapshot {
    let mut gesture_reports = [0; 10];
    for (slot, counter) in gesture_reports.iter_mut().zip(GESTURE_REPORTS.iter()) {
        *slot = counter.load(Ordering::Relaxed);
    }
    Snapshot {
        decode_cycles: DECODE_CYCLES.load(Ordering::Relaxed),
        multi_touch_resets: MULTI_TOUCH_RESETS.load(Ordering::Relaxed),
        context_resets: CONTEXT_RESETS.load(Ordering::Relaxed),
        filtered_cycles: FILTERED_CYCLES.load(Ordering::Relaxed),
        gesture_reports,
    }
}

pub(crate) fn record_context_reset() {
    saturating_increment(&CONTEXT_RESETS);
    #[cfg(feature = "telemetry-defmt")]
    defmt::debug!("telemetry gesture_context_reset");
}

pub(crate) fn record_multi_touch_reset(_touch_count: u8, _last_touch_count: u8) {
    saturating_increment(&MULTI_TOUCH_RESETS);
    #[cfg(feature = "telemetry-defmt")]
    defmt::debug!(
        "telemetry multi_touch_reset count={=u8} last={=u8}",
        _touch_count,
        _last_touch_count,
    );
}

pub(crate) fn record_filtered(_raw: GestureSet, _kept: GestureSet) {
    saturating_increment(&FILTERED_CYCLES);
    #[cfg(feature = "telemetry-defmt")]
    defmt::trace!(
        "telemetry gesture_filtered raw={=u16:#x} kept={=u16:#x}",
        _raw.bits(),
        _kept.bits(),
    );
}

pub(crate) fn record_cycle(_timestamp: u32, detected: &Detected) {
    saturating_increment(&DECODE_CYCLES);
    for kind in detected.gestures.iter() {
        saturating_increment(&GESTURE_REPORTS[kind.index()]);
        #[cfg(feature = "telemetry-defmt")]
        defmt::trace!(
            "telemetry gesture_detected t={=u32} kind={=str}",
            _timestamp,
            kind.label(),
        );
    }
}

fn saturating_increment(counter: &AtomicU32) {
    let _ = counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
        Some(current.saturating_add(1))
    });
}
