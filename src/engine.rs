use core::fmt;

use crate::config::GestureConfig;
use crate::decoders::{
    ClickDragDecoder, DispatchContext, DoubleClickDecoder, EdgeSwipeDecoder, FlickDecoder,
    OneFingerScrollDecoder, RotateDecoder, ScanFrame, SingleClickDecoder, TwoFingerClickDecoder,
    TwoFingerScrollDecoder, ZoomDecoder,
};
use crate::filter;
use crate::telemetry;
use crate::types::{DecoderPhase, Detected, Directions, GestureKind, Position};

/// Touch counts at or above this are treated as noise and restart every decoder.
pub const MULTIPLE_TOUCHES: u8 = 4;

#[derive(Default)]
struct Decoders {
    single_click: SingleClickDecoder,
    double_click: DoubleClickDecoder,
    click_drag: ClickDragDecoder,
    two_finger_click: TwoFingerClickDecoder,
    one_finger_scroll: OneFingerScrollDecoder,
    two_finger_scroll: TwoFingerScrollDecoder,
    edge_swipe: EdgeSwipeDecoder,
    flick: FlickDecoder,
    rotate: RotateDecoder,
    zoom: ZoomDecoder,
}

impl Decoders {
    fn step(&mut self, kind: GestureKind, frame: &ScanFrame, context: &mut DispatchContext) {
        match kind {
            GestureKind::OneFingerSingleClick => self.single_click.step(frame, context),
            GestureKind::OneFingerDoubleClick => self.double_click.step(frame, context),
            GestureKind::OneFingerClickDrag => self.click_drag.step(frame, context),
            GestureKind::TwoFingerSingleClick => self.two_finger_click.step(frame, context),
            GestureKind::OneFingerScroll => self.one_finger_scroll.step(frame, context),
            GestureKind::TwoFingerScroll => self.two_finger_scroll.step(frame, context),
            GestureKind::OneFingerEdgeSwipe => self.edge_swipe.step(frame, context),
            GestureKind::OneFingerFlick => self.flick.step(frame, context),
            GestureKind::OneFingerRotate => self.rotate.step(frame, context),
            GestureKind::TwoFingerZoom => self.zoom.step(frame, context),
        }
    }

    fn phase(&self, kind: GestureKind) -> DecoderPhase {
        match kind {
            GestureKind::OneFingerSingleClick => self.single_click.phase(),
            GestureKind::OneFingerDoubleClick => self.double_click.phase(),
            GestureKind::OneFingerClickDrag => self.click_drag.phase(),
            GestureKind::TwoFingerSingleClick => self.two_finger_click.phase(),
            GestureKind::OneFingerScroll => self.one_finger_scroll.phase(),
            GestureKind::TwoFingerScroll => self.two_finger_scroll.phase(),
            GestureKind::OneFingerEdgeSwipe => self.edge_swipe.phase(),
            GestureKind::OneFingerFlick => self.flick.phase(),
            GestureKind::OneFingerRotate => self.rotate.phase(),
            GestureKind::TwoFingerZoom => self.zoom.phase(),
        }
    }
}

/// Long-lived decoding state for one touch panel.
///
/// Call [`GestureContext::decode`] once per scan cycle and read the outcome
/// back through [`GestureContext::detected`] and [`GestureContext::directions`].
/// The context is not `Sync`-guarded; a panel's scan loop must own it.
pub struct GestureContext {
    timestamp: u32,
    touch_count: u8,
    last_touch_count: u8,
    positions: [Position; 2],
    last_positions: [Position; 2],
    detected: Detected,
    directions: Directions,
    decoders: Decoders,
}

impl Default for GestureContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureContext {
    pub fn new() -> Self {
        Self {
            timestamp: 0,
            touch_count: 0,
            last_touch_count: 0,
            positions: [Position::default(); 2],
            last_positions: [Position::default(); 2],
            detected: Detected::NONE,
            directions: Directions::default(),
            decoders: Decoders::default(),
        }
    }

    /// Returns every decoder to `Idle` and clears outputs, counts and positions.
    pub fn reset_state(&mut self) {
        *self = Self::new();
        telemetry::record_context_reset();
    }

    /// Runs one scan cycle. Only the first two `positions` are tracked; the
    /// second slot is ignored while fewer than two touches are active.
    pub fn decode(
        &mut self,
        timestamp: u32,
        touch_count: u8,
        positions: [Position; 2],
        config: &GestureConfig,
    ) {
        self.detected = Detected::NONE;
        self.directions = Directions::default();

        if self.touch_count >= MULTIPLE_TOUCHES || self.last_touch_count >= MULTIPLE_TOUCHES {
            telemetry::record_multi_touch_reset(self.touch_count, self.last_touch_count);
            self.decoders = Decoders::default();
        }

        self.timestamp = timestamp;
        self.touch_count = touch_count;
        self.positions = positions;

        let frame = ScanFrame {
            timestamp,
            touch_count,
            positions,
            last_positions: self.last_positions,
        };
        let mut context = DispatchContext::new(*config);
        for kind in GestureKind::ALL {
            if config.enabled.contains(kind) {
                self.decoders.step(kind, &frame, &mut context);
            }
        }

        let mut detected = Detected {
            gestures: context.detected,
            touchdown: self.last_touch_count < touch_count,
            liftoff: self.last_touch_count > touch_count,
        };
        if config.filtering {
            let filtered = filter::apply_priority(detected);
            let dropped = filter::suppressed(detected.gestures, filtered.gestures);
            if !dropped.is_empty() {
                telemetry::record_filtered(detected.gestures, filtered.gestures);
            }
            detected = filtered;
        }
        self.detected = detected;
        self.directions = context.directions;
        telemetry::record_cycle(timestamp, &self.detected);

        self.last_touch_count = touch_count;
        self.last_positions = positions;
    }

    pub fn detected(&self) -> Detected {
        self.detected
    }

    pub fn directions(&self) -> Directions {
        self.directions
    }

    pub fn phase(&self, kind: GestureKind) -> DecoderPhase {
        self.decoders.phase(kind)
    }

    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    pub fn touch_count(&self) -> u8 {
        self.touch_count
    }

    pub fn last_touch_count(&self) -> u8 {
        self.last_touch_count
    }

    pub fn positions(&self) -> [Position; 2] {
        self.positions
    }

    pub fn last_positions(&self) -> [Position; 2] {
        self.last_positions
    }
}

impl fmt::Debug for GestureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut phases = [DecoderPhase::Idle; 10];
        for kind in GestureKind::ALL {
            phases[kind.index()] = self.phase(kind);
        }
        f.debug_struct("GestureContext")
            .field("timestamp", &self.timestamp)
            .field("touch_count", &self.touch_count)
            .field("last_touch_count", &self.last_touch_count)
            .field("positions", &self.positions)
            .field("last_positions", &self.last_positions)
            .field("detected", &self.detected)
            .field("directions", &self.directions)
            .field("phases", &phases)
            .finish()
    }
}

#[cfg(test)]
mod tests;
