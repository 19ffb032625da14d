use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DirectionDebounce, DispatchContext, ScanFrame};
use crate::geometry::quadrant;
use crate::types::{DecoderPhase, GestureKind, Position, Quadrant};

pub(crate) struct TwoFingerScrollDecoder {
    machine: statig::blocking::StateMachine<TwoFingerScrollHsm>,
}

impl Default for TwoFingerScrollDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoFingerScrollDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: TwoFingerScrollHsm.state_machine(),
        }
    }

    pub(crate) fn step(&mut self, frame: &ScanFrame, context: &mut DispatchContext) {
        self.machine.handle_with_context(frame, context);
    }

    pub(crate) fn phase(&self) -> DecoderPhase {
        match self.machine.state() {
            State::Idle { .. } => DecoderPhase::Idle,
            State::SecondTouch { .. } => DecoderPhase::SecondTouch,
        }
    }
}

/// Midpoint of two coordinates along the axis of `direction`.
fn center(direction: Quadrant, a: Position, b: Position) -> u32 {
    let (a, b) = match direction {
        Quadrant::Up | Quadrant::Down => (a.y, b.y),
        Quadrant::Right | Quadrant::Left => (a.x, b.x),
    };
    (u32::from(a) + u32::from(b)) >> 1
}

struct TwoFingerScrollHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, Copy)))]
impl TwoFingerScrollHsm {
    #[state]
    fn idle(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        if event.touch_count == 2 {
            Transition(State::second_touch(
                event.positions,
                DirectionDebounce::new(context.config.scroll_debounce),
            ))
        } else {
            Handled
        }
    }

    #[state]
    fn second_touch(
        anchors: &mut [Position; 2],
        debounce: &mut DirectionDebounce,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        if event.touch_count != 2 {
            return Transition(State::idle());
        }

        let [a, b] = event.positions;
        let direction = quadrant(a, anchors[0]);
        // Fingers travelling in different directions are not a scroll.
        if direction == quadrant(b, anchors[1]) {
            let delta = center(direction, a, b).abs_diff(center(direction, anchors[0], anchors[1]));
            if delta >= u32::from(context.config.scroll_distance_min)
                && debounce.observe(direction, context.config.scroll_debounce)
            {
                context.report(GestureKind::TwoFingerScroll);
                context.directions.two_finger_scroll = Some(direction);
            }
        }
        *anchors = event.positions;
        Handled
    }
}
