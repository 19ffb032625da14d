use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DirectionDebounce, DispatchContext, ScanFrame};
use crate::geometry::{abs_diff, quadrant};
use crate::types::{DecoderPhase, GestureKind, Position, Quadrant};

pub(crate) struct OneFingerScrollDecoder {
    machine: statig::blocking::StateMachine<OneFingerScrollHsm>,
}

impl Default for OneFingerScrollDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl OneFingerScrollDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: OneFingerScrollHsm.state_machine(),
        }
    }

    pub(crate) fn step(&mut self, frame: &ScanFrame, context: &mut DispatchContext) {
        self.machine.handle_with_context(frame, context);
    }

    pub(crate) fn phase(&self) -> DecoderPhase {
        match self.machine.state() {
            State::Idle { .. } => DecoderPhase::Idle,
            State::FirstTouch { .. } => DecoderPhase::FirstTouch,
        }
    }
}

struct OneFingerScrollHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, Copy)))]
impl OneFingerScrollHsm {
    #[state]
    fn idle(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        if event.touch_count == 1 {
            Transition(State::first_touch(
                event.primary(),
                DirectionDebounce::new(context.config.scroll_debounce),
            ))
        } else {
            Handled
        }
    }

    // The anchor follows the finger, so each cycle measures only its own step.
    #[state]
    fn first_touch(
        anchor: &mut Position,
        debounce: &mut DirectionDebounce,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        if event.touch_count != 1 {
            return Transition(State::idle());
        }

        let pos = event.primary();
        let direction = quadrant(pos, *anchor);
        let delta = match direction {
            Quadrant::Up | Quadrant::Down => abs_diff(pos.y, anchor.y),
            Quadrant::Right | Quadrant::Left => abs_diff(pos.x, anchor.x),
        };

        if delta >= context.config.scroll_distance_min
            && debounce.observe(direction, context.config.scroll_debounce)
        {
            context.report(GestureKind::OneFingerScroll);
            context.directions.one_finger_scroll = Some(direction);
        }
        *anchor = pos;
        Handled
    }
}
