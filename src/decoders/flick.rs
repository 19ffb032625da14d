use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DispatchContext, ScanFrame};
use crate::geometry::{abs_diff, flick_direction};
use crate::types::{DecoderPhase, GestureKind, Position};

pub(crate) struct FlickDecoder {
    machine: statig::blocking::StateMachine<FlickHsm>,
}

impl Default for FlickDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlickDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: FlickHsm.state_machine(),
        }
    }

    pub(crate) fn step(&mut self, frame: &ScanFrame, context: &mut DispatchContext) {
        self.machine.handle_with_context(frame, context);
    }

    pub(crate) fn phase(&self) -> DecoderPhase {
        match self.machine.state() {
            State::Idle { .. } => DecoderPhase::Idle,
            State::FirstTouch { .. } => DecoderPhase::FirstTouch,
            State::Invalid { .. } => DecoderPhase::Invalid,
        }
    }
}

struct FlickHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, Copy)))]
impl FlickHsm {
    #[state(superstate = "one_finger")]
    fn idle(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        let _ = context;
        match event.touch_count {
            0 => Handled,
            1 => Transition(State::first_touch(event.timestamp, event.primary())),
            _ => Super,
        }
    }

    #[state(superstate = "one_finger")]
    fn first_touch(
        start_time: &mut u32,
        start: &mut Position,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        let config = &context.config;
        let duration = event.elapsed_since(*start_time);
        match event.touch_count {
            0 => {
                let end = event.last_primary();
                let far_enough = abs_diff(end.x, start.x) >= config.flick_distance_min
                    || abs_diff(end.y, start.y) >= config.flick_distance_min;
                if duration <= config.flick_timeout_max && far_enough {
                    context.directions.flick = Some(flick_direction(*start, end));
                    context.report(GestureKind::OneFingerFlick);
                }
                Transition(State::idle())
            }
            1 if duration > config.flick_timeout_max => Transition(State::invalid()),
            1 => Handled,
            _ => Super,
        }
    }

    #[state]
    fn invalid(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        let _ = context;
        if event.touch_count == 0 {
            Transition(State::idle())
        } else {
            Handled
        }
    }

    #[superstate]
    fn one_finger(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        let _ = (context, event);
        Transition(State::invalid())
    }
}
