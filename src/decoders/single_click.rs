use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DispatchContext, ScanFrame};
use crate::types::{DecoderPhase, GestureKind, Position};

pub(crate) struct SingleClickDecoder {
    machine: statig::blocking::StateMachine<SingleClickHsm>,
}

impl Default for SingleClickDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleClickDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: SingleClickHsm.state_machine(),
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

struct SingleClickHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, Copy)))]
impl SingleClickHsm {
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
        match event.touch_count {
            0 => {
                if context.is_click(event, *start_time, *start) {
                    context.report(GestureKind::OneFingerSingleClick);
                }
                Transition(State::idle())
            }
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

    // A second finger ends the attempt until the panel is clear again.
    #[superstate]
    fn one_finger(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        let _ = (context, event);
        Transition(State::invalid())
    }
}
