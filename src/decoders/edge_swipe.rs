use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DispatchContext, ScanFrame};
use crate::geometry::{check_edge_angle, edge_of, EdgeAngleCheck};
use crate::types::{DecoderPhase, GestureKind, Position, Quadrant};

pub(crate) struct EdgeSwipeDecoder {
    machine: statig::blocking::StateMachine<EdgeSwipeHsm>,
}

impl Default for EdgeSwipeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeSwipeDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: EdgeSwipeHsm.state_machine(),
        }
    }

    pub(crate) fn step(&mut self, frame: &ScanFrame, context: &mut DispatchContext) {
        self.machine.handle_with_context(frame, context);
    }

    pub(crate) fn phase(&self) -> DecoderPhase {
        match self.machine.state() {
            State::Idle { .. } => DecoderPhase::Idle,
            State::FirstTouch { .. } => DecoderPhase::FirstTouch,
            State::Detected { .. } => DecoderPhase::Detected,
            State::Invalid { .. } => DecoderPhase::Invalid,
        }
    }
}

struct EdgeSwipeHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, Copy)))]
impl EdgeSwipeHsm {
    #[state(superstate = "one_finger")]
    fn idle(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        match event.touch_count {
            0 => Handled,
            1 => match edge_of(&context.config, event.primary()) {
                Some(edge) => Transition(State::first_touch(
                    event.timestamp,
                    event.primary(),
                    edge,
                )),
                None => Transition(State::invalid()),
            },
            _ => Super,
        }
    }

    #[state(superstate = "one_finger")]
    fn first_touch(
        start_time: &mut u32,
        start: &mut Position,
        edge: &mut Quadrant,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        match event.touch_count {
            0 => Transition(State::idle()),
            1 => {
                if event.elapsed_since(*start_time) > context.config.edge_timeout_max {
                    return Transition(State::invalid());
                }
                match check_edge_angle(&context.config, *edge, *start, event.primary()) {
                    EdgeAngleCheck::Pending => Handled,
                    EdgeAngleCheck::Rejected => Transition(State::invalid()),
                    EdgeAngleCheck::Accepted => {
                        context.report(GestureKind::OneFingerEdgeSwipe);
                        context.directions.edge_swipe = Some(*edge);
                        Transition(State::detected())
                    }
                }
            }
            _ => Super,
        }
    }

    // Reported once on acceptance; the rest of the hold belongs to other gestures.
    #[state(superstate = "one_finger")]
    fn detected(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        let _ = context;
        match event.touch_count {
            0 => Transition(State::idle()),
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
