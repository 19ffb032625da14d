use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DispatchContext, ScanFrame};
use crate::geometry::within_displacement;
use crate::types::{DecoderPhase, GestureKind, Position};

pub(crate) struct TwoFingerClickDecoder {
    machine: statig::blocking::StateMachine<TwoFingerClickHsm>,
}

impl Default for TwoFingerClickDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoFingerClickDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: TwoFingerClickHsm.state_machine(),
        }
    }

    pub(crate) fn step(&mut self, frame: &ScanFrame, context: &mut DispatchContext) {
        self.machine.handle_with_context(frame, context);
    }

    pub(crate) fn phase(&self) -> DecoderPhase {
        match self.machine.state() {
            State::Idle { .. } => DecoderPhase::Idle,
            State::FirstTouch { .. } => DecoderPhase::FirstTouch,
            State::SecondTouch { .. } => DecoderPhase::SecondTouch,
            State::FirstLiftoff { .. } => DecoderPhase::FirstLiftoff,
            State::Invalid { .. } => DecoderPhase::Invalid,
        }
    }
}

/// Press origin of one finger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Press {
    at: u32,
    pos: Position,
}

impl Press {
    fn new(at: u32, pos: Position) -> Self {
        Self { at, pos }
    }
}

fn timed_out(context: &DispatchContext, event: &ScanFrame, press: &Press) -> bool {
    event.elapsed_since(press.at) > context.config.click_timeout_max
}

fn strayed(context: &DispatchContext, current: Position, press: &Press) -> bool {
    !within_displacement(context.config.click_distance_max, current, press.pos)
}

struct TwoFingerClickHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, Copy)))]
impl TwoFingerClickHsm {
    #[state(superstate = "two_finger")]
    fn idle(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        let _ = context;
        let first = Press::new(event.timestamp, event.primary());
        match event.touch_count {
            0 => Handled,
            1 => Transition(State::first_touch(first)),
            2 => Transition(State::second_touch(
                first,
                Press::new(event.timestamp, event.secondary()),
            )),
            _ => Super,
        }
    }

    #[state(superstate = "two_finger")]
    fn first_touch(
        first: &mut Press,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        match event.touch_count {
            0 => Transition(State::idle()),
            1 if timed_out(context, event, first) => Transition(State::invalid()),
            1 => Handled,
            2 if timed_out(context, event, first) => Transition(State::invalid()),
            2 => {
                // The first finger's clock keeps running; only its origin moves.
                let first = Press::new(first.at, event.primary());
                let second = Press::new(event.timestamp, event.secondary());
                Transition(State::second_touch(first, second))
            }
            _ => Super,
        }
    }

    #[state(superstate = "two_finger")]
    fn second_touch(
        first: &mut Press,
        second: &mut Press,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        match event.touch_count {
            0 => {
                let first_ok =
                    context.is_click_at(event, first.at, first.pos, event.last_primary());
                let second_ok =
                    context.is_click_at(event, second.at, second.pos, event.last_secondary());
                if first_ok && second_ok {
                    context.report(GestureKind::TwoFingerSingleClick);
                }
                Transition(State::idle())
            }
            1 => {
                if timed_out(context, event, first) {
                    Transition(State::invalid())
                } else {
                    Transition(State::first_liftoff(Press::new(first.at, event.primary())))
                }
            }
            2 => {
                let first_bad = timed_out(context, event, first)
                    || strayed(context, event.primary(), first);
                let second_bad = timed_out(context, event, second)
                    || strayed(context, event.secondary(), second);
                if first_bad || second_bad {
                    Transition(State::invalid())
                } else {
                    Handled
                }
            }
            _ => Super,
        }
    }

    #[state(superstate = "two_finger")]
    fn first_liftoff(
        remaining: &mut Press,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        match event.touch_count {
            0 => {
                if context.is_click(event, remaining.at, remaining.pos) {
                    context.report(GestureKind::TwoFingerSingleClick);
                }
                Transition(State::idle())
            }
            1 if timed_out(context, event, remaining) => Transition(State::invalid()),
            1 => Handled,
            _ => Transition(State::invalid()),
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

    // Three or more fingers.
    #[superstate]
    fn two_finger(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        let _ = (context, event);
        Transition(State::invalid())
    }
}
