use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DispatchContext, ScanFrame};
use crate::geometry::within_displacement;
use crate::types::{DecoderPhase, GestureKind, Position};

pub(crate) struct ClickDragDecoder {
    machine: statig::blocking::StateMachine<ClickDragHsm>,
}

impl Default for ClickDragDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickDragDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: ClickDragHsm.state_machine(),
        }
    }

    pub(crate) fn step(&mut self, frame: &ScanFrame, context: &mut DispatchContext) {
        self.machine.handle_with_context(frame, context);
    }

    pub(crate) fn phase(&self) -> DecoderPhase {
        match self.machine.state() {
            State::Idle { .. } => DecoderPhase::Idle,
            State::FirstTouch { .. } => DecoderPhase::FirstTouch,
            State::FirstLiftoff { .. } => DecoderPhase::FirstLiftoff,
            State::SecondTouch { .. } => DecoderPhase::SecondTouch,
            State::Dragging { .. } => DecoderPhase::Detected,
            State::Invalid { .. } => DecoderPhase::Invalid,
        }
    }
}

struct ClickDragHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, Copy)))]
impl ClickDragHsm {
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
                    Transition(State::first_liftoff(event.timestamp, event.last_primary()))
                } else {
                    Transition(State::idle())
                }
            }
            1 => Handled,
            _ => Super,
        }
    }

    #[state(superstate = "one_finger")]
    fn first_liftoff(
        release_time: &mut u32,
        release: &mut Position,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        let config = &context.config;
        let gap = event.elapsed_since(*release_time);
        match event.touch_count {
            // The gap before the dragging press is bounded by the click window.
            0 => {
                if gap > config.click_timeout_max {
                    Transition(State::idle())
                } else {
                    Handled
                }
            }
            1 => {
                let in_window = (config.second_click_interval_min
                    ..=config.second_click_interval_max)
                    .contains(&gap);
                let near = within_displacement(
                    config.second_click_distance_max,
                    event.primary(),
                    *release,
                );
                if in_window && near {
                    Transition(State::second_touch(event.primary()))
                } else {
                    Transition(State::first_touch(event.timestamp, event.primary()))
                }
            }
            _ => Super,
        }
    }

    #[state(superstate = "one_finger")]
    fn second_touch(
        start: &mut Position,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        match event.touch_count {
            // Lifting without travel counts as another tap; wait for the next press.
            0 => Transition(State::first_liftoff(event.timestamp, event.last_primary())),
            1 => {
                if within_displacement(context.config.click_distance_max, event.primary(), *start)
                {
                    Handled
                } else {
                    context.report(GestureKind::OneFingerClickDrag);
                    Transition(State::dragging())
                }
            }
            _ => Super,
        }
    }

    #[state(superstate = "one_finger")]
    fn dragging(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        match event.touch_count {
            0 => Transition(State::idle()),
            1 => {
                context.report(GestureKind::OneFingerClickDrag);
                Handled
            }
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
