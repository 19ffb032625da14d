use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DispatchContext, ScanFrame};
use crate::geometry::abs_diff;
use crate::types::{DecoderPhase, GestureKind, Zoom};

pub(crate) struct ZoomDecoder {
    machine: statig::blocking::StateMachine<ZoomHsm>,
}

impl Default for ZoomDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: ZoomHsm.state_machine(),
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
            State::Invalid { .. } => DecoderPhase::Invalid,
        }
    }
}

/// Per-axis separation of the two touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Spread {
    pub(super) dx: u16,
    pub(super) dy: u16,
}

impl Spread {
    fn of(event: &ScanFrame) -> Self {
        let [a, b] = event.positions;
        Self {
            dx: abs_diff(a.x, b.x),
            dy: abs_diff(a.y, b.y),
        }
    }
}

/// Either axis growing past the threshold wins over any shrinking.
pub(super) fn classify(reference: Spread, current: Spread, distance_min: u16) -> Option<Zoom> {
    let min = i32::from(distance_min);
    let delta_x = i32::from(current.dx) - i32::from(reference.dx);
    let delta_y = i32::from(current.dy) - i32::from(reference.dy);

    if delta_x > min || delta_y > min {
        Some(Zoom::In)
    } else if delta_x < 0 {
        (-delta_x > min).then_some(Zoom::Out)
    } else if delta_y < 0 {
        (-delta_y > min).then_some(Zoom::Out)
    } else {
        None
    }
}

struct ZoomHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone, Copy)))]
impl ZoomHsm {
    #[state(superstate = "two_finger")]
    fn idle(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        match event.touch_count {
            0 => Handled,
            1 => Transition(State::first_touch()),
            2 => Transition(State::second_touch(
                Spread::of(event),
                context.config.zoom_debounce,
            )),
            _ => Super,
        }
    }

    #[state(superstate = "two_finger")]
    fn first_touch(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        match event.touch_count {
            0 => Transition(State::idle()),
            1 => Handled,
            2 => Transition(State::second_touch(
                Spread::of(event),
                context.config.zoom_debounce,
            )),
            _ => Super,
        }
    }

    #[state(superstate = "two_finger")]
    fn second_touch(
        reference: &mut Spread,
        debounce: &mut u8,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        match event.touch_count {
            0 => Transition(State::idle()),
            1 => Transition(State::first_touch()),
            2 => {
                let current = Spread::of(event);
                let distance_min = context.config.zoom_distance_min;
                if let Some(zoom) = classify(*reference, current, distance_min) {
                    *reference = current;
                    // A zero debounce setting disables reporting altogether.
                    if context.config.zoom_debounce != 0 {
                        *debounce = debounce.saturating_sub(1);
                        if *debounce == 0 {
                            context.report(GestureKind::TwoFingerZoom);
                            context.directions.zoom = Some(zoom);
                        }
                    }
                }
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
    fn two_finger(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        let _ = (context, event);
        Transition(State::invalid())
    }
}

