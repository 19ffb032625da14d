use heapless::Deque;
use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{DispatchContext, ScanFrame};
use crate::geometry::{abs_diff, quadrant};
use crate::types::{DecoderPhase, GestureKind, Position, Quadrant, Rotation};

const HISTORY_LEN: usize = 4;

const CLOCKWISE: [Quadrant; HISTORY_LEN] =
    [Quadrant::Up, Quadrant::Right, Quadrant::Down, Quadrant::Left];
const COUNTER_CLOCKWISE: [Quadrant; HISTORY_LEN] =
    [Quadrant::Up, Quadrant::Left, Quadrant::Down, Quadrant::Right];

/// The last four distinct directions of travel, oldest first.
#[derive(Clone, Debug)]
pub(crate) struct RotateHistory {
    entries: Deque<Quadrant, HISTORY_LEN>,
}

impl RotateHistory {
    pub(crate) fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    pub(crate) fn last(&self) -> Option<Quadrant> {
        self.entries.back().copied()
    }

    /// Appends `direction` if it differs from the newest entry.
    ///
    /// Returns `false` for a repeat. A fresh history is first padded with
    /// filler symbols chosen so the opening direction never looks like a repeat
    /// and never completes a circle on its own.
    pub(crate) fn record(&mut self, direction: Quadrant) -> bool {
        if self.entries.is_empty() {
            for filler in lead_in(direction) {
                self.push(filler);
            }
        } else if self.last() == Some(direction) {
            return false;
        }
        self.push(direction);
        true
    }

    fn push(&mut self, direction: Quadrant) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Capacity was freed above.
        let _ = self.entries.push_back(direction);
    }

    /// Rotation traced by the window, if it holds one full turn in order.
    pub(crate) fn rotation(&self) -> Option<Rotation> {
        if self.entries.len() < HISTORY_LEN {
            return None;
        }
        let mut window = [Quadrant::Up; HISTORY_LEN];
        for (slot, entry) in window.iter_mut().zip(self.entries.iter()) {
            *slot = *entry;
        }
        if is_cyclic_shift(&window, &CLOCKWISE) {
            Some(Rotation::Clockwise)
        } else if is_cyclic_shift(&window, &COUNTER_CLOCKWISE) {
            Some(Rotation::CounterClockwise)
        } else {
            None
        }
    }

    /// Two-bit codes packed oldest-first into one byte; empty slots read as 0.
    #[cfg(test)]
    pub(crate) fn word(&self) -> u8 {
        self.entries
            .iter()
            .fold(0u8, |word, entry| (word << 2) | entry.code())
    }
}

impl Default for RotateHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn lead_in(first: Quadrant) -> [Quadrant; HISTORY_LEN - 1] {
    use Quadrant::{Down as D, Left as L, Right as R, Up as U};
    match first {
        U => [U, U, R],
        D => [U, U, L],
        R => [U, D, U],
        L => [U, D, D],
    }
}

fn is_cyclic_shift(window: &[Quadrant; HISTORY_LEN], order: &[Quadrant; HISTORY_LEN]) -> bool {
    (0..HISTORY_LEN).any(|shift| {
        window
            .iter()
            .enumerate()
            .all(|(i, entry)| *entry == order[(i + shift) % HISTORY_LEN])
    })
}

pub(crate) struct RotateDecoder {
    machine: statig::blocking::StateMachine<RotateHsm>,
}

impl Default for RotateDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RotateDecoder {
    pub(crate) fn new() -> Self {
        Self {
            machine: RotateHsm.state_machine(),
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

struct RotateHsm;

#[state_machine(initial = "State::idle()", state(derive(Debug, Clone)))]
impl RotateHsm {
    #[state(superstate = "one_finger")]
    fn idle(context: &mut DispatchContext, event: &ScanFrame) -> Outcome<State> {
        match event.touch_count {
            0 => Handled,
            1 => Transition(State::first_touch(
                event.primary(),
                context.config.rotate_debounce,
                RotateHistory::new(),
            )),
            _ => Super,
        }
    }

    #[state(superstate = "one_finger")]
    fn first_touch(
        anchor: &mut Position,
        debounce: &mut u8,
        history: &mut RotateHistory,
        context: &mut DispatchContext,
        event: &ScanFrame,
    ) -> Outcome<State> {
        match event.touch_count {
            0 => Transition(State::idle()),
            1 => {
                let pos = event.primary();
                let distance_min = context.config.rotate_distance_min;
                if abs_diff(pos.x, anchor.x) < distance_min
                    && abs_diff(pos.y, anchor.y) < distance_min
                {
                    return Handled;
                }

                let direction = quadrant(pos, *anchor);
                *anchor = pos;
                if history.record(direction) {
                    *debounce = context.config.rotate_debounce;
                    if let Some(rotation) = history.rotation() {
                        context.report(GestureKind::OneFingerRotate);
                        context.directions.rotate = Some(rotation);
                    }
                    Handled
                } else if context.config.rotate_debounce == 0 {
                    Handled
                } else if *debounce != 0 {
                    *debounce -= 1;
                    Handled
                } else {
                    // Too many steps in one direction for a circle.
                    Transition(State::invalid())
                }
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
