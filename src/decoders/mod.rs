//! One `statig` state machine per gesture. Every machine sees the same
//! [`ScanFrame`] each cycle and reports into a shared [`DispatchContext`].

mod click_drag;
mod double_click;
mod edge_swipe;
mod flick;
mod one_finger_scroll;
mod rotate;
mod single_click;
mod two_finger_click;
mod two_finger_scroll;
mod zoom;

pub(crate) use click_drag::ClickDragDecoder;
pub(crate) use double_click::DoubleClickDecoder;
pub(crate) use edge_swipe::EdgeSwipeDecoder;
pub(crate) use flick::FlickDecoder;
pub(crate) use one_finger_scroll::OneFingerScrollDecoder;
pub(crate) use rotate::RotateDecoder;
pub(crate) use single_click::SingleClickDecoder;
pub(crate) use two_finger_click::TwoFingerClickDecoder;
pub(crate) use two_finger_scroll::TwoFingerScrollDecoder;
pub(crate) use zoom::ZoomDecoder;

use crate::config::GestureConfig;
use crate::geometry::within_displacement;
use crate::types::{Directions, GestureKind, GestureSet, Position, Quadrant};

/// Everything a decoder may look at for one scan cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScanFrame {
    pub(crate) timestamp: u32,
    pub(crate) touch_count: u8,
    pub(crate) positions: [Position; 2],
    pub(crate) last_positions: [Position; 2],
}

impl ScanFrame {
    pub(crate) fn elapsed_since(&self, start: u32) -> u32 {
        self.timestamp.wrapping_sub(start)
    }

    pub(crate) fn primary(&self) -> Position {
        self.positions[0]
    }

    pub(crate) fn secondary(&self) -> Position {
        self.positions[1]
    }

    /// Primary position on the previous cycle, i.e. where a finger lifted.
    pub(crate) fn last_primary(&self) -> Position {
        self.last_positions[0]
    }

    pub(crate) fn last_secondary(&self) -> Position {
        self.last_positions[1]
    }
}

/// Debounce counter that restarts whenever the direction of travel changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DirectionDebounce {
    direction: Option<Quadrant>,
    remaining: u8,
}

impl DirectionDebounce {
    pub(crate) fn new(reload: u8) -> Self {
        Self {
            direction: None,
            remaining: reload,
        }
    }

    /// Counts one qualifying movement; true once the count has run out.
    pub(crate) fn observe(&mut self, direction: Quadrant, reload: u8) -> bool {
        if self.direction != Some(direction) {
            self.remaining = reload;
            self.direction = Some(direction);
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

pub(crate) struct DispatchContext {
    pub(crate) config: GestureConfig,
    pub(crate) detected: GestureSet,
    pub(crate) directions: Directions,
}

impl DispatchContext {
    pub(crate) fn new(config: GestureConfig) -> Self {
        Self {
            config,
            detected: GestureSet::EMPTY,
            directions: Directions::default(),
        }
    }

    pub(crate) fn report(&mut self, kind: GestureKind) {
        self.detected.insert(kind);
    }

    /// A press that lifted after `start_time` qualifies as a click.
    pub(crate) fn is_click(&self, frame: &ScanFrame, start_time: u32, start: Position) -> bool {
        self.is_click_at(frame, start_time, start, frame.last_primary())
    }

    pub(crate) fn is_click_at(
        &self,
        frame: &ScanFrame,
        start_time: u32,
        start: Position,
        release: Position,
    ) -> bool {
        let duration = frame.elapsed_since(start_time);
        (self.config.click_timeout_min..=self.config.click_timeout_max).contains(&duration)
            && within_displacement(self.config.click_distance_max, release, start)
    }
}
