//! Gesture recognition for capacitive multi-touch panels.
//!
//! Each scan cycle feeds a timestamp, a touch count and up to two positions into
//! a [`GestureContext`]. Ten independent decoders turn that stream into clicks,
//! drags, scrolls, flicks, edge swipes, zooms and rotations, and an optional
//! priority filter narrows each cycle to a single winner.

#![cfg_attr(not(test), no_std)]

pub mod config;
mod decoders;
pub mod engine;
pub mod filter;
pub mod geometry;
pub mod telemetry;
pub mod types;

pub use config::{active_config, GestureConfig, GestureConfigError};
pub use engine::GestureContext;
pub use types::{
    DecoderPhase, Detected, Directions, FlickDirection, GestureKind, GestureSet, Position,
    Quadrant, Rotation, Zoom,
};
