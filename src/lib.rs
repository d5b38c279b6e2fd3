//! Street Runner - An endless city-street arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world streaming, collisions, game state)
//! - `renderer`: Top-down canvas drawing of a simulation frame
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Lane-picking bot for headless runs

pub mod autopilot;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Span, Tuning, TuningError};

/// Linear interpolation from `a` toward `b` by factor `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
