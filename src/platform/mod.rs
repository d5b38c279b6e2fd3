//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names -> simulation commands)
//! - Frame scheduling and DOM updates (wasm32 only)

pub mod keymap;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use keymap::command_for_key;
