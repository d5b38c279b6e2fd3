//! Top-down 2D rendering of a simulation frame
//!
//! The simulation never draws; the renderer reads a `FrameView` snapshot.

pub mod palette;
pub mod projection;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use projection::Projection;
