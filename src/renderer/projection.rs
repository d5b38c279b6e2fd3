//! World-to-canvas mapping for the top-down view
//!
//! Canvas x follows world x (lateral). Canvas y runs up the street: the
//! near edge of the view sits at the bottom of the canvas.

use glam::Vec2;

/// Lateral half-width of the visible street area (world units)
pub const VIEW_HALF_WIDTH: f32 = 20.0;
/// Nearest visible z (behind the runner)
pub const VIEW_NEAR: f32 = -10.0;
/// Farthest visible z
pub const VIEW_FAR: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub width: f32,
    pub height: f32,
}

impl Projection {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixels per world unit along x
    #[inline]
    pub fn scale_x(&self) -> f32 {
        self.width / (2.0 * VIEW_HALF_WIDTH)
    }

    /// Pixels per world unit along z
    #[inline]
    pub fn scale_z(&self) -> f32 {
        self.height / (VIEW_FAR - VIEW_NEAR)
    }

    /// Map a world (x, z) ground position to canvas pixels
    pub fn to_screen(&self, x: f32, z: f32) -> Vec2 {
        Vec2::new(
            self.width / 2.0 + x * self.scale_x(),
            self.height - (z - VIEW_NEAR) * self.scale_z(),
        )
    }

    /// Whether anything spanning [z_min, z_max] is on screen
    pub fn is_visible(&self, z_min: f32, z_max: f32) -> bool {
        z_max >= VIEW_NEAR && z_min <= VIEW_FAR
    }
}
