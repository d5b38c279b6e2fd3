//! Colors for the canvas renderer

pub const GRASS: &str = "#4f7a3a";
pub const ROAD: &str = "#333333";
pub const ROAD_ALT: &str = "#3b3b3b";
pub const BUILDING: &str = "#808080";
pub const OBSTACLE: &str = "#ff0000";
pub const COIN: &str = "#ffd700";
pub const PLAYER: &str = "#00ff00";
pub const PLAYER_HEAD: &str = "#ffcc99";

/// Lane marking color by speed (slow=white, medium=yellow, fast=red)
pub fn speed_color(speed: f32, min_speed: f32, max_speed: f32) -> String {
    let span = (max_speed - min_speed).max(f32::EPSILON);
    let t = ((speed - min_speed) / span).clamp(0.0, 1.0);

    let (r, g, b) = if t < 0.5 {
        // White to yellow
        let u = t / 0.5;
        (1.0, 1.0, 1.0 - 0.8 * u)
    } else {
        // Yellow to red
        let u = (t - 0.5) / 0.5;
        (1.0, 1.0 - 0.8 * u, 0.2)
    };

    format!(
        "rgb({}, {}, {})",
        (r * 255.0_f32).round() as u8,
        (g * 255.0_f32).round() as u8,
        (b * 255.0_f32).round() as u8
    )
}
