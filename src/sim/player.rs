//! The runner: lane offset, jump physics and lean-into-turn tilt

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::lerp;
use crate::tuning::Tuning;

/// The player's runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Lateral offset from the street center, clamped to the lane limit
    pub lane: f32,
    /// Height above the road (never negative)
    pub height: f32,
    pub vertical_vel: f32,
    /// Current sideways lean (radians)
    pub tilt: f32,
    /// Lean the tilt is easing toward; decays back to upright
    pub target_tilt: f32,
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: 0.0,
            height: 0.0,
            vertical_vel: 0.0,
            tilt: 0.0,
            target_tilt: 0.0,
            grounded: true,
        }
    }
}

impl Player {
    /// Position used for collision tests (the runner never moves along z)
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.lane, self.height, 0.0)
    }

    pub fn move_left(&mut self, tuning: &Tuning) {
        self.lane = (self.lane - tuning.lane_step).max(-tuning.lane_limit);
        self.target_tilt = -tuning.tilt_target;
    }

    pub fn move_right(&mut self, tuning: &Tuning) {
        self.lane = (self.lane + tuning.lane_step).min(tuning.lane_limit);
        self.target_tilt = tuning.tilt_target;
    }

    /// Start a jump; ignored while airborne
    pub fn jump(&mut self, tuning: &Tuning) {
        if !self.grounded {
            return;
        }
        self.vertical_vel = tuning.jump_impulse;
        self.grounded = false;
    }

    /// Integrate gravity and ease the tilt for one step
    pub fn tick(&mut self, tuning: &Tuning) {
        self.height += self.vertical_vel;
        self.vertical_vel -= tuning.gravity;
        if self.height <= 0.0 {
            self.height = 0.0;
            self.vertical_vel = 0.0;
            self.grounded = true;
        }

        self.tilt = lerp(self.tilt, self.target_tilt, tuning.tilt_smoothing);
        self.target_tilt = lerp(self.target_tilt, 0.0, tuning.tilt_decay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_changes_clamp() {
        let tuning = Tuning::default();
        let mut player = Player::default();

        player.move_left(&tuning);
        assert_eq!(player.lane, -4.0);
        assert_eq!(player.target_tilt, -0.2);
        player.move_left(&tuning);
        assert_eq!(player.lane, -4.0);

        player.move_right(&tuning);
        player.move_right(&tuning);
        player.move_right(&tuning);
        assert_eq!(player.lane, 4.0);
        assert_eq!(player.target_tilt, 0.2);
    }

    #[test]
    fn test_jump_arc_lands() {
        let tuning = Tuning::default();
        let mut player = Player::default();

        player.jump(&tuning);
        assert_eq!(player.vertical_vel, 0.15);
        assert!(!player.grounded);

        let mut peak: f32 = 0.0;
        let mut ticks = 0;
        while !player.grounded {
            player.tick(&tuning);
            peak = peak.max(player.height);
            ticks += 1;
            assert!(ticks < 100, "jump never landed");
        }
        assert_eq!(player.height, 0.0);
        assert_eq!(player.vertical_vel, 0.0);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_no_double_jump() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        player.jump(&tuning);
        player.tick(&tuning);
        let vel = player.vertical_vel;
        player.jump(&tuning);
        assert_eq!(player.vertical_vel, vel);
    }

    #[test]
    fn test_grounded_player_stays_put() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        for _ in 0..10 {
            player.tick(&tuning);
        }
        assert_eq!(player.height, 0.0);
        assert_eq!(player.vertical_vel, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_tilt_leans_then_recovers() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        player.move_right(&tuning);

        player.tick(&tuning);
        assert!(player.tilt > 0.0 && player.tilt < 0.2);
        assert!(player.target_tilt < 0.2);

        for _ in 0..300 {
            player.tick(&tuning);
        }
        assert!(player.tilt.abs() < 1e-3);
        assert!(player.target_tilt.abs() < 1e-3);
    }
}
