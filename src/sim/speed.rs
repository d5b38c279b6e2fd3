//! Forward speed ramp

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current forward speed, ramped linearly toward a cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedController {
    pub current: f32,
    pub initial: f32,
    pub max: f32,
    pub acceleration: f32,
}

impl SpeedController {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            current: tuning.initial_speed,
            initial: tuning.initial_speed,
            max: tuning.max_speed,
            acceleration: tuning.acceleration,
        }
    }

    /// Advance one simulation step
    #[inline]
    pub fn tick(&mut self) {
        self.current = (self.current + self.acceleration).min(self.max);
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    pub fn at_max(&self) -> bool {
        self.current >= self.max
    }
}
