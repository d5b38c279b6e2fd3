//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults reproduce the
//! classic street runner feel; a JSON file can override any subset of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning value `{field}` must be finite and non-negative (got {value})")]
    InvalidValue { field: &'static str, value: f32 },
    #[error("max_speed ({max}) must not be below initial_speed ({initial})")]
    SpeedRange { initial: f32, max: f32 },
    #[error("range `{field}` is empty or inverted ({min}..{max})")]
    EmptyRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("segment_count must be at least 1")]
    NoSegments,
}

/// Inclusive-exclusive range for uniform sampling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map a unit sample in [0, 1) onto the span
    #[inline]
    pub fn sample(&self, t: f32) -> f32 {
        self.min + t * (self.max - self.min)
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Speed ===
    /// Forward speed at the start of a run (units per tick)
    pub initial_speed: f32,
    /// Speed cap
    pub max_speed: f32,
    /// Speed added every tick while playing
    pub acceleration: f32,

    // === Street ===
    /// Number of recycled road segments
    pub segment_count: usize,
    /// Length of one road segment
    pub segment_length: f32,

    // === Player ===
    /// Lateral distance of one lane change
    pub lane_step: f32,
    /// Lane position is clamped to [-lane_limit, lane_limit]
    pub lane_limit: f32,
    /// Tilt target set by a lane change
    pub tilt_target: f32,
    /// Smoothing of current tilt toward the target
    pub tilt_smoothing: f32,
    /// Decay of the target tilt back to upright
    pub tilt_decay: f32,
    pub jump_impulse: f32,
    pub gravity: f32,

    // === Collision & score ===
    /// Distance below which a coin is collected or an obstacle is lethal
    pub pickup_radius: f32,
    pub coin_value: u64,
    /// Raw score added every tick survived
    pub survival_bonus: u64,
    /// Displayed score = raw / score_divisor
    pub score_divisor: u64,

    // === Spawning ===
    pub decorations_per_segment: usize,
    pub obstacles_per_segment: usize,
    pub coins_per_segment: usize,
    /// Distance of buildings from the street center
    pub decoration_offset: Span,
    pub decoration_height: Span,
    pub obstacle_lateral: f32,
    pub obstacle_size: Span,
    pub coin_lateral: f32,
    pub coin_height: f32,

    /// Rebuild the street layout when a new run starts
    pub reset_world_on_restart: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_speed: 0.2,
            max_speed: 1.5,
            acceleration: 0.0005,

            segment_count: 5,
            segment_length: 50.0,

            lane_step: 4.0,
            lane_limit: 4.0,
            tilt_target: 0.2,
            tilt_smoothing: 0.1,
            tilt_decay: 0.05,
            jump_impulse: 0.15,
            gravity: 0.01,

            pickup_radius: 1.5,
            coin_value: 10,
            survival_bonus: 1,
            score_divisor: 10,

            decorations_per_segment: 8,
            obstacles_per_segment: 4,
            coins_per_segment: 6,
            decoration_offset: Span::new(8.0, 16.0),
            decoration_height: Span::new(10.0, 40.0),
            obstacle_lateral: 3.5,
            obstacle_size: Span::new(2.0, 4.0),
            coin_lateral: 3.0,
            coin_height: 1.0,

            reset_world_on_restart: true,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let scalars = [
            ("initial_speed", self.initial_speed),
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("segment_length", self.segment_length),
            ("lane_step", self.lane_step),
            ("lane_limit", self.lane_limit),
            ("tilt_target", self.tilt_target),
            ("tilt_smoothing", self.tilt_smoothing),
            ("tilt_decay", self.tilt_decay),
            ("jump_impulse", self.jump_impulse),
            ("gravity", self.gravity),
            ("pickup_radius", self.pickup_radius),
            ("obstacle_lateral", self.obstacle_lateral),
            ("coin_lateral", self.coin_lateral),
            ("coin_height", self.coin_height),
        ];
        for (field, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::InvalidValue { field, value });
            }
        }

        if self.max_speed < self.initial_speed {
            return Err(TuningError::SpeedRange {
                initial: self.initial_speed,
                max: self.max_speed,
            });
        }

        let spans = [
            ("decoration_offset", self.decoration_offset),
            ("decoration_height", self.decoration_height),
            ("obstacle_size", self.obstacle_size),
        ];
        for (field, span) in spans {
            if !span.min.is_finite() || !span.max.is_finite() || span.min > span.max {
                return Err(TuningError::EmptyRange {
                    field,
                    min: span.min,
                    max: span.max,
                });
            }
        }

        if self.segment_count == 0 || self.segment_length <= 0.0 {
            return Err(TuningError::NoSegments);
        }
        if self.score_divisor == 0 {
            return Err(TuningError::InvalidValue {
                field: "score_divisor",
                value: 0.0,
            });
        }

        Ok(())
    }

    /// Objects and segments behind this z are discarded/recycled
    #[inline]
    pub fn trailing_boundary(&self) -> f32 {
        -self.segment_length
    }

    /// Total length covered by the segment ring
    #[inline]
    pub fn ring_length(&self) -> f32 {
        self.segment_count as f32 * self.segment_length
    }

    /// Nothing is ever spawned at or beyond this z
    #[inline]
    pub fn leading_boundary(&self) -> f32 {
        self.ring_length()
    }
}
