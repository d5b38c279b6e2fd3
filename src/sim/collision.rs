//! Object sweep: scroll, pickup, collision and discard in one pass
//!
//! Every object moves toward the player by the current speed. Coins within
//! the pickup radius are collected, obstacles within it end the run, and
//! anything behind the trailing boundary is dropped. Removal happens in a
//! single compacting pass, so an object can never be handled twice.

use glam::Vec3;

use super::world::{ObjectKind, SpawnedObject};
use crate::tuning::Tuning;

/// Outcome of one sweep over the active objects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepReport {
    /// Coins collected this pass
    pub coins: u32,
    /// First obstacle (by spawn order) within reach of the player
    pub hit: Option<u32>,
    /// Objects dropped for scrolling past the trailing boundary
    pub discarded: usize,
}

impl SweepReport {
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.hit.is_some()
    }
}

/// Whether `obj` is close enough to `player` to be collected or to hit
#[inline]
pub fn in_reach(obj: &SpawnedObject, player: Vec3, radius: f32) -> bool {
    obj.pos.distance(player) < radius
}

/// Advance every object by `speed` and resolve contacts with the player
pub fn sweep(
    objects: &mut Vec<SpawnedObject>,
    player: Vec3,
    speed: f32,
    tuning: &Tuning,
) -> SweepReport {
    let trailing = tuning.trailing_boundary();
    let mut report = SweepReport::default();

    objects.retain_mut(|obj| {
        obj.pos.z -= speed;

        if obj.kind.is_collidable() && in_reach(obj, player, tuning.pickup_radius) {
            match obj.kind {
                ObjectKind::Coin => {
                    report.coins += 1;
                    return false;
                }
                ObjectKind::Obstacle { .. } => {
                    report.hit.get_or_insert(obj.id);
                }
                ObjectKind::Decoration { .. } => {}
            }
        }

        if obj.pos.z < trailing {
            report.discarded += 1;
            return false;
        }
        true
    });

    report
}
