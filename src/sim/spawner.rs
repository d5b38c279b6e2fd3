//! Randomized population of a road segment
//!
//! Placement is uniform and independent per object. Overlaps are allowed;
//! nothing enforces spacing between spawns.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::world::{ObjectKind, SpawnedObject};
use crate::tuning::Tuning;

/// Map a unit sample onto [origin, origin + length)
///
/// f32 rounding can carry `origin + t * length` up to the segment end when
/// `t` is just below 1, so the result is pulled back under it.
#[inline]
pub fn place_along(origin: f32, t: f32, length: f32) -> f32 {
    let end = origin + length;
    let last = end - end.abs().max(1.0) * f32::EPSILON;
    (origin + t * length).min(last)
}

/// Seeded object factory for road segments
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Pick -1 or +1 with equal odds
    fn side(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { -1.0 } else { 1.0 }
    }

    /// Longitudinal placement inside the segment starting at `origin`
    fn along(&mut self, origin: f32, tuning: &Tuning) -> f32 {
        place_along(origin, self.rng.random(), tuning.segment_length)
    }

    fn make(&mut self, kind: ObjectKind, pos: Vec3) -> SpawnedObject {
        SpawnedObject {
            id: self.next_entity_id(),
            kind,
            pos,
        }
    }

    /// Spawn the full batch (buildings, obstacles, coins) for one segment
    pub fn populate(&mut self, origin: f32, tuning: &Tuning, out: &mut Vec<SpawnedObject>) {
        out.reserve(
            tuning.decorations_per_segment + tuning.obstacles_per_segment + tuning.coins_per_segment,
        );

        for _ in 0..tuning.decorations_per_segment {
            let height = tuning.decoration_height.sample(self.rng.random());
            let x = self.side() * tuning.decoration_offset.sample(self.rng.random());
            let z = self.along(origin, tuning);
            let obj = self.make(ObjectKind::Decoration { height }, Vec3::new(x, height / 2.0, z));
            out.push(obj);
        }

        for _ in 0..tuning.obstacles_per_segment {
            let size = tuning.obstacle_size.sample(self.rng.random());
            let x = self.side() * tuning.obstacle_lateral;
            let z = self.along(origin, tuning);
            let obj = self.make(ObjectKind::Obstacle { size }, Vec3::new(x, size / 2.0, z));
            out.push(obj);
        }

        for _ in 0..tuning.coins_per_segment {
            let x = self.side() * tuning.coin_lateral;
            let z = self.along(origin, tuning);
            let obj = self.make(ObjectKind::Coin, Vec3::new(x, tuning.coin_height, z));
            out.push(obj);
        }
    }
}
