//! World streaming: a fixed ring of road segments scrolled toward the player
//!
//! Segments that fall behind the trailing boundary jump to the far end of
//! the ring and get a fresh batch of objects, so a bounded amount of road
//! simulates an endless street.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::spawner::Spawner;
use crate::tuning::Tuning;

/// One recyclable slice of road
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    /// Longitudinal origin of the segment
    pub z: f32,
}

/// What a spawned object is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Lethal on touch; `size` is the cube edge
    Obstacle { size: f32 },
    /// Collected on touch
    Coin,
    /// Roadside building, never collides
    Decoration { height: f32 },
}

impl ObjectKind {
    #[inline]
    pub fn is_collidable(&self) -> bool {
        !matches!(self, ObjectKind::Decoration { .. })
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        matches!(self, ObjectKind::Obstacle { .. })
    }
}

/// An obstacle, coin or building placed by the spawner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnedObject {
    pub id: u32,
    pub kind: ObjectKind,
    /// x lateral, y height, z longitudinal
    pub pos: Vec3,
}

/// Segment ring plus every active object
#[derive(Debug, Clone)]
pub struct World {
    pub segments: Vec<RoadSegment>,
    /// Active objects in spawn order
    pub objects: Vec<SpawnedObject>,
    spawner: Spawner,
    /// Total recycle events since the layout was built
    pub recycles: u64,
}

impl World {
    /// Build the initial layout: segments laid end to end from z = 0
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut world = Self {
            segments: Vec::with_capacity(tuning.segment_count),
            objects: Vec::new(),
            spawner: Spawner::new(seed),
            recycles: 0,
        };

        for i in 0..tuning.segment_count {
            let z = i as f32 * tuning.segment_length;
            world.segments.push(RoadSegment { z });
            world.spawner.populate(z, tuning, &mut world.objects);
        }

        world
    }

    /// Scroll every segment back by `speed`, recycling any that passed the
    /// trailing boundary. Returns the number of segments recycled.
    pub fn advance_segments(&mut self, speed: f32, tuning: &Tuning) -> usize {
        let trailing = tuning.trailing_boundary();
        let ring = tuning.ring_length();
        let mut recycled = 0;

        for segment in &mut self.segments {
            segment.z -= speed;
            if segment.z < trailing {
                segment.z += ring;
                self.spawner.populate(segment.z, tuning, &mut self.objects);
                recycled += 1;
                log::debug!("Recycled segment to z={:.2}", segment.z);
            }
        }

        self.recycles += recycled as u64;
        recycled
    }

    pub fn count(&self, pred: impl Fn(&ObjectKind) -> bool) -> usize {
        self.objects.iter().filter(|o| pred(&o.kind)).count()
    }

    pub fn obstacle_count(&self) -> usize {
        self.count(ObjectKind::is_obstacle)
    }

    pub fn coin_count(&self) -> usize {
        self.count(|k| *k == ObjectKind::Coin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let tuning = Tuning::default();
        let world = World::new(5, &tuning);

        let zs: Vec<f32> = world.segments.iter().map(|s| s.z).collect();
        assert_eq!(zs, vec![0.0, 50.0, 100.0, 150.0, 200.0]);
        assert_eq!(world.objects.len(), 5 * 18);
        assert_eq!(world.obstacle_count(), 20);
        assert_eq!(world.coin_count(), 30);
        assert!(world.objects.iter().all(|o| o.pos.z >= 0.0 && o.pos.z < 250.0));
    }

    #[test]
    fn test_recycle_wraps_to_leading_edge() {
        let tuning = Tuning::default();
        let mut world = World::new(5, &tuning);
        world.segments[0].z = -50.5;
        let before = world.objects.len();

        let recycled = world.advance_segments(0.5, &tuning);
        assert_eq!(recycled, 1);
        assert!((world.segments[0].z - 199.0).abs() < 1e-4);
        assert_eq!(world.objects.len(), before + 18);

        // The fresh batch is anchored at the segment's new origin
        let fresh = &world.objects[before..];
        assert!(fresh.iter().all(|o| o.pos.z >= 199.0 - 1e-4 && o.pos.z <= 249.0 + 1e-4));
    }

    #[test]
    fn test_segments_keep_even_spacing() {
        let tuning = Tuning::default();
        let mut world = World::new(9, &tuning);
        for _ in 0..2000 {
            world.advance_segments(0.7, &tuning);
        }
        assert!(world.recycles > 0);

        let mut zs: Vec<f32> = world.segments.iter().map(|s| s.z).collect();
        zs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in zs.windows(2) {
            assert!((pair[1] - pair[0] - 50.0).abs() < 0.05);
        }
        assert!(zs.iter().all(|z| *z >= -50.0 && *z <= 200.0));
    }

    #[test]
    fn test_empty_ring_is_benign() {
        let mut tuning = Tuning::default();
        let mut world = World::new(1, &tuning);
        world.segments.clear();
        tuning.segment_count = 0;
        assert_eq!(world.advance_segments(1.0, &tuning), 0);
    }
}
