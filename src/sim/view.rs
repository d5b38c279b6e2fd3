//! Read-only frame snapshot for the rendering collaborator

use glam::Vec3;

use super::state::{GamePhase, GameState};
use super::world::ObjectKind;

/// What an instance should be drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKind {
    Building,
    Obstacle,
    Coin,
}

/// One drawable object: center position and box extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub kind: InstanceKind,
    pub pos: Vec3,
    pub extent: Vec3,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct FrameView {
    pub phase: GamePhase,
    pub player_pos: Vec3,
    pub player_tilt: f32,
    /// Road segment origins
    pub segments: Vec<f32>,
    pub segment_length: f32,
    pub instances: Vec<Instance>,
    pub speed: f32,
    pub score: u64,
}

/// Building footprint edge
const BUILDING_WIDTH: f32 = 5.0;
/// Coin diameter
const COIN_SIZE: f32 = 1.0;

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        let instances = state
            .world
            .objects
            .iter()
            .map(|obj| {
                let (kind, extent) = match obj.kind {
                    ObjectKind::Decoration { height } => (
                        InstanceKind::Building,
                        Vec3::new(BUILDING_WIDTH, height, BUILDING_WIDTH),
                    ),
                    ObjectKind::Obstacle { size } => (InstanceKind::Obstacle, Vec3::splat(size)),
                    ObjectKind::Coin => (InstanceKind::Coin, Vec3::splat(COIN_SIZE)),
                };
                Instance {
                    kind,
                    pos: obj.pos,
                    extent,
                }
            })
            .collect();

        Self {
            phase: state.phase,
            player_pos: state.player.position(),
            player_tilt: state.player.tilt,
            segments: state.world.segments.iter().map(|s| s.z).collect(),
            segment_length: state.tuning.segment_length,
            instances,
            speed: state.speed.current,
            score: state.display_score(),
        }
    }
}
