//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, driven from outside
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod command;
pub mod event;
pub mod player;
pub mod spawner;
pub mod speed;
pub mod state;
pub mod tick;
pub mod view;
pub mod world;

pub use collision::{SweepReport, in_reach, sweep};
pub use command::{Command, CommandQueue};
pub use event::GameEvent;
pub use player::Player;
pub use spawner::Spawner;
pub use speed::SpeedController;
pub use state::{GamePhase, GameState, RunSummary, Score, run_seed};
pub use tick::tick;
pub use view::{FrameView, Instance, InstanceKind};
pub use world::{ObjectKind, RoadSegment, SpawnedObject, World};
