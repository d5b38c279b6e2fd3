//! Game state and core simulation types
//!
//! `GameState` is the whole simulation context: every component the tick
//! touches is a named field here.

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::event::GameEvent;
use super::player::Player;
use super::speed::SpeedController;
use super::world::World;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for assets
    Loading,
    /// Waiting for the start button
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; the world is frozen until restart
    GameOver,
}

/// Raw score accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub raw: u64,
    pub coins: u32,
}

impl Score {
    /// Value shown to the player
    #[inline]
    pub fn display(&self, divisor: u64) -> u64 {
        self.raw / divisor.max(1)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// End-of-run statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub run: u32,
    pub phase: GamePhase,
    pub score: u64,
    pub raw_score: u64,
    pub coins: u32,
    pub ticks: u64,
    pub final_speed: f32,
    pub distance: f32,
}

/// Spread run seeds so consecutive runs get unrelated layouts
#[inline]
pub fn run_seed(seed: u64, run: u32) -> u64 {
    (run as u64).wrapping_mul(2654435761).wrapping_add(seed)
}

/// Complete game state (deterministic for a given seed and command stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub speed: SpeedController,
    pub player: Player,
    pub world: World,
    pub score: Score,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Distance travelled in the current run
    pub distance: f32,
    /// Runs started this session
    pub runs: u32,
    /// Displayed score last reported to the UI
    last_display: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let world = World::new(run_seed(seed, 0), &tuning);
        Self {
            seed,
            speed: SpeedController::new(&tuning),
            player: Player::default(),
            world,
            tuning,
            phase: GamePhase::Loading,
            score: Score::default(),
            time_ticks: 0,
            distance: 0.0,
            runs: 0,
            last_display: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn display_score(&self) -> u64 {
        self.score.display(self.tuning.score_divisor)
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Report the displayed score if it moved since the last report
    pub(crate) fn publish_score(&mut self) {
        let display = self.display_score();
        if display != self.last_display {
            self.last_display = display;
            self.emit(GameEvent::ScoreChanged(display));
        }
    }

    /// Loading -> Ready
    pub fn assets_ready(&mut self) {
        if self.phase != GamePhase::Loading {
            log::debug!("Ignoring AssetsReady in {:?}", self.phase);
            return;
        }
        self.phase = GamePhase::Ready;
        self.emit(GameEvent::Ready);
        log::info!("Assets ready");
    }

    /// Ready/GameOver -> Playing
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Ready => {}
            GamePhase::GameOver => {
                if self.tuning.reset_world_on_restart {
                    self.world = World::new(run_seed(self.seed, self.runs), &self.tuning);
                }
            }
            GamePhase::Loading | GamePhase::Playing => {
                log::debug!("Ignoring start in {:?}", self.phase);
                return;
            }
        }

        self.runs += 1;
        self.score.reset();
        self.speed.reset();
        self.player = Player::default();
        self.time_ticks = 0;
        self.distance = 0.0;
        self.last_display = 0;
        self.phase = GamePhase::Playing;

        self.emit(GameEvent::GameStarted);
        self.emit(GameEvent::ScoreChanged(0));
        log::info!("Run {} started (seed {})", self.runs, self.seed);
    }

    /// Playing -> GameOver; fires at most once per run
    pub fn end_run(&mut self, obstacle_id: u32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        let final_score = self.display_score();
        self.emit(GameEvent::GameOverEntered(final_score));
        log::info!(
            "Run {} over: hit obstacle {} after {} ticks, score {}",
            self.runs,
            obstacle_id,
            self.time_ticks,
            final_score
        );
    }

    /// Close a run that is still going without a collision
    ///
    /// Used when a session stops feeding ticks (a headless tick budget runs
    /// out). Same GameOver transition as a crash, so a following start
    /// restarts cleanly.
    pub fn abandon_run(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        let final_score = self.display_score();
        self.emit(GameEvent::GameOverEntered(final_score));
        log::info!(
            "Run {} abandoned after {} ticks, score {}",
            self.runs,
            self.time_ticks,
            final_score
        );
    }

    /// Apply one queued command
    pub fn apply(&mut self, command: Command) {
        if command.is_player_input() && self.phase != GamePhase::Playing {
            log::debug!("Ignoring {:?} in {:?}", command, self.phase);
            return;
        }

        match command {
            Command::AssetsReady => self.assets_ready(),
            Command::StartOrRestart => self.start(),
            Command::MoveLeft => self.player.move_left(&self.tuning),
            Command::MoveRight => self.player.move_right(&self.tuning),
            Command::Jump => self.player.jump(&self.tuning),
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            run: self.runs,
            phase: self.phase,
            score: self.display_score(),
            raw_score: self.score.raw,
            coins: self.score.coins,
            ticks: self.time_ticks,
            final_speed: self.speed.current,
            distance: self.distance,
        }
    }
}
