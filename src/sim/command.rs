//! Commands from the input and lifecycle collaborators
//!
//! Commands are queued as they arrive and drained once at the start of each
//! tick, so simulation results depend only on the command order.

use std::collections::VecDeque;

/// A discrete command delivered to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Asset loading finished (Loading -> Ready)
    AssetsReady,
    /// Start button (Ready/GameOver -> Playing)
    StartOrRestart,
    MoveLeft,
    MoveRight,
    Jump,
}

impl Command {
    /// Commands that steer the runner; only honored while playing
    pub fn is_player_input(&self) -> bool {
        matches!(self, Command::MoveLeft | Command::MoveRight | Command::Jump)
    }
}

/// FIFO of pending commands
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Take every pending command in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Extend<Command> for CommandQueue {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}
