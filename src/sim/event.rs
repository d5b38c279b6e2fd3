//! Notifications for the presentation layer

use serde::{Deserialize, Serialize};

/// Something the UI should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Assets loaded; the start button can be shown
    Ready,
    /// A run began (score and speed reset)
    GameStarted,
    /// Displayed score changed
    ScoreChanged(u64),
    CoinCollected,
    /// Run ended with this displayed score
    GameOverEntered(u64),
}
