//! Keyboard mapping shared by every frontend

use crate::sim::Command;

/// Map a DOM `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Command::MoveLeft),
        "ArrowRight" | "d" | "D" => Some(Command::MoveRight),
        "ArrowUp" | "w" | "W" | " " => Some(Command::Jump),
        "Enter" => Some(Command::StartOrRestart),
        _ => None,
    }
}
