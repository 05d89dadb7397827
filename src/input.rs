//! Maps raw key presses to player intents.

use crate::events::GameCommand;
use crate::map::direction::Direction;

/// What a key press means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    Restart,
    Ignored,
}

impl Intent {
    /// Translates a key to an intent: WASD, vi-style HJKL, and `r` to restart.
    pub fn from_key(key: char) -> Intent {
        match key.to_ascii_lowercase() {
            'w' | 'k' => Intent::Up,
            's' | 'j' => Intent::Down,
            'a' | 'h' => Intent::Left,
            'd' | 'l' => Intent::Right,
            'r' => Intent::Restart,
            _ => Intent::Ignored,
        }
    }

    /// The command this intent issues, if any.
    pub fn command(self) -> Option<GameCommand> {
        match self {
            Intent::Up => Some(GameCommand::MovePlayer(Direction::Up)),
            Intent::Down => Some(GameCommand::MovePlayer(Direction::Down)),
            Intent::Left => Some(GameCommand::MovePlayer(Direction::Left)),
            Intent::Right => Some(GameCommand::MovePlayer(Direction::Right)),
            Intent::Restart => Some(GameCommand::Restart),
            Intent::Ignored => None,
        }
    }
}
