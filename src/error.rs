//! Centralized error types for the simulation.
//!
//! Only loading a layout can fail. Ticking operates on validated in-memory state,
//! so a broken invariant there panics instead of producing an error.

use std::io;

use glam::UVec2;

/// Main error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Configuration errors found while parsing a board layout.
///
/// Any of these prevents a session from starting.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character {character:?} in board at row {row}, column {column}")]
    UnknownCharacter { character: char, row: usize, column: usize },

    #[error("Board layout has no rows")]
    EmptyLayout,

    #[error("Row {row} is {found} tiles wide, expected {expected}")]
    InconsistentRowWidth { row: usize, expected: usize, found: usize },

    #[error("Board layout has no player spawn")]
    MissingPlayer,

    #[error("Board layout has more than one player spawn: {first} and {second}")]
    DuplicatePlayer { first: UVec2, second: UVec2 },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
