use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Reasons a line of player input is not a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,
    #[error("Expected `S`, `H` or `<row> <col>`")]
    Malformed,
    #[error("Not a coordinate: {0}")]
    BadNumber(#[from] core::num::ParseIntError),
}

pub type Result<T> = core::result::Result<T, GameError>;
