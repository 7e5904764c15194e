use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell coordinates are outside the board")]
    InvalidCoords,
    #[error("Board dimensions must be between 1 and {max}", max = crate::MAX_SIDE)]
    InvalidSize,
    #[error("Mine count must be lower than the number of cells")]
    TooManyMines,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Rejection reasons for a `ROWS,COLS,MINES` settings line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Expected 3 comma-separated values, got {0}")]
    WrongFieldCount(usize),
    #[error("Not a number: {0:?}")]
    NotANumber(String),
    #[error("At least one mine is required")]
    NoMines,
    #[error(transparent)]
    Invalid(#[from] GameError),
}

impl SettingsError {
    /// Whether the input had the wrong shape rather than out-of-range values.
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::WrongFieldCount(_))
    }
}
