use sweeper_core::{Coord2, GameError, SettingsError};
use sweeper_protocol::Notice;
use thiserror::Error;

/// Why an action was refused. None of these are fatal; each maps to a notice for the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("invalid custom settings")]
    InvalidCustomSettings(#[source] SettingsError),
    #[error("cell already revealed")]
    CellAlreadyRevealed,
    #[error("no game in progress")]
    ActionOnInactiveGame,
    #[error("cell {0:?} is outside the board")]
    OutOfBoundsCellReference(Coord2),
}

impl ActionError {
    pub fn notice(&self) -> Notice {
        use ActionError::*;
        match self {
            InvalidCustomSettings(err) if err.is_format_error() => Notice::InvalidSettingsFormat,
            InvalidCustomSettings(SettingsError::Invalid(GameError::InvalidSize)) => {
                Notice::InvalidBoardSize
            }
            InvalidCustomSettings(_) => Notice::InvalidSettingsValues,
            CellAlreadyRevealed => Notice::AlreadyOpen,
            ActionOnInactiveGame => Notice::GameNotActive,
            OutOfBoundsCellReference(pos) => Notice::OutOfBounds { pos: *pos },
        }
    }
}

impl From<SettingsError> for ActionError {
    fn from(err: SettingsError) -> Self {
        Self::InvalidCustomSettings(err)
    }
}

/// Startup failures; the process does not start when any of these occur.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set, the bot cannot authenticate")]
    MissingToken(&'static str),
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ActionError>;
