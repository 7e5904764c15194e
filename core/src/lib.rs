//! Game engine for a chat-driven minesweeper: board generation, flood-fill reveal,
//! win/loss detection and the player-facing board view.
#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use settings::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod settings;
mod types;
mod view;

/// Result of selecting a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The cell was already open, nothing changed.
    AlreadyOpen,
    /// Safe cell opened; `opened` counts it together with any flood-filled cells.
    Revealed { opened: CellCount },
    HitMine,
    Won,
}
