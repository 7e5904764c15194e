use alloc::borrow::ToOwned;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count used when generating a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT: Self = Self::new_unchecked((5, 5), 5);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checks `1 <= rows, cols <= MAX_SIDE` and `mines < rows * cols`.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (rows, cols) = size;
        if !(1..=MAX_SIDE).contains(&rows) || !(1..=MAX_SIDE).contains(&cols) {
            return Err(GameError::InvalidSize);
        }
        if mines >= mult(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} columns, {} mines",
            self.rows(),
            self.cols(),
            self.mines
        )
    }
}

fn parse_field(field: &str) -> core::result::Result<i64, SettingsError> {
    let field = field.trim();
    field
        .parse()
        .map_err(|_| SettingsError::NotANumber(field.to_owned()))
}

/// Parses the `ROWS,COLS,MINES` line a player types for custom settings.
///
/// Unlike [`GameConfig::new`], zero mines is rejected here.
impl FromStr for GameConfig {
    type Err = SettingsError;

    fn from_str(text: &str) -> core::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = text.split(',').collect();
        let [rows, cols, mines] = fields[..] else {
            return Err(SettingsError::WrongFieldCount(fields.len()));
        };

        let rows = parse_field(rows)?;
        let cols = parse_field(cols)?;
        let mines = parse_field(mines)?;

        let side = |n: i64| Coord::try_from(n).map_err(|_| GameError::InvalidSize);
        let size = (side(rows)?, side(cols)?);
        if mines <= 0 {
            return Err(SettingsError::NoMines);
        }
        let mines = CellCount::try_from(mines).map_err(|_| GameError::TooManyMines)?;

        Ok(GameConfig::new(size, mines)?)
    }
}

/// Named difficulty levels selectable without typing numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Easy,
    Medium,
    Hard,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Easy, Preset::Medium, Preset::Hard];

    pub const fn config(self) -> GameConfig {
        use Preset::*;
        match self {
            Easy => GameConfig::new_unchecked((5, 5), 3),
            Medium => GameConfig::new_unchecked((7, 7), 10),
            Hard => GameConfig::new_unchecked((10, 10), 20),
        }
    }

    pub const fn name(self) -> &'static str {
        use Preset::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ();

    fn from_str(name: &str) -> core::result::Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or(())
    }
}
