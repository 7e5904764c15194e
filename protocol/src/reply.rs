use core::fmt;
use serde::{Deserialize, Serialize};
use sweeper_core::{BoardView, Coord2, GameConfig, GameStatus, MAX_SIDE, Preset};

use crate::Action;

pub const RULES: &str = "Minesweeper rules:\n\
    1. Open cells and try not to hit a mine.\n\
    2. A number on an open cell tells how many mines are in the neighboring cells.\n\
    3. You win once every safe cell is open.\n\n\
    Press \"New game\" to start playing.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Menu {
    Main,
    Settings,
}

impl Menu {
    /// Button labels with the action each one triggers, one button per row.
    pub fn buttons(self) -> Vec<(&'static str, Action)> {
        match self {
            Menu::Main => vec![
                ("New game", Action::StartNewGame),
                ("Settings", Action::OpenSettingsMenu),
                ("Rules", Action::OpenHelp),
            ],
            Menu::Settings => vec![
                ("Easy", Action::ChoosePreset { preset: Preset::Easy }),
                ("Medium", Action::ChoosePreset { preset: Preset::Medium }),
                ("Hard", Action::ChoosePreset { preset: Preset::Hard }),
                ("Custom", Action::RequestCustomSettings),
                ("Back", Action::OpenMainMenu),
            ],
        }
    }
}

/// Status and error messages shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    Welcome,
    MainMenu,
    ChooseDifficulty,
    Rules,
    NewGame { config: GameConfig },
    AlreadyOpen,
    GameNotActive,
    OutOfBounds { pos: Coord2 },
    Lost,
    Won,
    PresetSaved { preset: Preset },
    CustomSettingsPrompt,
    CustomSettingsSaved { config: GameConfig },
    InvalidSettingsFormat,
    InvalidSettingsValues,
    InvalidBoardSize,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Notice::*;
        match self {
            Welcome => f.write_str("Welcome to Minesweeper! Choose an option from the menu:"),
            MainMenu => f.write_str("Menu:"),
            ChooseDifficulty => f.write_str("Choose difficulty:"),
            Rules => f.write_str(RULES),
            NewGame { config } => write!(f, "New game ({config}). Pick a cell:"),
            AlreadyOpen => f.write_str("This cell is already open."),
            GameNotActive => {
                f.write_str("Game over. Send /new or choose \"New game\" in the menu.")
            }
            OutOfBounds { pos: (row, col) } => {
                write!(f, "Cell ({row}, {col}) is not on the board.")
            }
            Lost => f.write_str("💥 You lost! Send /new or choose \"New game\" in the menu."),
            Won => f.write_str(
                "🎉 Congratulations, you won! Send /new or choose \"New game\" in the menu.",
            ),
            PresetSaved { preset } => write!(f, "Settings saved: {preset}"),
            CustomSettingsPrompt => f.write_str(
                "Enter the difficulty as ROWS,COLS,MINES\nFor example: 8,8,12",
            ),
            CustomSettingsSaved { config } => write!(f, "Settings saved: {config}."),
            InvalidSettingsFormat => f.write_str(
                "Wrong format. Enter the parameters as ROWS,COLS,MINES (for example: 8,8,12)",
            ),
            InvalidSettingsValues => f.write_str(
                "Invalid parameters. Sizes must be positive numbers and there must be \
                fewer mines than cells.",
            ),
            InvalidBoardSize => write!(
                f,
                "Invalid parameters. Rows and columns must be between 1 and {MAX_SIDE}."
            ),
        }
    }
}

/// What the controller hands back to the transport after each action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    Board {
        view: BoardView,
        status: GameStatus,
        notice: Option<Notice>,
    },
    Menu {
        menu: Menu,
        notice: Notice,
    },
    Notice {
        notice: Notice,
    },
    /// Input that means nothing in the current state; transports stay silent.
    Ignored,
}

impl Reply {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Reply::Board { notice, .. } => notice.as_ref(),
            Reply::Menu { notice, .. } => Some(notice),
            Reply::Notice { notice } => Some(notice),
            Reply::Ignored => None,
        }
    }

    pub fn status(&self) -> Option<GameStatus> {
        match self {
            Reply::Board { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<Notice> for Reply {
    fn from(notice: Notice) -> Self {
        Reply::Notice { notice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_menu_offers_every_preset() {
        let presets: Vec<_> = Menu::Settings
            .buttons()
            .into_iter()
            .filter_map(|(_, action)| match action {
                Action::ChoosePreset { preset } => Some(preset),
                _ => None,
            })
            .collect();

        assert_eq!(presets, Preset::ALL.to_vec());
    }

    #[test]
    fn notices_render_settings() {
        let notice = Notice::CustomSettingsSaved {
            config: GameConfig::new_unchecked((8, 8), 12),
        };

        assert_eq!(
            notice.to_string(),
            "Settings saved: 8 rows, 8 columns, 12 mines."
        );
        assert_eq!(
            Notice::InvalidBoardSize.to_string(),
            "Invalid parameters. Rows and columns must be between 1 and 64."
        );
    }
}
