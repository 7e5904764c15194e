use thiserror::Error;

use crate::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("Unknown callback data {0:?}")]
    UnknownCallback(String),
    #[error("Malformed cell reference {0:?}")]
    MalformedCell(String),
}

impl Action {
    /// Decodes the payload attached to an inline button press.
    ///
    /// Cells are `cell_ROW_COL`; menus are `menu_*`; difficulty buttons are `set_*`.
    pub fn from_callback_data(data: &str) -> Result<Self, ParseActionError> {
        use Action::*;

        if let Some(coords) = data.strip_prefix("cell_") {
            let malformed = || ParseActionError::MalformedCell(data.to_owned());
            let (row, col) = coords.split_once('_').ok_or_else(malformed)?;
            return Ok(SelectCell {
                row: row.parse().map_err(|_| malformed())?,
                col: col.parse().map_err(|_| malformed())?,
            });
        }

        Ok(match data {
            "menu_new_game" => StartNewGame,
            "menu_settings" => OpenSettingsMenu,
            "menu_help" => OpenHelp,
            "menu_back" => OpenMainMenu,
            "set_custom" => RequestCustomSettings,
            _ => {
                let preset = data
                    .strip_prefix("set_")
                    .and_then(|name| name.parse().ok())
                    .ok_or_else(|| ParseActionError::UnknownCallback(data.to_owned()))?;
                ChoosePreset { preset }
            }
        })
    }

    /// Payload for a button that triggers this action, if it can be a button.
    pub fn to_callback_data(&self) -> Option<String> {
        use Action::*;

        Some(match self {
            StartNewGame => "menu_new_game".to_owned(),
            SelectCell { row, col } => format!("cell_{row}_{col}"),
            ChoosePreset { preset } => format!("set_{preset}"),
            RequestCustomSettings => "set_custom".to_owned(),
            OpenSettingsMenu => "menu_settings".to_owned(),
            OpenHelp => "menu_help".to_owned(),
            OpenMainMenu => "menu_back".to_owned(),
            Start | SubmitCustomSettingsText { .. } => return None,
        })
    }

    /// Maps a slash command such as `/new` or `/settings@SomeBot`.
    pub fn from_command(text: &str) -> Option<Self> {
        let command = text.trim().strip_prefix('/')?;
        let command = command.split_whitespace().next().unwrap_or_default();
        let command = command.split('@').next().unwrap_or_default();

        match command {
            "start" => Some(Action::Start),
            "menu" => Some(Action::OpenMainMenu),
            "new" => Some(Action::StartNewGame),
            "settings" => Some(Action::OpenSettingsMenu),
            "help" => Some(Action::OpenHelp),
            _ => None,
        }
    }

    /// Interprets a plain chat message: known commands, anything else is settings text.
    pub fn from_message(text: &str) -> Self {
        Self::from_command(text).unwrap_or_else(|| Action::SubmitCustomSettingsText {
            text: text.to_owned(),
        })
    }
}
