//! Messages exchanged between the chat transport and the game controller.

use core::fmt;
use serde::{Deserialize, Serialize};
use sweeper_core::{Coord, Preset};

pub use callback::*;
pub use reply::*;

mod callback;
mod reply;

/// Conversation the action came from; each one owns an independent session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub i64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SessionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// First contact with the bot.
    Start,
    StartNewGame,
    SelectCell { row: Coord, col: Coord },
    ChoosePreset { preset: Preset },
    RequestCustomSettings,
    SubmitCustomSettingsText { text: String },
    OpenSettingsMenu,
    OpenHelp,
    OpenMainMenu,
}

/// An action tagged with the session it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub session: SessionId,
    pub action: Action,
}

impl Request {
    pub fn new(session: impl Into<SessionId>, action: Action) -> Self {
        Self {
            session: session.into(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_serialize_with_type_tag() {
        let request = Request::new(SessionId(7), Action::SelectCell { row: 1, col: 2 });

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "session": 7,
                "action": { "type": "select_cell", "row": 1, "col": 2 }
            })
        );
    }

    #[test]
    fn preset_action_uses_lowercase_names() {
        let action: Action =
            serde_json::from_str(r#"{"type":"choose_preset","preset":"hard"}"#).unwrap();

        assert_eq!(
            action,
            Action::ChoosePreset {
                preset: Preset::Hard
            }
        );
    }
}
