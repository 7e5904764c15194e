use rand::prelude::*;
use std::sync::{Arc, Mutex, PoisonError};

use sweeper_core::*;
use sweeper_protocol::{Action, Menu, Notice, Reply, Request, SessionId};

use crate::{ActionError, InputState, Result, Session, SessionStore};

/// Turns inbound actions into session updates and replies for the transport.
///
/// Each action runs while holding its session's lock, so a board and its status are
/// always updated together.
#[derive(Debug)]
pub struct Controller {
    store: Arc<SessionStore>,
    seeds: Mutex<SmallRng>,
}

impl Controller {
    pub fn new(store: Arc<SessionStore>, seed: u64) -> Self {
        Self {
            store,
            seeds: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn handle_request(&self, request: Request) -> Reply {
        self.handle(request.session, request.action)
    }

    /// Applies one action; rejected actions come back as notices instead of errors.
    pub fn handle(&self, id: SessionId, action: Action) -> Reply {
        log::debug!("Session {}: {:?}", id, action);
        let result = self
            .store
            .with_session(id, |session| self.apply(session, action));

        match result {
            Ok(reply) => reply,
            Err(err) => {
                log::info!("Session {}: rejected action: {}", id, err);
                err.notice().into()
            }
        }
    }

    /// Starts a game on a prepared board instead of a random one.
    pub fn start_game_with_board(&self, id: SessionId, board: Board) -> Reply {
        self.store.with_session(id, |session| {
            let config = board.game_config();
            session.set_game(Game::new(board));
            new_game_reply(session, config)
        })
    }

    fn apply(&self, session: &mut Session, action: Action) -> Result<Reply> {
        use Action::*;

        match action {
            Start => Ok(Reply::Menu {
                menu: Menu::Main,
                notice: Notice::Welcome,
            }),
            StartNewGame => Ok(self.start_new_game(session)),
            SelectCell { row, col } => select_cell(session, (row, col)),
            ChoosePreset { preset } => {
                session.set_settings(preset.config());
                Ok(Reply::Menu {
                    menu: Menu::Main,
                    notice: Notice::PresetSaved { preset },
                })
            }
            RequestCustomSettings => {
                session.set_input_state(InputState::AwaitingCustomSettings);
                Ok(Notice::CustomSettingsPrompt.into())
            }
            SubmitCustomSettingsText { text } => submit_custom_settings(session, &text),
            OpenSettingsMenu => Ok(Reply::Menu {
                menu: Menu::Settings,
                notice: Notice::ChooseDifficulty,
            }),
            OpenHelp => Ok(Reply::Menu {
                menu: Menu::Main,
                notice: Notice::Rules,
            }),
            OpenMainMenu => Ok(Reply::Menu {
                menu: Menu::Main,
                notice: Notice::MainMenu,
            }),
        }
    }

    fn start_new_game(&self, session: &mut Session) -> Reply {
        let config = session.settings();
        let board = RandomBoardGenerator::new(self.next_seed()).generate(config);
        session.set_game(Game::new(board));
        new_game_reply(session, config)
    }

    fn next_seed(&self) -> u64 {
        let mut seeds = self.seeds.lock().unwrap_or_else(PoisonError::into_inner);
        seeds.random()
    }
}

fn new_game_reply(session: &Session, config: GameConfig) -> Reply {
    match session.game() {
        Some(game) => Reply::Board {
            view: game.view(),
            status: game.status(),
            notice: Some(Notice::NewGame { config }),
        },
        None => Notice::GameNotActive.into(),
    }
}

fn select_cell(session: &mut Session, pos: Coord2) -> Result<Reply> {
    let game = session
        .game_mut()
        .filter(|game| !game.is_finished())
        .ok_or(ActionError::ActionOnInactiveGame)?;

    let notice = match game.select(pos) {
        Ok(SelectOutcome::AlreadyOpen) => return Err(ActionError::CellAlreadyRevealed),
        Ok(SelectOutcome::Revealed { .. }) => None,
        Ok(SelectOutcome::HitMine) => Some(Notice::Lost),
        Ok(SelectOutcome::Won) => Some(Notice::Won),
        Err(GameError::InvalidCoords) => return Err(ActionError::OutOfBoundsCellReference(pos)),
        Err(_) => return Err(ActionError::ActionOnInactiveGame),
    };

    Ok(Reply::Board {
        view: game.view(),
        status: game.status(),
        notice,
    })
}

fn submit_custom_settings(session: &mut Session, text: &str) -> Result<Reply> {
    if !session.is_awaiting_custom_input() {
        log::trace!("Ignoring text outside of custom settings input: {:?}", text);
        return Ok(Reply::Ignored);
    }

    let config: GameConfig = text.parse()?;
    session.set_settings(config);
    session.set_input_state(InputState::Idle);
    Ok(Notice::CustomSettingsSaved { config }.into())
}
