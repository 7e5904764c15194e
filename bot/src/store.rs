//! In-memory session state, one record per conversation.
//!
//! The map is behind an `RwLock` and every session behind its own `Mutex`, so actions on
//! one conversation are serialized while different conversations never wait on each other.
use hashbrown::HashMap;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use sweeper_core::{Game, GameConfig, GameStatus};
use sweeper_protocol::SessionId;

/// Whether the next free-text message is expected to carry custom settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputState {
    #[default]
    Idle,
    AwaitingCustomSettings,
}

/// Where a session stands with respect to its current game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NoGame,
    InProgress,
    Ended(GameStatus),
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Session {
    game: Option<Game>,
    settings: Option<GameConfig>,
    input: InputState,
}

impl Session {
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    /// Replaces any previous game wholesale.
    pub fn set_game(&mut self, game: Game) {
        self.game = Some(game);
    }

    /// Chosen settings, or the default ones if the player never picked any.
    pub fn settings(&self) -> GameConfig {
        self.settings.unwrap_or_default()
    }

    pub fn set_settings(&mut self, settings: GameConfig) {
        self.settings = Some(settings);
    }

    pub fn input_state(&self) -> InputState {
        self.input
    }

    pub fn set_input_state(&mut self, input: InputState) {
        self.input = input;
    }

    pub fn is_awaiting_custom_input(&self) -> bool {
        self.input == InputState::AwaitingCustomSettings
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.game {
            None => SessionPhase::NoGame,
            Some(game) if game.is_finished() => SessionPhase::Ended(game.status()),
            Some(_) => SessionPhase::InProgress,
        }
    }
}

type SessionCell = Arc<Mutex<Session>>;

fn lock(cell: &SessionCell) -> MutexGuard<'_, Session> {
    // a panic mid-action leaves the session as it was at that point, still usable
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionCell>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the session, creating it first if needed.
    pub fn with_session<R>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> R) -> R {
        let cell = self.cell(id);
        let mut session = lock(&cell);
        f(&mut session)
    }

    /// Snapshot of the session, creating an empty one on first contact.
    pub fn get_or_create(&self, id: SessionId) -> Session {
        self.with_session(id, |session| session.clone())
    }

    pub fn get_settings(&self, id: SessionId) -> GameConfig {
        self.peek(id, Session::settings).unwrap_or_default()
    }

    pub fn set_settings(&self, id: SessionId, settings: GameConfig) {
        self.with_session(id, |session| session.set_settings(settings));
    }

    pub fn get_game(&self, id: SessionId) -> Option<Game> {
        self.peek(id, |session| session.game.clone()).flatten()
    }

    pub fn set_game(&self, id: SessionId, game: Game) {
        self.with_session(id, |session| session.set_game(game));
    }

    pub fn is_awaiting_custom_input(&self, id: SessionId) -> bool {
        self.peek(id, Session::is_awaiting_custom_input)
            .unwrap_or(false)
    }

    pub fn set_awaiting_custom_input(&self, id: SessionId, awaiting: bool) {
        let input = if awaiting {
            InputState::AwaitingCustomSettings
        } else {
            InputState::Idle
        };
        self.with_session(id, |session| session.set_input_state(input));
    }

    pub fn len(&self) -> usize {
        self.read_map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads from an existing session without creating one.
    fn peek<R>(&self, id: SessionId, f: impl FnOnce(&Session) -> R) -> Option<R> {
        let cell = self.read_map().get(&id).cloned()?;
        let session = lock(&cell);
        Some(f(&session))
    }

    fn cell(&self, id: SessionId) -> SessionCell {
        if let Some(cell) = self.read_map().get(&id) {
            return Arc::clone(cell);
        }

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let cell = sessions.entry(id).or_insert_with(|| {
            log::debug!("New session {}", id);
            SessionCell::default()
        });
        Arc::clone(cell)
    }

    fn read_map(&self) -> std::sync::RwLockReadGuard<'_, HashMap<SessionId, SessionCell>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }
}
