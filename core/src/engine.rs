use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from the first selection to a win or a loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_final()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    /// Player selects a cell.
    ///
    /// Hitting a mine loses, opening the last safe cell wins. Both are terminal and
    /// later selections fail with [`GameError::AlreadyEnded`].
    pub fn select(&mut self, pos: Coord2) -> Result<SelectOutcome> {
        self.check_in_progress()?;
        let pos = self.board.validate_coords(pos)?;

        let cell = self.board[pos];
        if cell.revealed {
            return Ok(SelectOutcome::AlreadyOpen);
        }

        let opened = self.board.reveal(pos)?;
        if cell.has_mine {
            log::debug!("Mine hit at {:?}", pos);
            self.status = GameStatus::Lost;
            return Ok(SelectOutcome::HitMine);
        }

        if self.board.is_won() {
            log::debug!("All safe cells open after selecting {:?}", pos);
            self.status = GameStatus::Won;
            Ok(SelectOutcome::Won)
        } else {
            Ok(SelectOutcome::Revealed { opened })
        }
    }

    /// Player-facing view; mines stay hidden until the game is over.
    pub fn view(&self) -> BoardView {
        BoardView::new(&self.board, self.is_finished())
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_final() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::new(Board::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn opening_the_only_safe_cell_wins() {
        let mut game = game((1, 2), &[(0, 1)]);

        assert_eq!(game.select((0, 0)), Ok(SelectOutcome::Won));
        assert_eq!(game.board()[(0, 0)].adjacent_mines, 1);
        assert!(!game.board()[(0, 1)].revealed);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.select((0, 1)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn numbered_cell_keeps_game_in_progress_then_mine_loses() {
        let mut game = game((1, 3), &[(0, 1)]);

        assert_eq!(game.select((0, 0)), Ok(SelectOutcome::Revealed { opened: 1 }));
        assert_eq!(game.board()[(0, 0)].adjacent_mines, 1);
        assert!(!game.board()[(0, 2)].revealed);
        assert_eq!(game.status(), GameStatus::InProgress);

        assert_eq!(game.select((0, 1)), Ok(SelectOutcome::HitMine));
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.board()[(0, 1)].revealed);
    }

    #[test]
    fn selecting_after_loss_is_rejected() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.select((0, 0)).unwrap();
        let before = game.clone();

        assert_eq!(game.select((1, 1)), Err(GameError::AlreadyEnded));
        assert_eq!(game, before);
    }

    #[test]
    fn zero_mine_board_wins_in_one_selection() {
        let mut game = game((3, 4), &[]);

        assert_eq!(game.select((1, 2)), Ok(SelectOutcome::Won));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.board().revealed_count(), 12);
    }

    #[test]
    fn winning_by_individual_selections() {
        let mut game = game((2, 2), &[(1, 1)]);

        assert!(matches!(game.select((0, 0)), Ok(SelectOutcome::Revealed { .. })));
        assert!(matches!(game.select((0, 1)), Ok(SelectOutcome::Revealed { .. })));
        assert_eq!(game.select((1, 0)), Ok(SelectOutcome::Won));
        assert!(game.is_finished());
        assert_eq!(game.select((0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn already_open_cell_is_reported() {
        let mut game = game((1, 3), &[(0, 1)]);
        game.select((0, 0)).unwrap();

        assert_eq!(game.select((0, 0)), Ok(SelectOutcome::AlreadyOpen));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn out_of_bounds_selection_is_rejected() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.select((0, 5)), Err(GameError::InvalidCoords));
        assert_eq!(game.board().revealed_count(), 0);
    }
}
