use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player gets to see of a board.
///
/// While a game is running only revealed cells show their number; once it has ended
/// every cell shows what it really is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    cells: Array2<CellView>,
}

impl BoardView {
    pub fn new(board: &Board, expose_all: bool) -> Self {
        let cells = board.cells().map(|&cell| {
            if expose_all || cell.revealed {
                cell.identity()
            } else {
                CellView::Hidden
            }
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn get(&self, pos: Coord2) -> Option<CellView> {
        self.cells.get(pos.to_nd_index()).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, CellView>> {
        self.cells.rows().into_iter()
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }
}
