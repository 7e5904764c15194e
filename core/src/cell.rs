use serde::{Deserialize, Serialize};

/// One square of the board as generated, plus whether the player opened it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub revealed: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    pub const fn mine() -> Self {
        Self {
            has_mine: true,
            revealed: false,
            adjacent_mines: 0,
        }
    }

    /// Marker that shows what the cell really is, ignoring `revealed`.
    pub const fn identity(self) -> CellView {
        if self.has_mine {
            CellView::Mine
        } else if self.adjacent_mines == 0 {
            CellView::Blank
        } else {
            CellView::Digit(self.adjacent_mines)
        }
    }
}

/// Render marker for one cell of a [`BoardView`](crate::BoardView).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Blank,
    Digit(u8),
    Mine,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_revealed_flag() {
        let cell = Cell {
            has_mine: false,
            revealed: false,
            adjacent_mines: 3,
        };

        assert_eq!(cell.identity(), CellView::Digit(3));
        assert_eq!(Cell::mine().identity(), CellView::Mine);
        assert_eq!(Cell::default().identity(), CellView::Blank);
    }
}
