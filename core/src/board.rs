use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells with mines placed and adjacency counts filled in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board from a mine mask, computing every safe cell's adjacency count.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mut cells: Array2<Cell> = Array2::default(mine_mask.raw_dim());
        let mut mine_count: CellCount = 0;

        for ((row, col), &has_mine) in mine_mask.indexed_iter() {
            if has_mine {
                cells[[row, col]] = Cell::mine();
                mine_count += 1;
            }
        }

        for ((row, col), cell) in cells.indexed_iter_mut() {
            if cell.has_mine {
                continue;
            }
            // dims are bounded by MAX_SIDE, so positions always fit a Coord
            let pos = (row as Coord, col as Coord);
            cell.adjacent_mines = mine_mask
                .iter_neighbors(pos)
                .filter(|&neighbor| mine_mask[neighbor.to_nd_index()])
                .count() as u8;
        }

        Self { cells, mine_count }
    }

    /// Builds a board with mines at exactly the given positions.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (rows, cols) = size;
        if !(1..=MAX_SIDE).contains(&rows) || !(1..=MAX_SIDE).contains(&cols) {
            return Err(GameError::InvalidSize);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &pos in mine_coords {
            if pos.0 >= rows || pos.1 >= cols {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[pos.to_nd_index()] = true;
        }

        let board = Self::from_mine_mask(&mine_mask);
        if board.mine_count >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(board)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, pos: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if pos.0 < rows && pos.1 < cols {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.revealed).count() as CellCount
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Opens the cell at `pos`, flood-filling through connected zero-count cells.
    ///
    /// Returns how many cells were newly opened; an already open cell yields 0.
    /// Mines are only ever opened when they are the target itself.
    pub fn reveal(&mut self, pos: Coord2) -> Result<CellCount> {
        let pos = self.validate_coords(pos)?;

        if !self.open(pos) {
            return Ok(0);
        }
        let mut opened: CellCount = 1;

        let start = self[pos];
        if start.has_mine || start.adjacent_mines > 0 {
            return Ok(opened);
        }

        let mut to_visit: VecDeque<Coord2> = self.hidden_neighbors(pos).collect();
        log::trace!("Flood fill from {:?}, initial neighbors: {:?}", pos, to_visit);

        while let Some(visit) = to_visit.pop_front() {
            if !self.open(visit) {
                continue;
            }
            opened += 1;

            if self[visit].adjacent_mines == 0 {
                let next: Vec<_> = self.hidden_neighbors(visit).collect();
                to_visit.extend(next);
            }
        }

        log::debug!("Revealed {} cells starting at {:?}", opened, pos);
        Ok(opened)
    }

    /// Whether every safe cell has been opened.
    pub fn is_won(&self) -> bool {
        self.cells.iter().all(|cell| cell.has_mine || cell.revealed)
    }

    /// Marks a single cell revealed, returning false if it already was.
    fn open(&mut self, pos: Coord2) -> bool {
        let cell = &mut self.cells[pos.to_nd_index()];
        if cell.revealed {
            false
        } else {
            cell.revealed = true;
            true
        }
    }

    fn hidden_neighbors(&self, pos: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .iter_neighbors(pos)
            .filter(|&neighbor| !self[neighbor].revealed)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, pos: Coord2) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}
