use super::*;
use ndarray::Array2;

/// Places mines uniformly at random over the whole board.
///
/// Picks `mines` distinct cell indices in one pass, so dense boards cost the same as
/// sparse ones.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let rows = rows.max(1);
        let cols = cols.max(1);
        let total_cells = usize::from(mult(rows, cols));

        let mut mines = usize::from(config.mines);
        if mines >= total_cells {
            log::warn!(
                "Requested {} mines but only {} cells, leaving one cell safe",
                mines,
                total_cells
            );
            mines = total_cells - 1;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default((rows, cols).to_nd_index());
        let cols = usize::from(cols);
        for index in rand::seq::index::sample(&mut rng, total_cells, mines) {
            mine_mask[[index / cols, index % cols]] = true;
        }

        let board = Board::from_mine_mask(&mine_mask);
        log::debug!(
            "Generated {}x{} board with {} mines (seed {})",
            rows,
            cols,
            board.mine_count(),
            self.seed
        );
        board
    }
}
