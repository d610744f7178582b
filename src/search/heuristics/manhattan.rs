//! The Manhattan distance heuristic: for every tile other than the blank, the
//! number of rows plus the number of columns between its cell and its goal
//! cell.
//!
//! Each move shifts exactly one tile by one row or one column, so the sum never
//! overestimates the remaining moves and never drops by more than one per move.
//! That makes it both admissible and consistent, which A* with a closed set
//! needs to return shortest paths.

use crate::search::{
    board::{BLANK, BOARD_WIDTH, GOAL_TILES, NUM_CELLS},
    Board, Heuristic, HeuristicValue,
};

#[derive(Clone, Debug)]
pub struct ManhattanDistance {
    /// Goal cell of every tile, indexed by tile
    goal_cells: [usize; NUM_CELLS],
}

impl ManhattanDistance {
    pub fn new() -> Self {
        let mut goal_cells = [0; NUM_CELLS];
        for (cell, &tile) in GOAL_TILES.iter().enumerate() {
            goal_cells[tile as usize] = cell;
        }
        Self { goal_cells }
    }

    pub fn distance(&self, board: &Board) -> HeuristicValue {
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(cell, &tile)| {
                let goal = self.goal_cells[tile as usize];
                let rows = (cell / BOARD_WIDTH).abs_diff(goal / BOARD_WIDTH);
                let columns = (cell % BOARD_WIDTH).abs_diff(goal % BOARD_WIDTH);
                (rows + columns) as HeuristicValue
            })
            .sum()
    }
}

impl Default for ManhattanDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&mut self, board: &Board) -> HeuristicValue {
        self.distance(board)
    }
}
