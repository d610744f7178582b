use crate::search::Board;
use std::fmt::Debug;

/// Heuristic values and path costs share one integer type since every move
/// costs 1.
pub type HeuristicValue = u32;

pub trait Heuristic: Debug {
    /// Estimate the number of moves left from `board` to the goal.
    fn evaluate(&mut self, board: &Board) -> HeuristicValue;

    /// Evaluate a batch of boards. The default implementation simply calls
    /// `evaluate` for each board sequentially, in order.
    fn evaluate_batch(&mut self, boards: &[Board]) -> Vec<HeuristicValue> {
        boards.iter().map(|board| self.evaluate(board)).collect()
    }
}
