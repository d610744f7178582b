use crate::search::{Board, PuzzleError};

/// Check that `path` starts at `initial_board`, moves one tile per step and
/// ends at the goal.
pub fn validate(initial_board: &Board, path: &[Board]) -> Result<(), PuzzleError> {
    let Some(first) = path.first() else {
        return Err(PuzzleError::InvalidSolution("the path is empty".to_string()));
    };
    if !first.is_identical(initial_board) {
        return Err(PuzzleError::InvalidSolution(format!(
            "path starts at {} instead of {}",
            first, initial_board
        )));
    }

    for (step, boards) in path.windows(2).enumerate() {
        if !boards[0].possible_moves().contains(&boards[1]) {
            return Err(PuzzleError::InvalidSolution(format!(
                "move {} from {} to {} is not a legal move",
                step + 1,
                boards[0],
                boards[1]
            )));
        }
    }

    let last = path.last().unwrap_or(first);
    if !last.is_goal() {
        return Err(PuzzleError::InvalidSolution(format!(
            "path does not reach the goal, final board is {}",
            last
        )));
    }

    Ok(())
}
