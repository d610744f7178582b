use crate::search::Board;

/// One move away from the goal: the 6 sits below the blank.
pub const ONE_MOVE_TILES: [u8; 9] = [1, 2, 3, 4, 5, 0, 7, 8, 6];

/// Two moves away from the goal.
pub const TWO_MOVE_TILES: [u8; 9] = [1, 2, 3, 4, 0, 6, 7, 5, 8];

/// The goal with tiles 1 and 2 swapped, which odd parity makes unreachable.
pub const UNSOLVABLE_TILES: [u8; 9] = [2, 1, 3, 4, 5, 6, 7, 8, 0];

pub use crate::search::board::GOAL_TILES;

/// Walk `steps` moves away from the goal, choosing among the legal moves with
/// a fixed stride so that the walk is the same on every run. The walk never
/// steps straight back to the board it just left.
pub fn scrambled(steps: usize, seed: usize) -> Board {
    let mut board = Board::goal();
    let mut previous = None;
    for step in 0..steps {
        let moves: Vec<Board> = board
            .possible_moves()
            .into_iter()
            .filter(|successor| Some(*successor) != previous)
            .collect();
        previous = Some(board);
        board = moves[(seed * 31 + step * 17) % moves.len()];
    }
    board
}

/// Solvable boards at a spread of distances from the goal.
pub fn sample_boards() -> Vec<Board> {
    let mut boards = vec![
        Board::goal(),
        Board::new(ONE_MOVE_TILES).unwrap(),
        Board::new(TWO_MOVE_TILES).unwrap(),
    ];
    for seed in 0..8 {
        boards.push(scrambled(4 + seed * 3, seed));
    }
    boards
}
