//! A solution is the sequence of boards from the initial board to the goal,
//! together with the sizes of the visited and frontier collections at the
//! moment the goal was taken from the frontier.

use crate::search::{Board, PuzzleError};
use itertools::Itertools;
use std::fmt;
use std::ops::Deref;
use std::path::Path;

pub const SOLUTION_HEADER: &str = "Solution found!";
pub const NO_SOLUTION: &str = "No solution found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<Board>,
    expanded_nodes: usize,
    unexpanded_nodes: usize,
}

impl Solution {
    pub fn new(path: Vec<Board>, expanded_nodes: usize, unexpanded_nodes: usize) -> Self {
        debug_assert!(!path.is_empty(), "A solution holds at least one board");
        Self {
            path,
            expanded_nodes,
            unexpanded_nodes,
        }
    }

    /// Read the board sequence back from a rendered report, as written to the
    /// output file by the solver.
    pub fn path_from_file(path: &Path) -> Result<Vec<Board>, PuzzleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::path_from_text(&contents)
    }

    pub fn path_from_text(text: &str) -> Result<Vec<Board>, PuzzleError> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
        match lines.next() {
            Some(SOLUTION_HEADER) => {}
            Some(NO_SOLUTION) => {
                return Err(PuzzleError::InvalidSolution(
                    "the report holds no solution".to_string(),
                ))
            }
            other => {
                return Err(PuzzleError::InvalidSolution(format!(
                    "expected {:?}, found {:?}",
                    SOLUTION_HEADER, other
                )))
            }
        }

        let path = lines
            .take_while(|line| !line.ends_with("Moves"))
            .map(str::parse::<Board>)
            .collect::<Result<Vec<Board>, _>>()?;
        if path.is_empty() {
            return Err(PuzzleError::InvalidSolution(
                "the report lists no boards".to_string(),
            ));
        }
        Ok(path)
    }

    pub fn path(&self) -> &[Board] {
        &self.path
    }

    pub fn initial(&self) -> &Board {
        &self.path[0]
    }

    /// Number of moves, one fewer than the number of boards.
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn unexpanded_nodes(&self) -> usize {
        self.unexpanded_nodes
    }
}

impl Deref for Solution {
    type Target = [Board];

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SOLUTION_HEADER)?;
        writeln!(f, "{}", self.path.iter().join("\n"))?;
        writeln!(f, "{} Moves", self.moves())?;
        writeln!(f, "Nodes expanded: {}", self.expanded_nodes)?;
        writeln!(f, "Nodes unexpanded: {}", self.unexpanded_nodes)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn one_move_solution() -> Solution {
        Solution::new(
            vec![Board::new(ONE_MOVE_TILES).unwrap(), Board::goal()],
            3,
            5,
        )
    }

    #[test]
    fn moves_count_edges() {
        assert_eq!(one_move_solution().moves(), 1);
        assert_eq!(Solution::new(vec![Board::goal()], 1, 0).moves(), 0);
    }

    #[test]
    fn report_format() {
        let report = one_move_solution().to_string();
        assert_eq!(
            report,
            "Solution found!\n\
             123450786\n\
             123456780\n\
             1 Moves\n\
             Nodes expanded: 3\n\
             Nodes unexpanded: 5\n\n"
        );
    }

    #[test]
    fn path_is_read_back_from_report() {
        let solution = one_move_solution();
        let path = Solution::path_from_text(&solution.to_string()).unwrap();
        assert_eq!(path, solution.path());
    }

    #[test]
    fn reports_without_solution_are_rejected() {
        assert!(Solution::path_from_text("No solution found\n").is_err());
        assert!(Solution::path_from_text("").is_err());
        assert!(Solution::path_from_text("Solution found!\n0 Moves\n").is_err());
        assert!(Solution::path_from_text("Solution found!\n12345\n1 Moves\n").is_err());
    }
}
