use crate::search::{
    search_engines::{AStar, UniformCost},
    Board, PuzzleError, SearchStatistics, Solution,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The terminal outcome of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A node for the goal board was taken from the frontier
    Solved(Solution),
    /// The frontier ran empty without reaching the goal
    Exhausted,
}

impl SearchResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchResult::Solved(solution) => Some(solution),
            SearchResult::Exhausted => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchResult::Solved(_))
    }
}

/// Renders the text written to the output file.
impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Solved(solution) => write!(f, "{}", solution),
            SearchResult::Exhausted => writeln!(f, "{}", crate::search::solution::NO_SOLUTION),
        }
    }
}

pub trait SearchEngine {
    fn search(&mut self, initial_board: Board) -> (SearchResult, SearchStatistics);
}

/// Which node-selection policy to search with. The numeric codes are the ones
/// accepted on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Strategy {
    /// Expand nodes in insertion order. With unit move costs this is
    /// uniform-cost search.
    UniformCost,
    /// Expand the node with the lowest path cost plus Manhattan distance.
    AStar,
}

impl Strategy {
    pub fn code(&self) -> i64 {
        match self {
            Strategy::UniformCost => 0,
            Strategy::AStar => 1,
        }
    }

    pub fn create(&self, config: &SearchConfig) -> Box<dyn SearchEngine> {
        match self {
            Strategy::UniformCost => Box::new(UniformCost::new()),
            Strategy::AStar => Box::new(AStar::new(config.root_reselection)),
        }
    }

    /// File the solver binary writes its report to unless told otherwise.
    pub fn default_output(&self) -> &'static str {
        match self {
            Strategy::UniformCost => "outputUniCost.txt",
            Strategy::AStar => "outputAstar.txt",
        }
    }
}

impl TryFrom<i64> for Strategy {
    type Error = PuzzleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Strategy::UniformCost),
            1 => Ok(Strategy::AStar),
            other => Err(PuzzleError::InvalidStrategy(other)),
        }
    }
}

impl From<Strategy> for i64 {
    fn from(value: Strategy) -> Self {
        value.code()
    }
}

/// Accepts the numeric code or the kebab-case name.
impl FromStr for Strategy {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "uniform-cost" => Ok(Strategy::UniformCost),
            "astar" => Ok(Strategy::AStar),
            _ => {
                let code: i64 = s
                    .parse()
                    .map_err(|_| PuzzleError::UnparsableStrategy(s.to_string()))?;
                Strategy::try_from(code)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::UniformCost => write!(f, "uniform-cost"),
            Strategy::AStar => write!(f, "astar"),
        }
    }
}

/// Settings for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// In A*, always take the node for the initial board first whenever one is
    /// in the frontier, whatever its f-value.
    pub root_reselection: bool,
}

impl SearchConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            root_reselection: true,
        }
    }

    pub fn with_root_reselection(mut self, root_reselection: bool) -> Self {
        self.root_reselection = root_reselection;
        self
    }

    pub fn create(&self) -> Box<dyn SearchEngine> {
        self.strategy.create(self)
    }
}

/// Run one search with the given settings.
pub fn solve(config: &SearchConfig, initial_board: Board) -> (SearchResult, SearchStatistics) {
    let mut engine = config.create();
    engine.search(initial_board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_codes() {
        assert_eq!(Strategy::try_from(0).unwrap(), Strategy::UniformCost);
        assert_eq!(Strategy::try_from(1).unwrap(), Strategy::AStar);
        assert!(matches!(
            Strategy::try_from(2),
            Err(PuzzleError::InvalidStrategy(2))
        ));
        assert!(matches!(
            Strategy::try_from(-1),
            Err(PuzzleError::InvalidStrategy(-1))
        ));
        assert_eq!(i64::from(Strategy::AStar), 1);
    }

    #[test]
    fn strategy_from_text() {
        assert_eq!("0".parse::<Strategy>().unwrap(), Strategy::UniformCost);
        assert_eq!(" 1\n".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert!(matches!(
            "7".parse::<Strategy>(),
            Err(PuzzleError::InvalidStrategy(7))
        ));
        assert!(matches!(
            "fast".parse::<Strategy>(),
            Err(PuzzleError::UnparsableStrategy(_))
        ));
    }

    #[test]
    fn exhausted_report() {
        assert_eq!(SearchResult::Exhausted.to_string(), "No solution found\n");
        assert!(SearchResult::Exhausted.solution().is_none());
    }

    #[test]
    fn solve_dispatches_on_strategy() {
        let board = Board::new([1, 2, 3, 4, 5, 0, 7, 8, 6]).unwrap();
        for strategy in [Strategy::UniformCost, Strategy::AStar] {
            let (result, _) = solve(&SearchConfig::new(strategy), board);
            let solution = result.solution().unwrap();
            assert_eq!(solution.path(), &[board, Board::goal()]);
            assert!(result.to_string().starts_with("Solution found!\n123450786\n"));
        }
    }

    #[test]
    fn config_defaults_to_root_reselection() {
        let config = SearchConfig::new(Strategy::AStar);
        assert!(config.root_reselection);
        assert!(!config.with_root_reselection(false).root_reselection);
    }
}
