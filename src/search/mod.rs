pub mod board;
mod config;
mod error;
pub mod heuristics;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
pub mod solution;
mod validate;
mod verbosity;

pub use board::{Board, BoardKey};
pub use config::SolverConfig;
pub use error::PuzzleError;
pub use heuristics::{Heuristic, HeuristicValue, ManhattanDistance};
pub use search_engines::{solve, SearchConfig, SearchEngine, SearchResult, Strategy};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::{Frontier, SearchSpace, Visited};
pub use search_statistics::SearchStatistics;
pub use solution::Solution;
pub use validate::validate;
pub use verbosity::Verbosity;
