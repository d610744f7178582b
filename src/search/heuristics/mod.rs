mod heuristic;
mod manhattan;

pub use heuristic::{Heuristic, HeuristicValue};
pub use manhattan::ManhattanDistance;
