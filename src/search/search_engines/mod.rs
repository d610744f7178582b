mod astar;
mod search_engine;
mod uniform_cost;

pub use astar::AStar;
pub use search_engine::{solve, SearchConfig, SearchEngine, SearchResult, Strategy};
pub use uniform_cost::UniformCost;
