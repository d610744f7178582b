use thiserror::Error;

/// Errors surfaced by the solver library. Running out of frontier nodes is not
/// an error, see [`crate::search::SearchResult::Exhausted`].
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("invalid entry: {0} is not a recognised search method")]
    InvalidStrategy(i64),
    #[error("invalid entry: cannot read a search method from {0:?}")]
    UnparsableStrategy(String),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("invalid solution: {0}")]
    InvalidSolution(String),
    #[error("failed to parse config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
