//! Solver settings read from a TOML file. Every key is optional; command line
//! flags take precedence over the file.
//!
//! ```toml
//! method = 1
//! initial = "876543210"
//! output = "solution.txt"
//! root-reselection = false
//! ```

use crate::search::{Board, PuzzleError, Strategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SolverConfig {
    pub method: Option<Strategy>,
    pub initial: Option<String>,
    pub output: Option<PathBuf>,
    pub root_reselection: Option<bool>,
}

impl SolverConfig {
    pub fn from_path(path: &Path) -> Result<Self, PuzzleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, PuzzleError> {
        Ok(toml::from_str(text)?)
    }

    /// The configured initial board, or the default one.
    pub fn initial_board(&self) -> Result<Board, PuzzleError> {
        match &self.initial {
            Some(initial) => initial.parse(),
            None => Ok(Board::default_initial()),
        }
    }
}
