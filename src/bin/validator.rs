use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tilesolver::search::{validate, Board, Solution};

#[derive(Parser)]
#[command(version)]
/// Check a report written by the solver: the listed boards must start at the
/// initial board, move one tile at a time and end at the goal.
struct Cli {
    #[arg(help = "The report file to validate")]
    report: PathBuf,
    #[arg(
        help = "The initial board the report should start from",
        short = 'i',
        long = "initial",
        id = "INITIAL",
        default_value = "876543210"
    )]
    initial: Board,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = Solution::path_from_file(&cli.report)
        .and_then(|path| validate(&cli.initial, &path).map(|()| path.len() - 1));
    match result {
        Ok(moves) => {
            println!("Solution is valid ({} moves)", moves);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Solution is invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}
