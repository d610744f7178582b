use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use std::{path::PathBuf, process::ExitCode};
use tilesolver::search::{
    solve, Board, PuzzleError, SearchConfig, SearchResult, SolverConfig, Strategy, Verbosity,
};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve the 8-puzzle with uniform-cost or A* search and write the solution
/// to a file.
struct Cli {
    #[arg(
        help = "The search method, 0 for uniform-cost search or 1 for A* search. \
        Asked for interactively when neither given here nor in the config file.",
        short = 'm',
        long = "method",
        id = "METHOD"
    )]
    method: Option<String>,
    #[arg(
        help = "The initial board as nine digits read row by row, 0 for the \
        blank [default: 876543210]",
        short = 'i',
        long = "initial",
        id = "INITIAL"
    )]
    initial: Option<String>,
    #[arg(
        help = "The output file [default: outputUniCost.txt or outputAstar.txt]",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(help = "A TOML config file", short = 'c', long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        help = "In A* search, rank the initial board by its f-value like any \
        other board instead of always taking it first",
        long = "no-root-reselection"
    )]
    no_root_reselection: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ (PuzzleError::InvalidStrategy(_) | PuzzleError::UnparsableStrategy(_))) => {
            error!("{}", e);
            println!("\nInvalid entry.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PuzzleError> {
    let file_config = match &cli.config {
        Some(path) => SolverConfig::from_path(path)?,
        None => SolverConfig::default(),
    };

    let strategy = match (&cli.method, file_config.method) {
        (Some(method), _) => method.parse()?,
        (None, Some(method)) => method,
        (None, None) => prompt_for_method()?,
    };
    let initial_board: Board = match &cli.initial {
        Some(initial) => initial.parse()?,
        None => file_config.initial_board()?,
    };
    let root_reselection =
        !cli.no_root_reselection && file_config.root_reselection.unwrap_or(true);
    let output = cli
        .output
        .or(file_config.output)
        .unwrap_or_else(|| PathBuf::from(strategy.default_output()));

    if !initial_board.is_solvable() {
        warn!(initial_board = %initial_board, "board has odd parity, search will exhaust");
    }

    println!("Starting");
    let config = SearchConfig::new(strategy).with_root_reselection(root_reselection);
    let (result, statistics) = solve(&config, initial_board);
    info!(
        expanded_nodes = statistics.expanded_nodes(),
        evaluated_nodes = statistics.evaluated_nodes(),
        generated_nodes = statistics.generated_nodes(),
        duplicate_successors = statistics.duplicate_successors(),
        dropped_nodes = statistics.dropped_nodes(),
        "search statistics"
    );
    match &result {
        SearchResult::Solved(solution) => {
            info!(moves = solution.moves(), "solution found");
            println!("Complete");
        }
        SearchResult::Exhausted => info!("no solution found"),
    }

    std::fs::write(&output, result.to_string())?;
    info!(output = %output.display(), "report written");
    Ok(())
}

fn prompt_for_method() -> Result<Strategy, PuzzleError> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Please enter '0' for Uniform Cost Search, or '1' for A* search")
        .interact_text()
        .map_err(|e| match e {
            dialoguer::Error::IO(e) => PuzzleError::Io(e),
        })?;
    input.parse()
}
