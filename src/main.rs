use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use crossterm::style::Stylize;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use slide_solver::{generator, Board, BoardError, Difficulty, ParseBoardError, Solver};

/// Solve a sliding-tile puzzle in the fewest moves.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file: the size on the first line, then one row of tiles per
    /// line with 0 for the blank. A puzzle is generated when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Size of a generated puzzle.
    #[arg(long, value_name = "N", default_value_t = 3)]
    size: usize,

    /// How far a generated puzzle is scrambled (easy, medium or hard).
    #[arg(long, value_name = "LEVEL", default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Shuffle every tile instead of scrambling. The puzzle may be unsolvable.
    #[arg(long)]
    random: bool,

    /// Seed for puzzle generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the outcome.
    #[arg(short, long)]
    quiet: bool,

    /// Disable terminal styling.
    #[arg(long)]
    plain: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("{_0}")]
    Board(#[from] BoardError),
    #[display("{_0}")]
    Parse(#[from] ParseBoardError),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let board = load(args)?;
    if !args.quiet {
        println!("Initial board:");
        print_board(&board, None, args.plain);
    }

    let solver = Solver::new(board);
    info!("search created {} nodes", solver.expanded());

    let Some(path) = solver.solution() else {
        println!("No solution possible");
        return Ok(());
    };
    println!("Minimum number of moves = {}", path.len() - 1);
    if args.quiet {
        return Ok(());
    }

    for pair in path.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if let Some(dir) = prev.move_to(next) {
            println!("{dir}");
        }
        print_board(next, Some(prev.blank()), args.plain);
    }
    Ok(())
}

fn load(args: &Args) -> Result<Board, CliError> {
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        return Ok(text.parse()?);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = if args.random {
        generator::random(args.size, &mut rng)?
    } else {
        generator::scrambled(args.size, args.difficulty.steps(), &mut rng)?
    };
    info!("generated {0}x{0} board", args.size);
    Ok(board)
}

/// Prints `board`, highlighting the tile that just slid out of `moved`.
fn print_board(board: &Board, moved: Option<(usize, usize)>, plain: bool) {
    let width = (board.dimension() * board.dimension() - 1).to_string().len();
    for (row, tiles) in board.rows().enumerate() {
        let cells: Vec<String> = tiles
            .iter()
            .enumerate()
            .map(|(col, &tile)| {
                let cell = if tile == 0 {
                    format!("{:>width$}", ".")
                } else {
                    format!("{tile:>width$}")
                };
                if plain {
                    cell
                } else if moved == Some((row, col)) {
                    cell.bold().green().to_string()
                } else if tile == 0 {
                    cell.dark_grey().to_string()
                } else {
                    cell
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }
    println!();
}
