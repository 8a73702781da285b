//! Generate (or read) a sliding-tile board, solve it with A*, and print a
//! JSON report on stdout. Logs go to stderr; set `RUST_LOG` or
//! `WAYFINDER_LOG` to change the filter.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wayfinder::puzzle::{self, Board};
use wayfinder::PuzzleConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with a puzzle configuration; flags override its fields
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Board height
    #[arg(long, short)]
    rows: Option<usize>,

    /// Board width
    #[arg(long, short = 'w')]
    cols: Option<usize>,

    /// Seed for board generation
    #[arg(long, short, env = "WAYFINDER_SEED")]
    seed: Option<u64>,

    /// Solve this row-major layout instead of a random board (e.g. 1,2,3,4,5,6,0,7,8)
    #[arg(long, value_delimiter = ',')]
    tiles: Option<Vec<u8>>,

    /// Hard limit on the A* frontier size
    #[arg(long)]
    max_frontier: Option<usize>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "wayfinder=debug" } else { "wayfinder=warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("WAYFINDER_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install the log subscriber")
}

fn load_config(args: &Args) -> Result<PuzzleConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            PuzzleConfig::from_json_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => PuzzleConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(max) = args.max_frontier {
        config.search.frontier.max_capacity = max;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;
    let config = load_config(&args)?;

    let (board, solution) = match &args.tiles {
        Some(tiles) => {
            let board = Board::new(config.rows, config.cols, tiles.clone())
                .context("invalid --tiles layout")?;
            let solution = puzzle::solve(&board, &config.search).context("search failed")?;
            (board, solution)
        }
        None => puzzle::solve_random(&config).context("search failed")?,
    };

    let report = serde_json::json!({
        "board": board,
        "solution": solution,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
