use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use warehouse_pathfinding::{input, shortest_path_length};

/// Prints the number of moves on a shortest path from S to G, or -1 if there is none.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct CLIArgs {
    /// Floor plan file; reads stdin when absent or "-".
    pub input_path: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // RUST_LOG is parsed after the -v level so it can override it.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let rows = match args.input_path.as_deref() {
        Some(path) if path.as_os_str() != "-" => input::read_rows_from_path(path)?,
        _ => input::read_rows(BufReader::new(io::stdin().lock()))
            .context("Failed to read floor plan from stdin.")?,
    };
    info!("Read floor plan with {} rows", rows.len());

    println!("{}", shortest_path_length(&rows));
    Ok(())
}
