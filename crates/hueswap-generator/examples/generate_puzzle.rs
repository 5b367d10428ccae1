//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with the built-in corner palettes
//! - Generate a puzzle, optionally from a given seed
//! - Display the seed, corners, fixed cells and the shuffled arrangement
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the grid size:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --level 6
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```

use std::process;

use clap::Parser;
use hueswap_core::Position;
use hueswap_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells per side.
    #[arg(short, long, value_name = "LEVEL", default_value_t = 4)]
    level: u16,

    /// Seed to generate the puzzle from (64 hex digits).
    #[arg(short, long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::default();
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);

    match generator.generate_with_seed(args.level, seed) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(e) => {
            eprintln!("Failed to generate puzzle: {e}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    let dimension = puzzle.dimension();

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Corners (top-left, top-right, bottom-right, bottom-left):");
    let corners = puzzle.corners.to_array().map(|c| c.to_string());
    println!("  {}", corners.join(" "));
    println!();
    println!("Fixed cells ({}):", puzzle.fixed.len());
    for pos in &puzzle.fixed {
        println!("  {pos}");
    }
    println!();
    println!(
        "Arrangement ({} of {} cells misplaced, `*` = fixed):",
        puzzle.arrangement.misplaced_count(),
        usize::from(dimension) * usize::from(dimension)
    );
    for row in 0..dimension {
        let line = (0..dimension)
            .map(|col| {
                let pos = Position::new(row, col);
                let identity = puzzle.arrangement.identity(pos).unwrap_or(pos);
                let marker = if puzzle.fixed.contains(&pos) { '*' } else { ' ' };
                format!("{}{marker}", puzzle.field[identity])
            })
            .collect::<Vec<_>>();
        println!("  {}", line.join(" "));
    }
}
