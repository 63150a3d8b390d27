//! Example demonstrating nonogram board generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a board size or difficulty preset
//! - Generate a board from entropy, a hex seed, or a text phrase
//! - Render the board with its row and column clues
//! - Sample many boards in parallel and keep the densest one
//!
//! # Usage
//!
//! ```sh
//! cargo run -p griddler-generator --example generate_board
//! ```
//!
//! Reproduce a specific board:
//!
//! ```sh
//! cargo run -p griddler-generator --example generate_board -- \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Use a difficulty preset and require a minimum fill ratio, sampling up to
//! `--max-tries` candidates (default: 1000):
//!
//! ```sh
//! cargo run -p griddler-generator --example generate_board -- \
//!     --difficulty medium --min-filled 0.3 --max-tries 5000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use griddler_core::Difficulty;
use griddler_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Beginner,
    Easy,
    Medium,
    Hard,
}

impl DifficultyArg {
    fn preset(self) -> Difficulty {
        match self {
            Self::Beginner => Difficulty::Beginner,
            Self::Easy => Difficulty::Easy,
            Self::Medium => Difficulty::Medium,
            Self::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(long, value_name = "N", conflicts_with = "difficulty")]
    size: Option<usize>,

    /// Difficulty preset selecting the board size.
    #[arg(long, value_name = "PRESET")]
    difficulty: Option<DifficultyArg>,

    /// Generate from this 64-character hex seed.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a text phrase.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Keep sampling until a board fills at least this fraction of cells.
    #[arg(long, value_name = "FRACTION")]
    min_filled: Option<f64>,

    /// Maximum boards to sample when filtering.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    max_tries: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = match (args.size, args.difficulty) {
        (Some(size), None) => size,
        (None, Some(preset)) => preset.preset().size(),
        (None, None) => Difficulty::Easy.size(),
        (Some(_), Some(_)) => unreachable!("clap rejects conflicting arguments"),
    };

    let generator = match PuzzleGenerator::new(size) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let seed = args.seed.as_deref().map(|hex| match hex.parse::<PuzzleSeed>() {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    });
    let seed = seed.or_else(|| args.phrase.as_deref().map(PuzzleSeed::from_phrase));

    if let Some(min_filled) = args.min_filled {
        if seed.is_some() {
            eprintln!("--min-filled samples fresh seeds; it cannot be combined with a fixed seed.");
            process::exit(2);
        }
        sample_dense_board(&generator, min_filled, args.max_tries);
        return;
    }

    let result = match seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    match result {
        Ok(puzzle) => print_puzzle(&puzzle, None),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn sample_dense_board(generator: &PuzzleGenerator, min_filled: f64, max_tries: usize) {
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .filter_map(|_| generator.generate().ok())
        .max_by_key(|puzzle| puzzle.solution.filled_count());

    let total = generator.size() * generator.size();
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let threshold = (min_filled * total as f64).ceil() as usize;

    match best {
        Some(puzzle) if puzzle.solution.filled_count() >= threshold => {
            print_puzzle(&puzzle, Some((max_tries, min_filled)));
        }
        _ => {
            eprintln!("No board reached a {min_filled} fill ratio within {max_tries} tries.");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, selection: Option<(usize, f64)>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some((max_tries, min_filled)) = selection {
        println!("Selection:");
        println!("  Min filled: {min_filled}");
        println!("  Max tries: {max_tries}");
        println!();
    }

    println!("Board:");
    println!("{}", render_board(puzzle));

    let size = puzzle.solution.size();
    let filled = puzzle.solution.filled_count();
    println!();
    println!("Stats:");
    println!("  size: {size}×{size}");
    println!("  filled: {filled}/{}", size * size);
}

/// Renders the board with stacked column clues above and right-aligned row
/// clues to the left.
fn render_board(puzzle: &GeneratedPuzzle) -> String {
    let size = puzzle.solution.size();
    let row_labels: Vec<String> = (0..size)
        .map(|y| puzzle.clues.row(y).to_string())
        .collect();
    let label_width = row_labels.iter().map(String::len).max().unwrap_or(0);

    let column_numbers: Vec<Vec<usize>> = (0..size)
        .map(|x| puzzle.clues.column(x).numbers())
        .collect();
    let depth = column_numbers.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();

    // Column clues, bottom-aligned so the last number sits just above the
    // board.
    for line in 0..depth {
        out.push_str(&" ".repeat(label_width + 1));
        for numbers in &column_numbers {
            let pad = depth - numbers.len();
            if line >= pad {
                out.push_str(&format!("{:>2} ", numbers[line - pad]));
            } else {
                out.push_str("   ");
            }
        }
        out.push('\n');
    }

    for (y, label) in row_labels.iter().enumerate() {
        out.push_str(&format!("{label:>label_width$} "));
        for cell in puzzle.solution.row(y) {
            out.push_str(if cell { " # " } else { " . " });
        }
        out.push('\n');
    }

    out
}
