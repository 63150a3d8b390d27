//! Procedural board generation for the Griddler nonogram engine.
//!
//! Generation draws candidate boards with a structured fill pattern
//! (horizontal row segments plus vertical repair segments for empty
//! columns), derives their run clues, and keeps the first candidate whose
//! clues pass a structural viability gate. The regenerate-on-reject loop is
//! bounded; exhausting it surfaces [`GenerateError::RetryLimitExceeded`]
//! instead of blocking.
//!
//! All randomness is seeded: [`PuzzleGenerator::generate`] draws a fresh
//! [`PuzzleSeed`] and delegates to the fully deterministic
//! [`PuzzleGenerator::generate_with_seed`], and every [`GeneratedPuzzle`]
//! records its seed so boards can be shared and reproduced.
//!
//! # Examples
//!
//! ```
//! use griddler_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(5)?;
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("doc example"))?;
//!
//! // Clues always pass the viability gate.
//! assert!(griddler_generator::viability::clues_fit(&puzzle.clues, 5));
//! # Ok::<(), griddler_generator::GenerateError>(())
//! ```

pub mod viability;

mod generate;
mod seed;

pub use self::{
    generate::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
