//! Seeded board generation.

use griddler_core::{CellGrid, PuzzleClues};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::{PuzzleSeed, viability};

/// Probability that a row receives a horizontal segment during fill.
const ROW_SEGMENT_PROBABILITY: f64 = 0.6;

/// Probability that a column left empty by the row pass is repaired with a
/// vertical segment.
const COLUMN_REPAIR_PROBABILITY: f64 = 0.5;

/// Candidate boards drawn from one seed before generation gives up.
const MAX_ATTEMPTS: usize = 1000;

/// Errors that can occur during puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The requested board size is unusable.
    #[display("board size must be at least 1, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// No candidate board passed the viability gate within the attempt
    /// ceiling.
    #[display("no viable board after {attempts} attempts")]
    RetryLimitExceeded {
        /// Number of candidates drawn before giving up.
        attempts: usize,
    },
}

/// A generated puzzle: the solution board, its derived clues, and the seed
/// that produced it.
///
/// The clues always equal the run-length encoding of the solution's rows
/// and columns, and they pass the viability gate ([`viability::clues_fit`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The solution board.
    pub solution: CellGrid,
    /// Run clues derived from the solution.
    pub clues: PuzzleClues,
    /// The seed the board was generated from.
    pub seed: PuzzleSeed,
}

/// Generates nonogram boards with a structured, non-uniform fill pattern.
///
/// Rather than independent per-cell noise, the generator lays a horizontal
/// segment into some rows, then repairs columns that ended up empty with a
/// vertical segment. The result has the clustered look of a drawn picture
/// and rarely degenerates into an all-empty or clue-starved board.
///
/// All randomness flows from an explicit [`PuzzleSeed`], so a board can be
/// reproduced exactly from its seed.
///
/// # Examples
///
/// ```
/// use griddler_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(10)?;
/// let puzzle = generator.generate()?;
/// assert_eq!(puzzle.solution.size(), 10);
///
/// // The recorded seed reproduces the same board.
/// let again = generator.generate_with_seed(puzzle.seed)?;
/// assert_eq!(again, puzzle);
/// # Ok::<(), griddler_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    size: usize,
}

impl PuzzleGenerator {
    /// Creates a generator for boards of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidSize`] if `size` is 0.
    pub fn new(size: usize) -> Result<Self, GenerateError> {
        if size == 0 {
            return Err(GenerateError::InvalidSize { size });
        }
        Ok(Self { size })
    }

    /// Returns the board side length this generator produces.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Generates a puzzle from a fresh entropy seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RetryLimitExceeded`] if no candidate board
    /// passes the viability gate within the attempt ceiling.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::from_entropy())
    }

    /// Generates a puzzle deterministically from the given seed.
    ///
    /// The same seed and size always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RetryLimitExceeded`] if no candidate board
    /// passes the viability gate within the attempt ceiling.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = Pcg64::from_seed(seed.bytes());

        for attempt in 1..=MAX_ATTEMPTS {
            let solution = self.draw_candidate(&mut rng);
            let clues = PuzzleClues::of(&solution);
            if viability::clues_fit(&clues, self.size) {
                return Ok(GeneratedPuzzle {
                    solution,
                    clues,
                    seed,
                });
            }
            log::debug!("candidate board rejected by viability gate (attempt {attempt})");
        }

        Err(GenerateError::RetryLimitExceeded {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Draws one candidate board: horizontal segments into rows, then
    /// vertical repair segments into columns the row pass left empty.
    fn draw_candidate(&self, rng: &mut Pcg64) -> CellGrid {
        let size = self.size;
        let half = size / 2;
        let mut grid = CellGrid::new(size);

        for y in 0..size {
            if rng.random_bool(ROW_SEGMENT_PROBABILITY) && half > 0 {
                let start = rng.random_range(0..half);
                let length = rng.random_range(0..half);
                grid.fill_row_span(y, start, length);
            }
        }

        for x in 0..size {
            let column_is_empty = !grid.column(x).any(|cell| cell);
            if column_is_empty && rng.random_bool(COLUMN_REPAIR_PROBABILITY) {
                let start = rng.random_range(0..size);
                let length = rng.random_range(1..=half.max(1));
                grid.fill_column_span(x, start, length);
            }
        }

        grid
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(
            PuzzleGenerator::new(0),
            Err(GenerateError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let seed = PuzzleSeed::from_str(SEED).unwrap();
        let generator = PuzzleGenerator::new(10).unwrap();
        let first = generator.generate_with_seed(seed).unwrap();
        let second = generator.generate_with_seed(seed).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, seed);
    }

    #[test]
    fn test_generated_clues_match_solution() {
        let seed = PuzzleSeed::from_str(SEED).unwrap();
        for size in 1..=20 {
            let generator = PuzzleGenerator::new(size).unwrap();
            let puzzle = generator.generate_with_seed(seed).unwrap();

            assert_eq!(puzzle.solution.size(), size);
            assert_eq!(puzzle.clues, PuzzleClues::of(&puzzle.solution));
            assert!(viability::clues_fit(&puzzle.clues, size));

            let max_run = puzzle
                .clues
                .rows()
                .iter()
                .chain(puzzle.clues.columns())
                .map(griddler_core::LineClue::max_run)
                .max()
                .unwrap();
            assert!(max_run <= size);
        }
    }

    #[test]
    fn test_entropy_generation_succeeds() {
        let generator = PuzzleGenerator::new(15).unwrap();
        let puzzle = generator.generate().unwrap();
        assert_eq!(puzzle.solution.size(), 15);
        assert!(viability::clues_fit(&puzzle.clues, 15));
    }

    proptest! {
        #[test]
        fn prop_any_seed_yields_a_viable_board(bytes in any::<[u8; 32]>()) {
            let seed = PuzzleSeed::from_bytes(bytes);
            for size in [1, 5, 8] {
                let generator = PuzzleGenerator::new(size).unwrap();
                let puzzle = generator.generate_with_seed(seed).unwrap();
                prop_assert_eq!(&puzzle.clues, &PuzzleClues::of(&puzzle.solution));
                prop_assert!(viability::clues_fit(&puzzle.clues, size));
            }
        }
    }
}
