//! Core data structures for the Griddler nonogram engine.
//!
//! This crate provides the fundamental types shared by board generation and
//! game management:
//!
//! 1. **Board** - [`grid`]: [`CellGrid`], a dynamic N×N binary grid with
//!    row/column line access and a compact text form.
//! 2. **Clues** - [`clue`]: [`LineClue`], the run-length encoding of a
//!    single line (with an explicit empty-line variant), and
//!    [`PuzzleClues`], the per-row/per-column clue set of a board.
//! 3. **Presets** - [`difficulty`]: [`Difficulty`], the conventional board
//!    sizes offered to players.
//!
//! # Examples
//!
//! ```
//! use griddler_core::{CellGrid, LineClue, PuzzleClues};
//!
//! let grid: CellGrid = "
//!     ###...
//!     .###.
//!     .....
//!     #...#
//!     ######
//! "
//! .parse()
//! .unwrap();
//!
//! let clues = PuzzleClues::of(&grid);
//! assert_eq!(clues.row(1), &LineClue::Runs(vec![3]));
//! assert_eq!(clues.row(2), &LineClue::Empty);
//! assert_eq!(clues.column(0), &LineClue::Runs(vec![1, 2]));
//! ```

pub mod clue;
pub mod difficulty;
pub mod grid;

pub use self::{
    clue::{LineClue, PuzzleClues},
    difficulty::Difficulty,
    grid::{CellGrid, ParseGridError},
};
