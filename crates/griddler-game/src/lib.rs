//! Game state management for the Griddler nonogram engine.
//!
//! A [`Game`] owns a generated puzzle (solution board plus derived clues)
//! and the player's marking grid. Player actions mutate only the marking
//! grid; the solution and clues change only when a new puzzle is installed.
//!
//! The presentation layer drives a game through a small surface: toggle a
//! cell on click, re-read the grids to redraw, count mistakes from the
//! [`ToggleOutcome`] of each move, and announce completion when
//! [`Game::is_solved`] turns true.
//!
//! # Examples
//!
//! ```
//! use griddler_game::Game;
//!
//! let mut game = Game::new_puzzle(5)?;
//! let outcome = game.toggle(2, 3)?;
//! if outcome.is_mismatch() {
//!     // the presentation layer would bump its mistake counter here
//! }
//! game.clear();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use derive_more::IsVariant;

mod game;

pub use self::game::Game;

/// Errors that can occur while manipulating a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A cell coordinate fell outside the board.
    #[display("cell ({x}, {y}) is outside the {size}×{size} board")]
    OutOfBounds {
        /// Column of the rejected cell.
        x: usize,
        /// Row of the rejected cell.
        y: usize,
        /// Side length of the board.
        size: usize,
    },
}

/// How a toggled cell relates to the solution afterwards.
///
/// Returned by [`Game::toggle`] so the caller can keep a mistake counter
/// without re-reading both grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ToggleOutcome {
    /// The cell now agrees with the solution (a mismatch was removed).
    Match,
    /// The cell now disagrees with the solution (a mismatch was
    /// introduced).
    Mismatch,
}
