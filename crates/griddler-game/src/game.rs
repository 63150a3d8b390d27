use griddler_core::{CellGrid, LineClue, PuzzleClues};
use griddler_generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator};

use crate::{GameError, ToggleOutcome};

/// A nonogram game session.
///
/// Holds the solution board, the clues derived from it, and the player's
/// marking grid. Player operations mutate only the marking grid; the
/// solution and clues are replaced only by installing a new puzzle.
///
/// # Example
///
/// ```
/// use griddler_game::Game;
///
/// let game = Game::new_puzzle(10)?;
/// assert_eq!(game.size(), 10);
/// assert!(game.player_grid().is_blank());
/// # Ok::<(), griddler_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    solution: CellGrid,
    clues: PuzzleClues,
    player: CellGrid,
}

impl Game {
    /// Creates a game from a generated puzzle.
    ///
    /// The player grid starts all-empty.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            solution,
            clues,
            seed: _,
        } = puzzle;
        let player = CellGrid::new(solution.size());
        Self {
            solution,
            clues,
            player,
        }
    }

    /// Generates a fresh puzzle of the given size and starts a game on it.
    ///
    /// # Errors
    ///
    /// Propagates [`GenerateError`] from the generator: an unusable size, or
    /// generation exhausting its attempt ceiling.
    pub fn new_puzzle(size: usize) -> Result<Self, GenerateError> {
        let puzzle = PuzzleGenerator::new(size)?.generate()?;
        Ok(Self::new(puzzle))
    }

    /// Replaces the current puzzle with a freshly generated one.
    ///
    /// On success the solution and clues are swapped out and the player
    /// grid is reset. On error the current game is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates [`GenerateError`] from the generator.
    pub fn start_new_puzzle(&mut self, size: usize) -> Result<(), GenerateError> {
        *self = Self::new_puzzle(size)?;
        Ok(())
    }

    /// Returns the board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.solution.size()
    }

    /// Returns the solution board.
    ///
    /// Exposed for rendering a finished or revealed board; solving logic
    /// should rely on the clues alone.
    #[must_use]
    pub fn solution(&self) -> &CellGrid {
        &self.solution
    }

    /// Returns the player's marking grid.
    #[must_use]
    pub fn player_grid(&self) -> &CellGrid {
        &self.player
    }

    /// Returns the full clue set.
    #[must_use]
    pub fn clues(&self) -> &PuzzleClues {
        &self.clues
    }

    /// Returns the clue for row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    #[must_use]
    pub fn row_clue(&self, y: usize) -> &LineClue {
        self.clues.row(y)
    }

    /// Returns the clue for column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    #[must_use]
    pub fn column_clue(&self, x: usize) -> &LineClue {
        self.clues.column(x)
    }

    /// Flips the player's mark at `(x, y)`.
    ///
    /// Returns whether the cell agrees with the solution afterwards, so the
    /// caller can track mistakes without comparing grids itself.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the coordinates fall outside
    /// the board; the game state is unchanged in that case.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<ToggleOutcome, GameError> {
        let size = self.size();
        if x >= size || y >= size {
            return Err(GameError::OutOfBounds { x, y, size });
        }

        let filled = self.player.toggle(x, y);
        if filled == self.solution.get(x, y) {
            Ok(ToggleOutcome::Match)
        } else {
            Ok(ToggleOutcome::Mismatch)
        }
    }

    /// Resets the player grid to all-empty.
    ///
    /// The solution and clues are unchanged.
    pub fn clear(&mut self) {
        self.player.clear();
    }

    /// Checks if the puzzle is solved.
    ///
    /// The player grid must equal the solution cell for cell; there is no
    /// partial credit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.player == self.solution
    }
}
