//! Structural viability gate for generated boards.
//!
//! This is a cheap necessary-condition filter over a clue set, not a
//! solver: it rejects boards whose clues are structurally broken (a clue
//! list with no entries at all, or a run longer than the line it sits in).
//! It makes no claim about unique solvability.

use griddler_core::{LineClue, PuzzleClues};

/// Returns whether a clue set is structurally viable for a board of the
/// given size.
///
/// Every line must carry at least the empty-line sentinel, and no run may
/// exceed the line length. A truly run-less clue list cannot come out of
/// [`PuzzleClues::of`]; that check is kept for clue sets built by hand.
///
/// # Examples
///
/// ```
/// use griddler_core::{CellGrid, PuzzleClues};
/// use griddler_generator::viability::clues_fit;
///
/// let grid: CellGrid = "#.\n..".parse().unwrap();
/// assert!(clues_fit(&PuzzleClues::of(&grid), 2));
/// ```
#[must_use]
pub fn clues_fit(clues: &PuzzleClues, size: usize) -> bool {
    clues
        .rows()
        .iter()
        .chain(clues.columns())
        .all(|clue| line_fits(clue, size))
}

fn line_fits(clue: &LineClue, size: usize) -> bool {
    match clue {
        LineClue::Empty => true,
        LineClue::Runs(runs) => !runs.is_empty() && runs.iter().all(|&run| run <= size),
    }
}
