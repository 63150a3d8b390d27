//! Run-length clue derivation.
//!
//! Nonogram clues are the lengths of the maximal runs of filled cells in
//! each row and column, in line order. An empty line is a distinct case: it
//! is conventionally rendered as the single number `0`, but it carries no
//! runs, so it gets its own variant rather than a literal zero inside the
//! run list.

use derive_more::IsVariant;

use crate::CellGrid;

/// The run-length clue for a single line (one row or one column).
///
/// # Examples
///
/// ```
/// use griddler_core::LineClue;
///
/// let clue = LineClue::scan([true, false, true, true, false]);
/// assert_eq!(clue, LineClue::Runs(vec![1, 2]));
/// assert_eq!(clue.numbers(), [1, 2]);
///
/// let blank = LineClue::scan([false, false, false]);
/// assert_eq!(blank, LineClue::Empty);
/// assert_eq!(blank.numbers(), [0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum LineClue {
    /// A line with no filled cells. Rendered as the single number `0`.
    Empty,
    /// Lengths of the maximal runs of filled cells, in line order.
    ///
    /// The list is never empty and every length is at least 1; [`scan`]
    /// upholds this.
    ///
    /// [`scan`]: LineClue::scan
    Runs(Vec<usize>),
}

impl LineClue {
    /// Derives the clue for a line of cells.
    ///
    /// Scans once, counting consecutive filled cells; each time the run
    /// breaks the count is emitted, and a trailing run is flushed at the end
    /// of the line. A line with no filled cells yields [`LineClue::Empty`].
    #[must_use]
    pub fn scan<I>(line: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut runs = Vec::new();
        let mut count = 0;
        for cell in line {
            if cell {
                count += 1;
            } else if count > 0 {
                runs.push(count);
                count = 0;
            }
        }
        if count > 0 {
            runs.push(count);
        }

        if runs.is_empty() {
            Self::Empty
        } else {
            Self::Runs(runs)
        }
    }

    /// Returns the run lengths, without the empty-line sentinel.
    ///
    /// An empty line yields an empty slice.
    #[must_use]
    pub fn runs(&self) -> &[usize] {
        match self {
            Self::Empty => &[],
            Self::Runs(runs) => runs,
        }
    }

    /// Returns the clue numbers as they are displayed to a player.
    ///
    /// An empty line yields `[0]`, so the result is never empty.
    #[must_use]
    pub fn numbers(&self) -> Vec<usize> {
        match self {
            Self::Empty => vec![0],
            Self::Runs(runs) => runs.clone(),
        }
    }

    /// Returns the largest run length, or 0 for an empty line.
    #[must_use]
    pub fn max_run(&self) -> usize {
        self.runs().iter().copied().max().unwrap_or(0)
    }
}

impl std::fmt::Display for LineClue {
    /// Formats the clue numbers space-separated, e.g. `2 1` or `0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("0"),
            Self::Runs(runs) => {
                for (i, run) in runs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{run}")?;
                }
                Ok(())
            }
        }
    }
}

/// The full clue set of a puzzle: one [`LineClue`] per row and per column.
///
/// Derived deterministically from a solution grid; the row clue at index `y`
/// always equals the run-length encoding of row `y`, and likewise for
/// columns.
///
/// # Examples
///
/// ```
/// use griddler_core::{CellGrid, LineClue, PuzzleClues};
///
/// let grid: CellGrid = "#.#\n...\n##.".parse().unwrap();
/// let clues = PuzzleClues::of(&grid);
/// assert_eq!(clues.row(0), &LineClue::Runs(vec![1, 1]));
/// assert_eq!(clues.row(1), &LineClue::Empty);
/// assert_eq!(clues.column(2), &LineClue::Runs(vec![1]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleClues {
    rows: Vec<LineClue>,
    columns: Vec<LineClue>,
}

impl PuzzleClues {
    /// Derives the clues for every row and column of a grid.
    #[must_use]
    pub fn of(grid: &CellGrid) -> Self {
        let rows = (0..grid.size())
            .map(|y| LineClue::scan(grid.row(y)))
            .collect();
        let columns = (0..grid.size())
            .map(|x| LineClue::scan(grid.column(x)))
            .collect();
        Self { rows, columns }
    }

    /// Returns all row clues, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[LineClue] {
        &self.rows
    }

    /// Returns all column clues, left to right.
    #[must_use]
    pub fn columns(&self) -> &[LineClue] {
        &self.columns
    }

    /// Returns the clue for row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    #[must_use]
    pub fn row(&self, y: usize) -> &LineClue {
        &self.rows[y]
    }

    /// Returns the clue for column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    #[must_use]
    pub fn column(&self, x: usize) -> &LineClue {
        &self.columns[x]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_scan_basic_runs() {
        assert_eq!(
            LineClue::scan([true, true, false, true]),
            LineClue::Runs(vec![2, 1])
        );
        assert_eq!(
            LineClue::scan([false, true, true, true, false]),
            LineClue::Runs(vec![3])
        );
        assert_eq!(LineClue::scan([true]), LineClue::Runs(vec![1]));
    }

    #[test]
    fn test_scan_empty_line_sentinel() {
        // An all-empty line is the Empty variant, not a zero run.
        for len in 0..6 {
            let clue = LineClue::scan(std::iter::repeat_n(false, len));
            assert_eq!(clue, LineClue::Empty);
            assert_eq!(clue.numbers(), [0]);
            assert_eq!(clue.runs(), &[] as &[usize]);
        }
    }

    #[test]
    fn test_scan_all_filled_line() {
        for len in 1..6 {
            let clue = LineClue::scan(std::iter::repeat_n(true, len));
            assert_eq!(clue, LineClue::Runs(vec![len]));
            assert_eq!(clue.max_run(), len);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(LineClue::Runs(vec![2, 1, 3]).to_string(), "2 1 3");
        assert_eq!(LineClue::Empty.to_string(), "0");
    }

    #[test]
    fn test_clues_of_known_grid() {
        // Rows: #.# / ... / ##.  Columns: #.# / ..# / #..
        let grid: CellGrid = "#.#\n...\n##.".parse().unwrap();
        let clues = PuzzleClues::of(&grid);

        assert_eq!(clues.rows().len(), 3);
        assert_eq!(clues.row(0), &LineClue::Runs(vec![1, 1]));
        assert_eq!(clues.row(1), &LineClue::Empty);
        assert_eq!(clues.row(2), &LineClue::Runs(vec![2]));

        assert_eq!(clues.columns().len(), 3);
        assert_eq!(clues.column(0), &LineClue::Runs(vec![1, 1]));
        assert_eq!(clues.column(1), &LineClue::Runs(vec![1]));
        assert_eq!(clues.column(2), &LineClue::Runs(vec![1]));
    }

    #[test]
    fn test_clues_of_zero_size_grid() {
        let clues = PuzzleClues::of(&CellGrid::new(0));
        assert!(clues.rows().is_empty());
        assert!(clues.columns().is_empty());
    }

    /// Rebuilds a line from a clue: runs left-packed, one gap between runs.
    fn left_packed_line(clue: &LineClue, len: usize) -> Vec<bool> {
        let mut line = vec![false; len];
        let mut x = 0;
        for &run in clue.runs() {
            for cell in &mut line[x..x + run] {
                *cell = true;
            }
            x += run + 1;
        }
        line
    }

    proptest! {
        #[test]
        fn prop_clue_round_trips_through_left_packed_line(
            line in prop::collection::vec(any::<bool>(), 0..40)
        ) {
            let clue = LineClue::scan(line.iter().copied());
            let rebuilt = left_packed_line(&clue, line.len());
            prop_assert_eq!(LineClue::scan(rebuilt), clue);
        }

        #[test]
        fn prop_runs_fit_in_line(line in prop::collection::vec(any::<bool>(), 0..40)) {
            let clue = LineClue::scan(line.iter().copied());
            let runs = clue.runs();
            // Runs plus the mandatory gaps between them never exceed the line.
            let occupied = runs.iter().sum::<usize>() + runs.len().saturating_sub(1);
            prop_assert!(occupied <= line.len());
            prop_assert!(runs.iter().all(|&run| run >= 1));
        }

        #[test]
        fn prop_column_clues_match_transposed_rows(
            (size, cells) in (0usize..10).prop_flat_map(|size| {
                (Just(size), prop::collection::vec(any::<bool>(), size * size))
            })
        ) {
            let mut grid = CellGrid::new(size);
            let mut transposed = CellGrid::new(size);
            for y in 0..size {
                for x in 0..size {
                    let filled = cells[y * size + x];
                    grid.set(x, y, filled);
                    transposed.set(y, x, filled);
                }
            }

            let clues = PuzzleClues::of(&grid);
            let transposed_clues = PuzzleClues::of(&transposed);
            prop_assert_eq!(clues.columns(), transposed_clues.rows());
            prop_assert_eq!(clues.rows(), transposed_clues.columns());
        }
    }
}
