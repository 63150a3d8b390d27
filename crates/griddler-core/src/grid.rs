//! Square binary board representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// An N×N grid of binary cells (filled or empty), stored row-major.
///
/// Cells are addressed by `(x, y)` where `x` is the column (left to right)
/// and `y` is the row (top to bottom). The grid is always square; its side
/// length is fixed at construction.
///
/// # Examples
///
/// ```
/// use griddler_core::CellGrid;
///
/// let mut grid = CellGrid::new(5);
/// assert_eq!(grid.size(), 5);
/// assert!(grid.is_blank());
///
/// grid.set(2, 0, true);
/// assert!(grid.get(2, 0));
/// assert_eq!(grid.filled_count(), 1);
/// ```
///
/// Grids have a compact text form (`#` filled, `.` empty) usable in both
/// directions:
///
/// ```
/// use griddler_core::CellGrid;
///
/// let grid: CellGrid = "#.#\n...\n##.".parse().unwrap();
/// assert_eq!(grid.to_string(), "#.#\n...\n##.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    size: usize,
    cells: Vec<bool>,
}

impl CellGrid {
    /// Creates an all-empty grid with the given side length.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) out of bounds for size {}",
            self.size
        );
        y * self.size + x
    }

    /// Returns whether the cell at `(x, y)` is filled.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        let index = self.index(x, y);
        self.cells[index] = filled;
    }

    /// Flips the cell at `(x, y)` and returns its new value.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside the grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let index = self.index(x, y);
        self.cells[index] = !self.cells[index];
        self.cells[index]
    }

    /// Returns an iterator over row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the grid.
    pub fn row(&self, y: usize) -> impl Iterator<Item = bool> + '_ {
        assert!(y < self.size, "row {y} out of bounds for size {}", self.size);
        self.cells[y * self.size..(y + 1) * self.size].iter().copied()
    }

    /// Returns an iterator over column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the grid.
    pub fn column(&self, x: usize) -> impl Iterator<Item = bool> + '_ {
        assert!(
            x < self.size,
            "column {x} out of bounds for size {}",
            self.size
        );
        (0..self.size).map(move |y| self.cells[y * self.size + x])
    }

    /// Fills `length` cells of row `y` starting at column `start`.
    ///
    /// The span is clipped at the right edge of the board, so
    /// `start + length` may exceed the size.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the grid.
    pub fn fill_row_span(&mut self, y: usize, start: usize, length: usize) {
        assert!(y < self.size, "row {y} out of bounds for size {}", self.size);
        let end = start.saturating_add(length).min(self.size);
        for x in start..end {
            self.cells[y * self.size + x] = true;
        }
    }

    /// Fills `length` cells of column `x` starting at row `start`.
    ///
    /// The span is clipped at the bottom edge of the board, so
    /// `start + length` may exceed the size.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the grid.
    pub fn fill_column_span(&mut self, x: usize, start: usize, length: usize) {
        assert!(
            x < self.size,
            "column {x} out of bounds for size {}",
            self.size
        );
        let end = start.saturating_add(length).min(self.size);
        for y in start..end {
            self.cells[y * self.size + x] = true;
        }
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns whether no cell is filled.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            if y > 0 {
                f.write_str("\n")?;
            }
            for cell in self.row(y) {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`CellGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than `#`, `*`, `.`, or `_` appeared in a row.
    #[display("unrecognized cell character {ch:?}")]
    InvalidCell {
        /// The offending character.
        ch: char,
    },
    /// The rows do not form a square grid.
    #[display("grid is not square: {rows} rows but row {row} has {width} cells")]
    NotSquare {
        /// Total number of rows.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Width of the offending row.
        width: usize,
    },
}

impl FromStr for CellGrid {
    type Err = ParseGridError;

    /// Parses a grid from whitespace-separated rows of `#`/`*` (filled) and
    /// `.`/`_` (empty) characters. The rows must form a square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.split_whitespace() {
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                match ch {
                    '#' | '*' => row.push(true),
                    '.' | '_' => row.push(false),
                    _ => return Err(ParseGridError::InvalidCell { ch }),
                }
            }
            rows.push(row);
        }

        let size = rows.len();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ParseGridError::NotSquare {
                    rows: size,
                    row: y,
                    width: row.len(),
                });
            }
        }

        let mut grid = Self::new(size);
        for (y, row) in rows.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                grid.set(x, y, filled);
            }
        }
        Ok(grid)
    }
}
