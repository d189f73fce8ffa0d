//! Core domain types for the crossword grid.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[display("grid must have at least one row and one column")]
    Empty,

    /// A row's length disagrees with the first row's.
    #[display("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// The two orientations a word can run in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Orientation {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Orientation {
    /// Returns the other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }
}

/// Direction of travel along an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Direction {
    /// Rightward or downward.
    Forwards,
    /// Leftward or upward.
    Backwards,
}

/// A zero-based `(row, column)` coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
}

impl Coords {
    /// Creates a coordinate pair.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A square in the puzzle grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// A black square; blocks word continuity in both orientations.
    Black,
    /// A fillable square holding entered content.
    Fillable {
        /// Entered content: empty, a single letter, or several letters (rebus).
        content: String,
        /// Decorative circle flag; no effect on numbering or words.
        circled: bool,
    },
}

impl Cell {
    /// Creates an empty, uncircled fillable cell.
    pub fn empty() -> Self {
        Cell::Fillable {
            content: String::new(),
            circled: false,
        }
    }

    /// True for black squares.
    pub fn is_black(&self) -> bool {
        matches!(self, Cell::Black)
    }

    /// True for fillable squares.
    pub fn is_fillable(&self) -> bool {
        !self.is_black()
    }

    /// Flips between a black square and an empty fillable square.
    ///
    /// Any content the cell held is discarded.
    pub fn toggled(&self) -> Self {
        match self {
            Cell::Black => Cell::empty(),
            Cell::Fillable { .. } => Cell::Black,
        }
    }
}

/// The session cursor: a position plus the active word orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedCell {
    /// Position under the cursor.
    pub coords: Coords,
    /// Active orientation, across or down.
    pub orientation: Orientation,
}

/// A rectangular crossword grid.
///
/// Every row has the same length and the grid is never empty; both are
/// enforced at construction so every downstream query can assume them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Rows of cells, outer index is the row.
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] when there are no rows or no columns,
    /// and [`GridError::Ragged`] when row lengths disagree.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Generates a randomized starting shell.
    ///
    /// Each cell is black with probability `black_probability` (clamped to
    /// `[0, 1]`), otherwise an empty fillable cell. Not deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] when either dimension is zero.
    pub fn random(rows: usize, columns: usize, black_probability: f64) -> Result<Self, GridError> {
        let p = black_probability.clamp(0.0, 1.0);
        let mut rng = rand::rng();
        let rows = (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| {
                        if rng.random_bool(p) {
                            Cell::Black
                        } else {
                            Cell::empty()
                        }
                    })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// The 4x4 starter grid: a black square in the corner, the rest open.
    pub fn demo() -> Self {
        let rows = (0..4)
            .map(|i| {
                (0..4)
                    .map(|j| {
                        if i == 0 && j == 0 {
                            Cell::Black
                        } else {
                            Cell::empty()
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Rows of cells, outer slice indexed by row.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The cell at `(row, column)`, or `None` outside the grid.
    ///
    /// Callers treat out of bounds as an implicit black border.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(column)
    }

    /// The cell at the given coordinates, or `None` outside the grid.
    pub fn cell_at(&self, coords: Coords) -> Option<&Cell> {
        self.cell(coords.row, coords.column)
    }

    /// Mutable access for the session's in-place edits.
    pub(crate) fn cell_mut(&mut self, coords: Coords) -> Option<&mut Cell> {
        self.rows.get_mut(coords.row)?.get_mut(coords.column)
    }

    /// True when the coordinates fall inside the grid.
    pub fn contains(&self, coords: Coords) -> bool {
        coords.row < self.row_count() && coords.column < self.column_count()
    }

    /// Returns a grid whose rows are this grid's columns.
    ///
    /// Lets the row-scanning word walk serve both orientations.
    pub fn transpose(&self) -> Self {
        let rows = (0..self.column_count())
            .map(|column| self.rows.iter().map(|row| row[column].clone()).collect())
            .collect();
        Self { rows }
    }
}
