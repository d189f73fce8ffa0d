//! Clue numbering derived from the grid's black-square layout.

use crate::types::{Cell, Grid};
use serde::{Deserialize, Serialize};

/// Per-cell numbering metadata.
///
/// Derived wholesale from a grid snapshot; recomputed after any edit that
/// can change a cell's variant or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedCell {
    /// True when this cell starts an across run of length >= 2.
    pub valid_across: bool,
    /// True when this cell starts a down run of length >= 2.
    pub valid_down: bool,
    /// Displayed clue number; shared between orientations when both runs
    /// start here, absent when neither does.
    pub index: Option<u32>,
    /// Identifier of the across run this cell belongs to. Absent for black
    /// cells. Not a clue number; only tests same-word membership.
    pub across_word_index: Option<u32>,
    /// Identifier of the down run this cell belongs to. Absent for black
    /// cells.
    pub down_word_index: Option<u32>,
}

/// Numbering metadata for every cell, same shape as the grid it came from.
pub type NumberedGrid = Vec<Vec<NumberedCell>>;

/// Derives numbering for the whole grid in one row-major scan.
///
/// A cell starts a run when it is fillable and its predecessor in that
/// orientation is black or off the grid; the run is numbered only when the
/// successor is fillable too, so isolated single cells get no clue number.
/// One shared counter numbers qualifying cells in scan order. A separate
/// run-identifier counter increments on every run start, even length-1
/// runs, and powers the membership fields.
pub fn number_cells(grid: &Grid) -> NumberedGrid {
    let mut clue = 0u32;
    let mut run = 0u32;
    // Across runs live within one row, so a single carried slot suffices;
    // down runs span rows and need one carried slot per column.
    let mut across_run: Option<u32> = None;
    let mut down_runs: Vec<Option<u32>> = vec![None; grid.column_count()];

    grid.rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, cell)| {
                    let left = j.checked_sub(1).and_then(|j| grid.cell(i, j));
                    let above = i.checked_sub(1).and_then(|i| grid.cell(i, j));
                    let right = grid.cell(i, j + 1);
                    let below = grid.cell(i + 1, j);

                    let starts_across = cell.is_fillable() && left.is_none_or(Cell::is_black);
                    let starts_down = cell.is_fillable() && above.is_none_or(Cell::is_black);
                    let valid_across = starts_across && right.is_some_and(Cell::is_fillable);
                    let valid_down = starts_down && below.is_some_and(Cell::is_fillable);

                    let index = (valid_across || valid_down).then(|| {
                        clue += 1;
                        clue
                    });

                    if starts_across || starts_down {
                        run += 1;
                    }
                    if starts_across {
                        across_run = Some(run);
                    }
                    if starts_down {
                        down_runs[j] = Some(run);
                    }
                    if cell.is_black() {
                        across_run = None;
                        down_runs[j] = None;
                    }

                    NumberedCell {
                        valid_across,
                        valid_down,
                        index,
                        across_word_index: across_run,
                        down_word_index: down_runs[j],
                    }
                })
                .collect()
        })
        .collect()
}
