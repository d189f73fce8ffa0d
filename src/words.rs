//! Word extraction: the literal strings implied by each numbered start.

use crate::numbering::NumberedGrid;
use crate::types::{Cell, Coords, Grid};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder substituted for an empty fillable cell in extracted words.
pub const PLACEHOLDER: char = '_';

/// One extracted word with its start position and duplicate counter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct WordEntry {
    /// Extracted content, placeholders included. A rebus cell contributes
    /// its full multi-character content verbatim.
    word: String,
    /// Zero-based counter distinguishing repeats of the same literal word
    /// within one orientation's list.
    index: u32,
    /// Row of the run's first cell.
    row: usize,
    /// Column of the run's first cell.
    column: usize,
}

/// Extracts the across word list in row-major discovery order.
pub fn across_words(grid: &Grid, numbering: &NumberedGrid) -> Vec<WordEntry> {
    let mut duplicates = HashMap::new();
    let mut entries = Vec::new();
    for (i, row) in grid.rows().iter().enumerate() {
        for j in 0..row.len() {
            if numbering[i][j].valid_across {
                entries.push(entry(&row[j..], Coords::new(i, j), &mut duplicates));
            }
        }
    }
    entries
}

/// Extracts the down word list in column-major order.
///
/// Walks the transposed grid so the same forward row walk serves both
/// orientations; output order is the transposed grid's row-major order.
pub fn down_words(grid: &Grid, numbering: &NumberedGrid) -> Vec<WordEntry> {
    let transposed = grid.transpose();
    let mut duplicates = HashMap::new();
    let mut entries = Vec::new();
    for (j, column) in transposed.rows().iter().enumerate() {
        for i in 0..column.len() {
            if numbering[i][j].valid_down {
                entries.push(entry(&column[i..], Coords::new(i, j), &mut duplicates));
            }
        }
    }
    entries
}

/// Reads one run from its start until a black cell or the edge, then
/// assigns the duplicate counter for the resulting literal word.
fn entry(run: &[Cell], start: Coords, duplicates: &mut HashMap<String, u32>) -> WordEntry {
    let word: String = run
        .iter()
        .map_while(|cell| match cell {
            Cell::Black => None,
            Cell::Fillable { content, .. } if content.is_empty() => {
                Some(PLACEHOLDER.to_string())
            }
            Cell::Fillable { content, .. } => Some(content.clone()),
        })
        .collect();
    let counter = duplicates.entry(word.clone()).or_insert(0);
    let index = *counter;
    *counter += 1;
    WordEntry {
        word,
        index,
        row: start.row,
        column: start.column,
    }
}
