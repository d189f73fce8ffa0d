//! The navigation/editing state machine that owns the session's grid.

use crate::action::Action;
use crate::numbering::{NumberedCell, NumberedGrid, number_cells};
use crate::types::{Cell, Coords, Direction, Grid, HighlightedCell, Orientation};
use crate::words::{self, WordEntry};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A crossword editing session.
///
/// Owns the grid, the numbering and word lists derived from it, and the
/// cursor. Each dispatched [`Action`] is processed to completion and
/// leaves the session fully consistent: any intent that can change a
/// cell's variant or content rederives numbering and both word lists
/// before returning; cursor-only intents touch nothing else.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GridSession {
    /// The puzzle grid, exclusively owned and mutated in place.
    grid: Grid,
    /// Numbering metadata, same shape as the grid.
    numbering: NumberedGrid,
    /// Across words in row-major discovery order.
    across_words: Vec<WordEntry>,
    /// Down words in column-major discovery order.
    down_words: Vec<WordEntry>,
    /// The cursor: position plus active orientation.
    cursor: HighlightedCell,
}

impl GridSession {
    /// Creates a session over the given grid with the cursor at the
    /// origin, oriented across.
    #[instrument(skip(grid), fields(rows = grid.row_count(), columns = grid.column_count()))]
    pub fn new(grid: Grid) -> Self {
        let numbering = number_cells(&grid);
        let across_words = words::across_words(&grid, &numbering);
        let down_words = words::down_words(&grid, &numbering);
        Self {
            grid,
            numbering,
            across_words,
            down_words,
            cursor: HighlightedCell {
                coords: Coords::new(0, 0),
                orientation: Orientation::Across,
            },
        }
    }

    /// Applies one editing intent and returns the new consistent state.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> &Self {
        match action {
            Action::WriteLetter { letter, rebus } => self.write_letter(letter, rebus),
            Action::Backspace { rebus } => self.backspace(rebus),
            Action::ToggleBlack => self.toggle_black(),
            Action::ToggleCircle => self.toggle_circle(),
            Action::ToggleOrientation => self.toggle_orientation(),
            Action::ClickCell { coords } => self.click_cell(coords),
            Action::Move {
                orientation,
                direction,
            } => self.move_cursor(orientation, direction),
            Action::FindNext { reverse } => self.find_next(reverse),
        }
        self
    }

    /// True when `coords` lies in the same run as the cursor, in the
    /// cursor's orientation. Black cells belong to no run.
    pub fn same_word(&self, coords: Coords) -> bool {
        let Some(target) = self.numbered_at(coords) else {
            return false;
        };
        let Some(here) = self.numbered_at(self.cursor.coords) else {
            return false;
        };
        let (a, b) = match self.cursor.orientation {
            Orientation::Across => (here.across_word_index, target.across_word_index),
            Orientation::Down => (here.down_word_index, target.down_word_index),
        };
        a.is_some() && a == b
    }

    // ─────────────────────────────────────────────────────────────
    //  Grid-mutating intents (rederive numbering and words)
    // ─────────────────────────────────────────────────────────────

    fn write_letter(&mut self, letter: char, rebus: bool) {
        let upper: String = letter.to_uppercase().collect();
        if let Some(cell) = self.grid.cell_mut(self.cursor.coords) {
            match cell {
                Cell::Black => {
                    *cell = Cell::Fillable {
                        content: upper,
                        circled: false,
                    };
                }
                Cell::Fillable { content, .. } => {
                    if rebus {
                        content.push_str(&upper);
                    } else {
                        *content = upper;
                    }
                }
            }
        }
        if !rebus {
            self.cursor.coords =
                self.step(self.cursor.coords, self.cursor.orientation, Direction::Forwards);
        }
        self.recompute();
    }

    fn backspace(&mut self, rebus: bool) {
        if let Some(cell) = self.grid.cell_mut(self.cursor.coords) {
            match cell {
                Cell::Black => *cell = Cell::empty(),
                Cell::Fillable { content, .. } => {
                    if rebus {
                        content.pop();
                    } else {
                        content.clear();
                    }
                }
            }
        }
        if !rebus {
            self.cursor.coords =
                self.step(self.cursor.coords, self.cursor.orientation, Direction::Backwards);
        }
        self.recompute();
    }

    fn toggle_black(&mut self) {
        if let Some(cell) = self.grid.cell_mut(self.cursor.coords) {
            *cell = cell.toggled();
        }
        self.cursor.coords =
            self.step(self.cursor.coords, self.cursor.orientation, Direction::Forwards);
        self.recompute();
    }

    /// Rederives numbering and both word lists from the mutated grid.
    fn recompute(&mut self) {
        self.numbering = number_cells(&self.grid);
        self.across_words = words::across_words(&self.grid, &self.numbering);
        self.down_words = words::down_words(&self.grid, &self.numbering);
        debug!(
            across = self.across_words.len(),
            down = self.down_words.len(),
            "rederived numbering and word lists"
        );
    }

    // ─────────────────────────────────────────────────────────────
    //  Cursor-only intents (no rederivation)
    // ─────────────────────────────────────────────────────────────

    fn toggle_circle(&mut self) {
        if let Some(Cell::Fillable { circled, .. }) = self.grid.cell_mut(self.cursor.coords) {
            *circled = !*circled;
        }
    }

    fn toggle_orientation(&mut self) {
        self.cursor.orientation = self.cursor.orientation.toggled();
    }

    fn click_cell(&mut self, coords: Coords) {
        if !self.grid.contains(coords) {
            warn!(%coords, "ignoring click outside the grid");
            return;
        }
        if coords == self.cursor.coords {
            self.toggle_orientation();
        } else {
            self.cursor.coords = coords;
        }
    }

    fn move_cursor(&mut self, orientation: Orientation, direction: Direction) {
        let on_black = self
            .grid
            .cell_at(self.cursor.coords)
            .is_some_and(Cell::is_black);
        if on_black {
            // Nothing to reorient on a black square: step straight away in
            // the requested orientation and adopt it.
            self.cursor.coords = self.step(self.cursor.coords, orientation, direction);
            self.cursor.orientation = orientation;
        } else if orientation != self.cursor.orientation {
            // First press reorients, second press moves.
            debug!(%orientation, "reorienting cursor");
            self.cursor.orientation = orientation;
        } else {
            self.cursor.coords = self.step(self.cursor.coords, orientation, direction);
        }
    }

    fn find_next(&mut self, reverse: bool) {
        let collect = |pick: fn(&NumberedCell) -> bool| {
            let mut starts = Vec::new();
            for (i, row) in self.numbering.iter().enumerate() {
                for (j, numbered) in row.iter().enumerate() {
                    if pick(numbered) {
                        starts.push(Coords::new(i, j));
                    }
                }
            }
            if reverse {
                starts.reverse();
            }
            starts
        };
        let across = collect(|n| n.valid_across);
        let down = collect(|n| n.valid_down);
        let (same, opposite) = match self.cursor.orientation {
            Orientation::Across => (&across, &down),
            Orientation::Down => (&down, &across),
        };

        let here = (self.cursor.coords.row, self.cursor.coords.column);
        let after = |coords: &Coords| {
            let key = (coords.row, coords.column);
            if reverse { key < here } else { key > here }
        };

        if let Some(next) = same.iter().copied().find(after) {
            self.cursor.coords = next;
        } else if let Some(first) = opposite.first() {
            // No later run this way; wrap into the other orientation.
            self.cursor.coords = *first;
            self.cursor.orientation = self.cursor.orientation.toggled();
        } else if let Some(first) = same.first() {
            self.cursor.coords = *first;
        }
        // A grid with no runs at all leaves the cursor where it was.
    }

    /// One step along `orientation`, clamped to the grid bounds.
    fn step(&self, coords: Coords, orientation: Orientation, direction: Direction) -> Coords {
        let delta: isize = match direction {
            Direction::Forwards => 1,
            Direction::Backwards => -1,
        };
        let clamped = |value: usize, length: usize| -> usize {
            (value as isize + delta).clamp(0, length as isize - 1) as usize
        };
        match orientation {
            Orientation::Across => Coords {
                column: clamped(coords.column, self.grid.column_count()),
                ..coords
            },
            Orientation::Down => Coords {
                row: clamped(coords.row, self.grid.row_count()),
                ..coords
            },
        }
    }

    fn numbered_at(&self, coords: Coords) -> Option<&NumberedCell> {
        self.numbering.get(coords.row)?.get(coords.column)
    }
}
