//! First-class editing intents for the grid session.
//!
//! Intents are domain events, not side effects. They carry only primitive
//! data, never references into the grid, so they can be serialized for
//! replay, logged for debugging, and dispatched from any input layer.

use crate::types::{Coords, Direction, Orientation};
use serde::{Deserialize, Serialize};

/// A discrete editing intent dispatched to a
/// [`GridSession`](crate::GridSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Write a letter into the cell under the cursor. Opens a black cell.
    WriteLetter {
        /// The letter to write; stored uppercased.
        letter: char,
        /// Append to the existing content instead of replacing it, and
        /// hold the cursor in place.
        rebus: bool,
    },
    /// Erase from the cell under the cursor. Opens a black cell.
    Backspace {
        /// Drop only the last character instead of clearing, and hold the
        /// cursor in place.
        rebus: bool,
    },
    /// Flip the cell under the cursor between black and empty fillable.
    ToggleBlack,
    /// Flip the decorative circle on a fillable cell; no-op on black.
    ToggleCircle,
    /// Flip the cursor's orientation between across and down.
    ToggleOrientation,
    /// Select a cell; clicking the cursor's own cell flips orientation
    /// instead.
    ClickCell {
        /// The clicked position.
        coords: Coords,
    },
    /// Step the cursor, reorienting first when the requested orientation
    /// differs from the current one.
    Move {
        /// Requested orientation of travel.
        orientation: Orientation,
        /// Requested direction along that orientation.
        direction: Direction,
    },
    /// Jump the cursor to the nearest following run start.
    FindNext {
        /// Search backwards through scan order instead of forwards.
        reverse: bool,
    },
}
