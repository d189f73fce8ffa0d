//! Crossword grid library - the grid model and its editing state machine.
//!
//! # Architecture
//!
//! - **Types**: the grid of black/fillable cells and pure read-only queries
//! - **Numbering**: clue numbers and run membership derived from the layout
//! - **Words**: the literal across/down word strings implied by the numbering
//! - **Session**: the state machine turning editing intents into new state
//!
//! Data flows one direction per edit: an [`Action`] enters the
//! [`GridSession`], mutates the grid, and numbering plus word lists are
//! rederived before the new state is handed back. Rendering, keyboard
//! capture, and persistence live outside this crate.
//!
//! # Example
//!
//! ```
//! use crossword_grid::{Action, Coords, Grid, GridSession};
//!
//! let mut session = GridSession::new(Grid::demo());
//! session.dispatch(Action::WriteLetter { letter: 'a', rebus: false });
//!
//! // The black corner opened up and the cursor stepped right.
//! assert_eq!(session.cursor().coords, Coords::new(0, 1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod numbering;
mod session;
mod types;
mod words;

// Crate-level exports - editing intents
pub use action::Action;

// Crate-level exports - numbering engine
pub use numbering::{NumberedCell, NumberedGrid, number_cells};

// Crate-level exports - session state machine
pub use session::GridSession;

// Crate-level exports - grid and cell types
pub use types::{Cell, Coords, Direction, Grid, GridError, HighlightedCell, Orientation};

// Crate-level exports - word extraction
pub use words::{PLACEHOLDER, WordEntry, across_words, down_words};
