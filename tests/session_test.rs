//! Scenario tests for the editing state machine.

use crossword_grid::{
    Action, Cell, Coords, Direction, Grid, GridSession, Orientation,
};
use strum::IntoEnumIterator;

fn grid(rows: &[&str]) -> Grid {
    let cells = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|ch| match ch {
                    '#' => Cell::Black,
                    '.' => Cell::empty(),
                    ch => Cell::Fillable {
                        content: ch.to_string(),
                        circled: false,
                    },
                })
                .collect()
        })
        .collect();
    Grid::new(cells).unwrap()
}

fn session(rows: &[&str]) -> GridSession {
    GridSession::new(grid(rows))
}

fn click(session: &mut GridSession, row: usize, column: usize) {
    session.dispatch(Action::ClickCell {
        coords: Coords::new(row, column),
    });
}

#[test]
fn test_write_letter_replaces_and_advances() {
    let mut session = session(&["...", "..."]);
    session.dispatch(Action::WriteLetter {
        letter: 'a',
        rebus: false,
    });

    assert_eq!(
        session.grid().cell(0, 0),
        Some(&Cell::Fillable {
            content: "A".to_string(),
            circled: false,
        })
    );
    assert_eq!(session.cursor().coords, Coords::new(0, 1));
}

#[test]
fn test_write_letter_opens_black_cell() {
    let mut session = GridSession::new(Grid::demo());
    assert_eq!(session.grid().cell(0, 0), Some(&Cell::Black));

    session.dispatch(Action::WriteLetter {
        letter: 'a',
        rebus: false,
    });

    assert_eq!(
        session.grid().cell(0, 0),
        Some(&Cell::Fillable {
            content: "A".to_string(),
            circled: false,
        })
    );
    assert_eq!(session.cursor().coords, Coords::new(0, 1));

    // Opening the corner turned row 0 and column 0 into full-length runs.
    assert!(session.numbering()[0][0].valid_across);
    assert!(session.numbering()[0][0].valid_down);
    assert_eq!(session.across_words()[0].word(), "A___");
}

#[test]
fn test_rebus_write_appends_and_holds() {
    let mut session = session(&["q..", "..."]);
    session.dispatch(Action::WriteLetter {
        letter: 'u',
        rebus: true,
    });

    assert_eq!(
        session.grid().cell(0, 0),
        Some(&Cell::Fillable {
            content: "qU".to_string(),
            circled: false,
        })
    );
    assert_eq!(session.cursor().coords, Coords::new(0, 0));

    // The multi-character content flows into the word list verbatim.
    assert_eq!(session.across_words()[0].word(), "qU__");
}

#[test]
fn test_write_clamps_at_the_edge() {
    let mut session = session(&["..."]);
    for _ in 0..5 {
        session.dispatch(Action::WriteLetter {
            letter: 'x',
            rebus: false,
        });
    }
    assert_eq!(session.cursor().coords, Coords::new(0, 2));
}

#[test]
fn test_backspace_clears_and_retreats() {
    let mut session = session(&["abc"]);
    click(&mut session, 0, 1);
    session.dispatch(Action::Backspace { rebus: false });

    assert_eq!(
        session.grid().cell(0, 1),
        Some(&Cell::Fillable {
            content: String::new(),
            circled: false,
        })
    );
    assert_eq!(session.cursor().coords, Coords::new(0, 0));

    // At the boundary the cursor stays put.
    session.dispatch(Action::Backspace { rebus: false });
    assert_eq!(session.cursor().coords, Coords::new(0, 0));
}

#[test]
fn test_backspace_rebus_pops_last_character() {
    let mut session = session(&["..."]);
    session.dispatch(Action::WriteLetter {
        letter: 'a',
        rebus: true,
    });
    session.dispatch(Action::WriteLetter {
        letter: 'b',
        rebus: true,
    });
    session.dispatch(Action::Backspace { rebus: true });

    assert_eq!(
        session.grid().cell(0, 0),
        Some(&Cell::Fillable {
            content: "A".to_string(),
            circled: false,
        })
    );
    assert_eq!(session.cursor().coords, Coords::new(0, 0));
}

#[test]
fn test_backspace_opens_black_cell() {
    let mut session = GridSession::new(Grid::demo());
    session.dispatch(Action::Backspace { rebus: false });
    assert_eq!(session.grid().cell(0, 0), Some(&Cell::empty()));
}

#[test]
fn test_toggle_black_flips_advances_and_renumbers() {
    let mut session = session(&["...", "...", "..."]);
    assert!(session.numbering()[0][0].valid_across);

    session.dispatch(Action::ToggleBlack);
    assert_eq!(session.grid().cell(0, 0), Some(&Cell::Black));
    assert_eq!(session.cursor().coords, Coords::new(0, 1));
    assert!(!session.numbering()[0][0].valid_across);
    assert_eq!(session.across_words()[0].word(), "__");

    // Toggling back restores a fillable cell and the full-width run.
    click(&mut session, 0, 0);
    session.dispatch(Action::ToggleBlack);
    assert_eq!(session.grid().cell(0, 0), Some(&Cell::empty()));
    assert_eq!(session.across_words()[0].word(), "___");
}

#[test]
fn test_toggle_circle_is_decorative_only() {
    let mut session = session(&["ab", "cd"]);
    let words_before = session.across_words().clone();

    session.dispatch(Action::ToggleCircle);
    assert_eq!(
        session.grid().cell(0, 0),
        Some(&Cell::Fillable {
            content: "a".to_string(),
            circled: true,
        })
    );
    assert_eq!(session.across_words(), &words_before);
    assert_eq!(session.cursor().coords, Coords::new(0, 0));

    session.dispatch(Action::ToggleCircle);
    assert_eq!(
        session.grid().cell(0, 0),
        Some(&Cell::Fillable {
            content: "a".to_string(),
            circled: false,
        })
    );
}

#[test]
fn test_toggle_circle_ignores_black_cells() {
    let mut session = GridSession::new(Grid::demo());
    session.dispatch(Action::ToggleCircle);
    assert_eq!(session.grid().cell(0, 0), Some(&Cell::Black));
}

#[test]
fn test_toggle_orientation_flips_in_place() {
    let mut session = session(&["..", ".."]);
    assert_eq!(session.cursor().orientation, Orientation::Across);

    session.dispatch(Action::ToggleOrientation);
    assert_eq!(session.cursor().orientation, Orientation::Down);
    assert_eq!(session.cursor().coords, Coords::new(0, 0));

    session.dispatch(Action::ToggleOrientation);
    assert_eq!(session.cursor().orientation, Orientation::Across);
}

#[test]
fn test_orientation_toggle_is_an_involution() {
    for orientation in Orientation::iter() {
        assert_eq!(orientation.toggled().toggled(), orientation);
        assert_ne!(orientation.toggled(), orientation);
    }
}

#[test]
fn test_click_moves_or_toggles() {
    let mut session = session(&["...", "..."]);

    click(&mut session, 1, 2);
    assert_eq!(session.cursor().coords, Coords::new(1, 2));
    assert_eq!(session.cursor().orientation, Orientation::Across);

    // Clicking the highlighted cell flips orientation instead of moving.
    click(&mut session, 1, 2);
    assert_eq!(session.cursor().coords, Coords::new(1, 2));
    assert_eq!(session.cursor().orientation, Orientation::Down);
}

#[test]
fn test_click_out_of_bounds_is_a_no_op() {
    let mut session = session(&["...", "..."]);
    click(&mut session, 9, 9);
    assert_eq!(session.cursor().coords, Coords::new(0, 0));
    assert_eq!(session.cursor().orientation, Orientation::Across);
}

#[test]
fn test_move_reorients_before_moving() {
    let mut session = session(&["...", "...", "..."]);

    // Cursor sits on a fillable cell oriented across; the first down
    // press only reorients.
    session.dispatch(Action::Move {
        orientation: Orientation::Down,
        direction: Direction::Forwards,
    });
    assert_eq!(session.cursor().coords, Coords::new(0, 0));
    assert_eq!(session.cursor().orientation, Orientation::Down);

    // The second press moves.
    session.dispatch(Action::Move {
        orientation: Orientation::Down,
        direction: Direction::Forwards,
    });
    assert_eq!(session.cursor().coords, Coords::new(1, 0));
}

#[test]
fn test_move_from_black_cell_jumps_immediately() {
    let mut session = GridSession::new(Grid::demo());
    assert_eq!(session.cursor().orientation, Orientation::Across);

    // On a black square the requested orientation is adopted and the
    // step happens in the same press.
    session.dispatch(Action::Move {
        orientation: Orientation::Down,
        direction: Direction::Forwards,
    });
    assert_eq!(session.cursor().coords, Coords::new(1, 0));
    assert_eq!(session.cursor().orientation, Orientation::Down);
}

#[test]
fn test_move_clamps_at_every_edge() {
    let mut session = session(&["..", ".."]);

    session.dispatch(Action::Move {
        orientation: Orientation::Across,
        direction: Direction::Backwards,
    });
    assert_eq!(session.cursor().coords, Coords::new(0, 0));

    session.dispatch(Action::Move {
        orientation: Orientation::Across,
        direction: Direction::Forwards,
    });
    session.dispatch(Action::Move {
        orientation: Orientation::Across,
        direction: Direction::Forwards,
    });
    assert_eq!(session.cursor().coords, Coords::new(0, 1));
}

#[test]
fn test_find_next_steps_through_across_runs() {
    let mut session = session(&["..#..", "#####", "..#.."]);

    session.dispatch(Action::FindNext { reverse: false });
    assert_eq!(session.cursor().coords, Coords::new(0, 3));
    assert_eq!(session.cursor().orientation, Orientation::Across);

    session.dispatch(Action::FindNext { reverse: false });
    assert_eq!(session.cursor().coords, Coords::new(2, 0));

    session.dispatch(Action::FindNext { reverse: false });
    assert_eq!(session.cursor().coords, Coords::new(2, 3));
}

#[test]
fn test_find_next_reverse_walks_backwards() {
    let mut session = session(&["..#..", "#####", "..#.."]);
    click(&mut session, 2, 0);

    session.dispatch(Action::FindNext { reverse: true });
    assert_eq!(session.cursor().coords, Coords::new(0, 3));
    assert_eq!(session.cursor().orientation, Orientation::Across);
}

#[test]
fn test_find_next_falls_back_to_opposite_orientation() {
    // A single column: no across runs exist at all.
    let mut session = session(&[".", ".", "."]);
    assert_eq!(session.cursor().orientation, Orientation::Across);

    session.dispatch(Action::FindNext { reverse: false });
    assert_eq!(session.cursor().coords, Coords::new(0, 0));
    assert_eq!(session.cursor().orientation, Orientation::Down);
}

#[test]
fn test_find_next_wraps_within_same_orientation() {
    // A single row: across runs only. From the last start it wraps back.
    let mut session = session(&["..#.."]);
    click(&mut session, 0, 3);

    session.dispatch(Action::FindNext { reverse: false });
    assert_eq!(session.cursor().coords, Coords::new(0, 0));
    assert_eq!(session.cursor().orientation, Orientation::Across);
}

#[test]
fn test_find_next_with_no_runs_leaves_cursor() {
    let mut session = session(&["#"]);
    session.dispatch(Action::FindNext { reverse: false });
    assert_eq!(session.cursor().coords, Coords::new(0, 0));
    assert_eq!(session.cursor().orientation, Orientation::Across);
}

#[test]
fn test_same_word_membership() {
    let session = session(&["..#..", ".....", "..#.."]);

    // Cursor at (0,0) across: (0,1) shares the run, (0,3) does not.
    assert!(session.same_word(Coords::new(0, 0)));
    assert!(session.same_word(Coords::new(0, 1)));
    assert!(!session.same_word(Coords::new(0, 3)));
    assert!(!session.same_word(Coords::new(0, 2)));
    assert!(!session.same_word(Coords::new(9, 9)));
}

#[test]
fn test_snapshot_serializes_round_trip() {
    let mut session = session(&["ab#", "...", "#.."]);
    session.dispatch(Action::WriteLetter {
        letter: 'z',
        rebus: false,
    });

    let encoded = serde_json::to_string(&session).unwrap();
    let decoded: GridSession = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, session);
}
