//! Positional heuristic used when the search hits its depth limit on an
//! unresolved board.
//!
//! Every window origin the win detector scans (minus the final cell of each
//! 4-window) is classified as a streak of 3, 2, or 1 in that direction.
//! Origins are scored independently, so one physical run of pieces is
//! counted once per origin that sees it. That over-counting is deliberate:
//! it is a cheap proxy for line potential, and de-duplicating it would
//! change the engine's play.

use crate::game::{Board, Player, COLS, ROWS};

const STREAK_THREE: i32 = 300;
const STREAK_TWO: i32 = 20;
const STREAK_ONE: i32 = 1;

/// Value of the streak anchored at `(col, row)` in direction `(dc, dr)`.
/// The origin cell is known to be occupied.
fn streak_value(board: &Board, col: usize, row: usize, dc: isize, dr: isize) -> i32 {
    let cell = board.get(col, row);
    let at = |i: isize| {
        board.get(
            (col as isize + i * dc) as usize,
            (row as isize + i * dr) as usize,
        )
    };

    if cell == at(1) && cell == at(2) {
        STREAK_THREE
    } else if cell == at(1) {
        STREAK_TWO
    } else {
        STREAK_ONE
    }
}

/// Score a non-terminal board from `player`'s perspective; higher is better.
/// Returns the player's streak total minus the opponent's.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let own = player.to_cell();
    let opp = player.other().to_cell();

    let mut own_total = 0;
    let mut opp_total = 0;

    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            match board.get(col, row) {
                c if c == own => own_total += streak_value(board, col, row, 1, 0),
                c if c == opp => opp_total += streak_value(board, col, row, 1, 0),
                _ => {}
            }
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..ROWS - 3 {
            match board.get(col, row) {
                c if c == own => own_total += streak_value(board, col, row, 0, 1),
                c if c == opp => opp_total += streak_value(board, col, row, 0, 1),
                _ => {}
            }
        }
    }

    // Negative diagonal (col+1, row+1)
    for col in 0..COLS - 3 {
        for row in 0..ROWS - 3 {
            match board.get(col, row) {
                c if c == own => own_total += streak_value(board, col, row, 1, 1),
                c if c == opp => opp_total += streak_value(board, col, row, 1, 1),
                _ => {}
            }
        }
    }

    // Positive diagonal (col-1, row+1)
    for col in 3..COLS {
        for row in 0..ROWS - 3 {
            match board.get(col, row) {
                c if c == own => own_total += streak_value(board, col, row, -1, 1),
                c if c == opp => opp_total += streak_value(board, col, row, -1, 1),
                _ => {}
            }
        }
    }

    own_total - opp_total
}
