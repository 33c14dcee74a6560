//! Terminal-state classification: win detection, draw detection, and the
//! utility assigned to finished games.

use crate::game::{Board, Cell, Player, COLS, ROWS};

/// Utility of a won game from the winner's perspective.
pub const WIN_SCORE: i32 = 1000;

/// Scan the whole board for a completed four-in-a-row.
///
/// Directions are checked in a fixed order (horizontal, vertical, the two
/// diagonals) and the owner of the first winning window found is returned.
/// On a board reached by legal alternating play at most one player can have
/// a line, so the order only matters for reproducibility.
pub fn check_for_winner(board: &Board) -> Option<Player> {
    check_horizontal(board)
        .or_else(|| check_vertical(board))
        .or_else(|| check_neg_diagonal(board))
        .or_else(|| check_pos_diagonal(board))
}

fn window_owner(board: &Board, col: usize, row: usize, dc: usize, dr: usize) -> Option<Player> {
    let cell = board.get(col, row);
    if cell == Cell::Empty {
        return None;
    }
    for i in 1..4 {
        if board.get(col + i * dc, row + i * dr) != cell {
            return None;
        }
    }
    Player::from_cell(cell)
}

fn check_horizontal(board: &Board) -> Option<Player> {
    for row in 0..ROWS {
        for col in 0..=COLS - 4 {
            if let Some(winner) = window_owner(board, col, row, 1, 0) {
                return Some(winner);
            }
        }
    }
    None
}

fn check_vertical(board: &Board) -> Option<Player> {
    for col in 0..COLS {
        for row in 0..=ROWS - 4 {
            if let Some(winner) = window_owner(board, col, row, 0, 1) {
                return Some(winner);
            }
        }
    }
    None
}

fn check_neg_diagonal(board: &Board) -> Option<Player> {
    for col in 0..=COLS - 4 {
        for row in 0..=ROWS - 4 {
            if let Some(winner) = window_owner(board, col, row, 1, 1) {
                return Some(winner);
            }
        }
    }
    None
}

// The col-1/row+1 direction. Mirrors the col+1 scan on flipped columns so
// the window arithmetic stays in unsigned coordinates.
fn check_pos_diagonal(board: &Board) -> Option<Player> {
    for col in 3..COLS {
        for row in 0..=ROWS - 4 {
            let cell = board.get(col, row);
            if cell == Cell::Empty {
                continue;
            }
            if (1..4).all(|i| board.get(col - i, row + i) == cell) {
                return Player::from_cell(cell);
            }
        }
    }
    None
}

/// A board is terminal when somebody has won or no empty cell remains.
pub fn is_terminal(board: &Board) -> bool {
    check_for_winner(board).is_some() || board.is_full()
}

/// Score a terminal board from `player`'s perspective: won, lost, or drawn.
pub fn utility(board: &Board, player: Player) -> i32 {
    match check_for_winner(board) {
        Some(winner) if winner == player => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}
