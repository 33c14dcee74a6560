//! Legal-move generation and the pure state-transition function the search
//! explores hypothetical moves with.

use crate::game::{Board, Cell, Player, COLS, ROWS};

/// List the columns a piece may be dropped into, in ascending order.
///
/// Ascending order is load-bearing: the search breaks ties by keeping the
/// first action that achieved the best value, so lower columns win ties.
pub fn actions(board: &Board) -> Vec<usize> {
    (0..COLS).filter(|&col| !board.is_column_full(col)).collect()
}

/// Infer whose turn it is from the piece counts.
///
/// No turn marker is stored in the board itself. Player 1 moves first, so
/// Player 2 is to move exactly when Player 1 has placed more pieces.
pub fn next_player(board: &Board) -> Player {
    let mut count_one = 0;
    let mut count_two = 0;

    for col in 0..COLS {
        for row in 0..ROWS {
            match board.get(col, row) {
                Cell::One => count_one += 1,
                Cell::Two => count_two += 1,
                Cell::Empty => {}
            }
        }
    }

    if count_one > count_two {
        Player::Two
    } else {
        Player::One
    }
}

/// Successor board after the inferred mover drops into `column`.
///
/// The input board is never touched; the returned board differs from it in
/// exactly one cell. `column` must be legal for `board` (the caller checks
/// legality, panics otherwise).
pub fn result(board: &Board, column: usize) -> Board {
    let mover = next_player(board);
    let mut next = *board;
    next.drop_piece(column, mover.to_cell())
        .expect("result() requires a legal column");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_on_empty_board() {
        let board = Board::new();
        assert_eq!(actions(&board), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_legality_invariant() {
        // Fill columns 1 and 4 completely
        let mut board = Board::new();
        for col in [1, 4] {
            for row in 0..ROWS {
                let cell = if row % 2 == 0 { Cell::One } else { Cell::Two };
                board.drop_piece(col, cell).unwrap();
            }
        }

        let legal = actions(&board);
        assert_eq!(legal, vec![0, 2, 3, 5, 6]);
        for col in 0..COLS {
            assert_eq!(
                legal.contains(&col),
                board.get(col, ROWS - 1) == Cell::Empty
            );
        }
    }

    #[test]
    fn test_next_player_alternates() {
        let board = Board::new();
        assert_eq!(next_player(&board), Player::One);

        let board = result(&board, 3);
        assert_eq!(next_player(&board), Player::Two);

        let board = result(&board, 3);
        assert_eq!(next_player(&board), Player::One);
    }

    #[test]
    fn test_result_is_pure() {
        let board = result(&result(&Board::new(), 2), 5);
        let snapshot = board;

        let next = result(&board, 2);

        // Input untouched
        assert_eq!(board, snapshot);

        // Output differs in exactly one cell
        let mut diffs = 0;
        for col in 0..COLS {
            for row in 0..ROWS {
                if board.get(col, row) != next.get(col, row) {
                    diffs += 1;
                }
            }
        }
        assert_eq!(diffs, 1);
    }

    #[test]
    fn test_result_places_inferred_mover() {
        let board = Board::new();
        let after_one = result(&board, 0);
        assert_eq!(after_one.get(0, 0), Cell::One);

        let after_two = result(&after_one, 0);
        assert_eq!(after_two.get(0, 1), Cell::Two);
    }

    #[test]
    #[should_panic(expected = "legal column")]
    fn test_result_panics_on_full_column() {
        let mut board = Board::new();
        for row in 0..ROWS {
            let cell = if row % 2 == 0 { Cell::One } else { Cell::Two };
            board.drop_piece(6, cell).unwrap();
        }
        let _ = result(&board, 6);
    }
}
