//! Depth-limited minimax with alpha-beta pruning.
//!
//! Two mutually recursive value functions walk successor boards produced by
//! [`moves::result`], scoring terminal nodes with [`rules::utility`] and
//! depth-limited nodes with [`eval::evaluate`]. Boards are `Copy`, so every
//! node owns an independent snapshot and nothing outlives its call frame.
//! There is no transposition table and no move ordering beyond ascending
//! columns; pruning comes entirely from the alpha-beta bounds.

use crate::engine::{eval, moves, rules};
use crate::game::{Board, Player};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 6;

/// A fixed-depth searcher for one perspective player.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    player: Player,
    max_depth: u32,
}

impl Minimax {
    pub fn new(player: Player, max_depth: u32) -> Self {
        Minimax { player, max_depth }
    }

    /// Pick a column for `player` on a non-terminal board.
    pub fn choose_move(&self, board: &Board) -> usize {
        self.search(board).1
    }

    /// Run the full search, returning the root value and the chosen column.
    ///
    /// The root is always expanded one ply, so `max_depth == 0` degenerates
    /// to a pure heuristic argmax over the legal columns. Ties keep the
    /// first (lowest) column that reached the best value.
    pub fn search(&self, board: &Board) -> (i32, usize) {
        let legal = moves::actions(board);
        assert!(!legal.is_empty(), "search called with no legal moves");

        let mut best_value = i32::MIN;
        let mut best_action = legal[0];
        let mut alpha = i32::MIN;

        for &column in &legal {
            let child = moves::result(board, column);
            let (value, _) = self.min_value(&child, alpha, i32::MAX, 1);

            if value > best_value {
                best_value = value;
                best_action = column;
            }
            alpha = alpha.max(best_value);
        }

        (best_value, best_action)
    }

    /// The perspective player is to move: maximize over successors.
    fn max_value(
        &self,
        board: &Board,
        mut alpha: i32,
        beta: i32,
        depth: u32,
    ) -> (i32, Option<usize>) {
        if rules::is_terminal(board) {
            return (rules::utility(board, self.player), None);
        }
        if depth >= self.max_depth {
            return (eval::evaluate(board, self.player), None);
        }

        let mut best = i32::MIN;
        let mut best_action = None;

        for column in moves::actions(board) {
            let child = moves::result(board, column);
            let (value, _) = self.min_value(&child, alpha, beta, depth + 1);

            if value > best {
                best = value;
                best_action = Some(column);
            }
            if best >= beta {
                return (best, Some(column));
            }
            alpha = alpha.max(best);
        }

        (best, best_action)
    }

    /// The opponent is to move: minimize over successors.
    fn min_value(
        &self,
        board: &Board,
        alpha: i32,
        mut beta: i32,
        depth: u32,
    ) -> (i32, Option<usize>) {
        if rules::is_terminal(board) {
            return (rules::utility(board, self.player), None);
        }
        if depth >= self.max_depth {
            return (eval::evaluate(board, self.player), None);
        }

        let mut best = i32::MAX;
        let mut best_action = None;

        for column in moves::actions(board) {
            let child = moves::result(board, column);
            let (value, _) = self.max_value(&child, alpha, beta, depth + 1);

            if value < best {
                best = value;
                best_action = Some(column);
            }
            if best <= alpha {
                return (best, Some(column));
            }
            beta = beta.min(best);
        }

        (best, best_action)
    }
}
