//! The AI engine: win/draw rules, move generation and transition, the
//! positional heuristic, and the alpha-beta minimax search that composes
//! them. Everything here is a pure function over [`Board`](crate::game::Board)
//! snapshots; the engine never mutates a board it is handed.

pub mod eval;
pub mod moves;
pub mod rules;
pub mod search;

pub use eval::evaluate;
pub use moves::{actions, next_player, result};
pub use rules::{check_for_winner, is_terminal, utility, WIN_SCORE};
pub use search::{Minimax, DEFAULT_DEPTH};
