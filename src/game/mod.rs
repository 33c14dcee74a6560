//! Core Connect Four game state: board representation, player identity, and
//! the authoritative model that players interact with.

mod board;
mod model;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use model::{GameModel, GameOutcome, MoveError};
pub use player::Player;
