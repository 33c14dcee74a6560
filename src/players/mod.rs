//! The three player kinds behind the common [`Agent`] contract: human
//! terminal input, uniform random, and the minimax search player.

mod agent;
mod human;
mod minimax;
mod random;

pub use agent::Agent;
pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;
