use crate::game::GameModel;

/// Common contract for everything that can take a turn.
///
/// The driver needs nothing beyond this: a column choice and whether the
/// player is algorithmic (automated players should not have a blocking
/// terminal read scheduled around their move).
pub trait Agent {
    /// Choose a column in `[0, 6]` that is legal for the current position.
    fn get_move(&mut self, model: &GameModel) -> usize;

    /// True for algorithmic players, false for the human player.
    fn is_automated(&self) -> bool {
        true
    }

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
