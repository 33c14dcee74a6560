use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::GameModel;

use super::agent::Agent;

/// A player that selects uniformly at random from the legal columns.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomPlayer {
    fn get_move(&mut self, model: &GameModel) -> usize {
        let valid = model.get_valid_moves();
        let legal: Vec<usize> = (0..valid.len()).filter(|&col| valid[col]).collect();
        assert!(!legal.is_empty(), "No legal moves available");
        legal[self.rng.random_range(0..legal.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_legal_moves() {
        let mut player = RandomPlayer::seeded(17);
        let mut model = GameModel::new();
        // Fill column 2 so one column is off the table
        for _ in 0..3 {
            model.play(2).unwrap();
            model.play(2).unwrap();
        }

        for _ in 0..100 {
            let col = player.get_move(&model);
            assert!(model.get_valid_moves()[col], "column {col} is not legal");
        }
    }

    #[test]
    fn test_plays_full_game() {
        let mut one = RandomPlayer::seeded(1);
        let mut two = RandomPlayer::seeded(2);
        let mut model = GameModel::new();

        let mut turn = 0;
        while !model.is_over() {
            let col = if turn % 2 == 0 {
                one.get_move(&model)
            } else {
                two.get_move(&model)
            };
            model.play(col).unwrap();
            turn += 1;
        }

        assert!(model.outcome().is_some());
    }

    #[test]
    fn test_is_automated() {
        assert!(RandomPlayer::seeded(0).is_automated());
        assert_eq!(RandomPlayer::seeded(0).name(), "Random");
    }
}
