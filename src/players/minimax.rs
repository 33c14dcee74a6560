use crate::engine::Minimax;
use crate::game::{GameModel, Player};

use super::agent::Agent;

/// The search-based player: runs a fixed-depth alpha-beta minimax over a
/// snapshot of the model's grid.
pub struct MinimaxPlayer {
    engine: Minimax,
}

impl MinimaxPlayer {
    pub fn new(player: Player, max_depth: u32) -> Self {
        MinimaxPlayer {
            engine: Minimax::new(player, max_depth),
        }
    }

    /// Non-searching fallback: the leftmost legal column. Exists for the
    /// disabled-AI mode; not part of the search contract.
    pub fn dumb_get_move(&self, model: &GameModel) -> usize {
        let valid = model.get_valid_moves();
        (0..valid.len())
            .find(|&col| valid[col])
            .expect("no legal moves available")
    }
}

impl Agent for MinimaxPlayer {
    fn get_move(&mut self, model: &GameModel) -> usize {
        self.engine.choose_move(&model.get_grid())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DEFAULT_DEPTH;
    use crate::game::GameOutcome;
    use crate::players::RandomPlayer;

    #[test]
    fn test_selects_legal_move() {
        let mut player = MinimaxPlayer::new(Player::One, 4);
        let model = GameModel::new();
        let col = player.get_move(&model);
        assert!(model.get_valid_moves()[col]);
    }

    #[test]
    fn test_takes_winning_move_through_model() {
        let mut model = GameModel::new();
        for col in 0..3 {
            model.play(col).unwrap(); // Player 1
            model.play(col).unwrap(); // Player 2
        }

        let mut player = MinimaxPlayer::new(Player::One, DEFAULT_DEPTH);
        assert_eq!(player.get_move(&model), 3);
    }

    #[test]
    fn test_dumb_get_move_is_leftmost() {
        let mut model = GameModel::new();
        let player = MinimaxPlayer::new(Player::One, 1);
        assert_eq!(player.dumb_get_move(&model), 0);

        for _ in 0..3 {
            model.play(0).unwrap();
            model.play(0).unwrap();
        }
        assert_eq!(player.dumb_get_move(&model), 1);
    }

    #[test]
    fn test_self_play_completes() {
        let mut one = MinimaxPlayer::new(Player::One, 3);
        let mut two = MinimaxPlayer::new(Player::Two, 3);
        let mut model = GameModel::new();

        let mut turn = 0;
        while !model.is_over() && turn < 42 {
            let col = if turn % 2 == 0 {
                one.get_move(&model)
            } else {
                two.get_move(&model)
            };
            model.play(col).unwrap();
            turn += 1;
        }

        assert!(model.is_over());
    }

    #[test]
    fn test_beats_random_player() {
        let games_per_side = 10;
        let mut wins = 0;
        let total = games_per_side * 2;

        for game in 0..total {
            let search_side = if game < games_per_side {
                Player::One
            } else {
                Player::Two
            };
            let mut search = MinimaxPlayer::new(search_side, 4);
            let mut random = RandomPlayer::seeded(game as u64);
            let mut model = GameModel::new();

            while !model.is_over() {
                let col = if model.current_player() == search_side {
                    search.get_move(&model)
                } else {
                    random.get_move(&model)
                };
                model.play(col).unwrap();
            }

            if model.outcome() == Some(GameOutcome::Winner(search_side)) {
                wins += 1;
            }
        }

        assert!(
            wins * 10 > total * 8,
            "search should beat random >80% of the time, got {wins}/{total}"
        );
    }
}
