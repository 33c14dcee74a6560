use super::{Board, Player, COLS};
use crate::engine::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("no such column")]
    InvalidColumn,
    #[error("the game is already over")]
    GameOver,
}

/// Owner of the authoritative game state.
///
/// Players only ever see snapshots (`get_grid`) and the legality mask
/// (`get_valid_moves`); all mutation goes through `play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameModel {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameModel {
    /// Create a fresh game. Player 1 moves first.
    pub fn new() -> Self {
        GameModel {
            board: Board::new(),
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Get the player whose turn it is
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get game outcome if the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if the game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get an independent snapshot of the grid
    pub fn get_grid(&self) -> Board {
        self.board
    }

    /// Column-indexed legality mask: true iff a piece may be dropped there.
    /// All false once the game is over.
    pub fn get_valid_moves(&self) -> [bool; COLS] {
        if self.is_over() {
            return [false; COLS];
        }
        std::array::from_fn(|col| !self.board.is_column_full(col))
    }

    /// Drop the current player's piece, returning the landing row.
    /// Flips the mover and records the outcome when the move ends the game.
    pub fn play(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if let Some(winner) = rules::check_for_winner(&self.board) {
            self.outcome = Some(GameOutcome::Winner(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(row)
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}
