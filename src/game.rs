//! Game loop state shared by the GUI and the console front end
//!
//! A [`Game`] owns the board, knows whose turn it is and keeps the record
//! of committed moves so earlier positions can be rebuilt.

use log::info;
use rand::Rng;

use crate::board::{Board, Move, Outcome, Player};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{Error, Result};
use crate::players::random_move;

/// One game of Ultimate Tic-Tac-Toe
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    record: Vec<(Move, Player)>,
}

impl Game {
    /// New game, O to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::O,
            record: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Committed moves, oldest first
    #[inline]
    pub fn record(&self) -> &[(Move, Player)] {
        &self.record
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.record.last().map(|&(mv, _)| mv)
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Play a move for the side to move
    pub fn play(&mut self, mv: Move) -> Result<()> {
        let player = self.to_move;
        self.board.commit_move(mv, player)?;
        self.finish_turn(mv, player);
        Ok(())
    }

    /// Let the engine choose and play a move for the side to move
    pub fn play_engine(&mut self, engine: &mut AIEngine) -> Result<MoveResult> {
        let player = self.to_move;
        let result = engine.get_move(&mut self.board, player)?;
        self.finish_turn(result.best_move, player);
        Ok(result)
    }

    /// Play a uniformly random legal move for the side to move
    pub fn play_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let mv = random_move(&self.board, rng).ok_or(Error::NoLegalMoves)?;
        self.play(mv)?;
        Ok(mv)
    }

    fn finish_turn(&mut self, mv: Move, player: Player) {
        self.record.push((mv, player));
        self.to_move = player.opponent();

        if let Some(outcome) = self.outcome() {
            match outcome {
                Outcome::Winner(winner) => info!("{} wins after {} moves", winner, self.record.len()),
                Outcome::Draw => info!("draw after {} moves", self.record.len()),
            }
        }
    }

    /// Take back the last `count` moves by replaying the rest from scratch.
    ///
    /// Returns the number of moves actually removed.
    pub fn undo(&mut self, count: usize) -> Result<usize> {
        let keep = self.record.len().saturating_sub(count);
        let removed = self.record.len() - keep;
        let moves: Vec<_> = self.record.drain(..keep).collect();

        self.board = Board::new();
        self.to_move = Player::O;
        self.record.clear();

        for (mv, player) in moves {
            self.board.commit_move(mv, player)?;
            self.record.push((mv, player));
            self.to_move = player.opponent();
        }
        Ok(removed)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
