//! Main AI engine driving the minimax search
//!
//! The engine wraps a [`Searcher`] built from an [`EngineConfig`], times each
//! search and reports the outcome in a [`MoveResult`].
//!
//! # Example
//!
//! ```
//! use uttt::{AIEngine, Board, EngineConfig, Player};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::new(3).unwrap());
//! let mut board = Board::new();
//!
//! let result = engine.get_move(&mut board, Player::O).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! assert_eq!(board.stone_count(), 1);
//! ```

use std::time::Instant;

use log::info;

use crate::board::{Board, Move, Player};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found
    pub best_move: Move,
    /// Minimax value of the position before the move
    pub score: i32,
    /// Depth limit of the search
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of positions scored by the evaluation
    pub leaves: u64,
    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64) -> Result<Self> {
        Ok(Self {
            best_move: result.best_move.ok_or(Error::NoLegalMoves)?,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
            leaves: result.stats.leaves,
            cutoffs: result.stats.cutoffs,
        })
    }
}

/// Main AI engine for Ultimate Tic-Tac-Toe.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine with the default depth
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::with_config(&config),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.searcher.max_depth()
    }

    /// Search the position and commit the best move for `player`.
    pub fn get_move(&mut self, board: &mut Board, player: Player) -> Result<MoveResult> {
        let start = Instant::now();
        let result = self.searcher.search_root(board, player)?;
        let time_ms = start.elapsed().as_millis() as u64;
        let result = MoveResult::from_search(result, time_ms)?;

        info!(
            "{} plays {} (score {}, {} nodes, {}ms)",
            player, result.best_move, result.score, result.nodes, result.time_ms
        );
        Ok(result)
    }

    /// Best move for `player` without touching `board`.
    pub fn suggest(&mut self, board: &Board, player: Player) -> Result<MoveResult> {
        let mut scratch = board.clone();
        let start = Instant::now();
        let result = self.searcher.search_root(&mut scratch, player)?;
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
