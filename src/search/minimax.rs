//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the move search for Ultimate Tic-Tac-Toe.
//! O maximizes and X minimizes the static evaluation from [`crate::eval`].
//!
//! # Features
//!
//! - Fixed depth limit, no iterative deepening
//! - Moves searched in lexicographic (macro row, macro col, micro row,
//!   micro col) order; the first move reaching the best value wins ties
//! - Legal moves collected into one flat list per node, so a cutoff skips
//!   every remaining sibling
//! - Fictional moves applied through [`ScopedMove`](crate::board::ScopedMove)
//!   guards, so the board is restored even when the search aborts with an error
//!
//! # Example
//!
//! ```
//! use uttt::board::{Board, Player};
//! use uttt::search::Searcher;
//!
//! let mut searcher = Searcher::new(2).unwrap();
//! let mut board = Board::new();
//!
//! let result = searcher.search_root(&mut board, Player::O).unwrap();
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! assert_eq!(board.stone_count(), 1);
//! ```

use log::debug;

use crate::board::{Board, Move, Player};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::eval::evaluate;

/// Infinity score for alpha-beta bounds; every evaluation stays well inside it
pub const INF: i32 = 100_000;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the root
    pub nodes: u64,
    /// Positions scored by the static evaluation
    pub leaves: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Move committed at the root, if any
    pub best_move: Option<Move>,
    /// Minimax value of the root position
    pub score: i32,
    /// Depth limit used
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher with a fixed depth limit.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    stats: SearchStats,
    last_best: Option<Move>,
}

impl Searcher {
    /// Create a searcher that looks `max_depth` plies ahead (1-81).
    pub fn new(max_depth: u8) -> Result<Self> {
        EngineConfig::new(max_depth).map(|config| Self::with_config(&config))
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            max_depth: config.max_depth(),
            stats: SearchStats::default(),
            last_best: None,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Statistics accumulated since the last [`Searcher::reset_stats`]
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Minimax value of `board` with `player` to move.
    ///
    /// `depth` is the ply count from the root. At the root (`depth == 0`)
    /// the best move found is committed to the board once the enumeration
    /// completes; deeper calls leave the board exactly as they found it.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        player: Player,
    ) -> Result<i32> {
        let (value, best_move) = self.minimax(board, depth, alpha, beta, player)?;

        if depth == 0 {
            if let Some(mv) = best_move {
                board.commit_move(mv, player)?;
            }
            self.last_best = best_move;
        }

        Ok(value)
    }

    /// Search from the root with open bounds and commit the best move.
    pub fn search_root(&mut self, board: &mut Board, player: Player) -> Result<SearchResult> {
        if board.is_game_over() {
            return Err(Error::GameOver);
        }

        self.reset_stats();
        self.last_best = None;
        let score = self.search(board, 0, -INF, INF, player)?;
        let best_move = self.last_best.ok_or(Error::NoLegalMoves)?;

        debug!(
            "{} searched depth {}: best {} score {} ({} nodes, {} leaves, {} cutoffs)",
            player,
            self.max_depth,
            best_move,
            score,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs
        );

        Ok(SearchResult {
            best_move: Some(best_move),
            score,
            depth: self.max_depth,
            stats: self.stats.clone(),
        })
    }

    /// Recursive alpha-beta search. O maximizes, X minimizes.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        player: Player,
    ) -> Result<(i32, Option<Move>)> {
        self.stats.nodes += 1;

        if depth >= self.max_depth || board.is_game_over() {
            self.stats.leaves += 1;
            return Ok((evaluate(board), None));
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            // An open meta-board always leaves an open sub-board with a free cell.
            self.stats.leaves += 1;
            return Ok((evaluate(board), None));
        }

        let maximizing = player == Player::O;
        let mut value = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in moves {
            let child_value = {
                let mut child = board.scoped_move(mv, player)?;
                self.minimax(&mut child, depth + 1, alpha, beta, player.opponent())?.0
            };

            // Strict comparisons: the earliest move keeps ties.
            if maximizing {
                alpha = alpha.max(child_value);
                if child_value > value {
                    value = child_value;
                    best_move = Some(mv);
                }
            } else {
                beta = beta.min(child_value);
                if child_value < value {
                    value = child_value;
                    best_move = Some(mv);
                }
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok((value, best_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, MetaCell, Outcome};

    fn mv(k: usize, l: usize, i: usize, j: usize) -> Move {
        Move::new(k, l, i, j).unwrap()
    }

    /// Full-width minimax without pruning, counting visited nodes
    fn plain_minimax(board: &mut Board, depth: u8, max_depth: u8, player: Player, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if depth == max_depth || board.is_game_over() {
            return evaluate(board);
        }
        let values = board.legal_moves().into_iter().map(|m| {
            board.apply_move(m, player).unwrap();
            let v = plain_minimax(board, depth + 1, max_depth, player.opponent(), nodes);
            board.undo_move(m);
            v
        });
        let values: Vec<i32> = values.collect();
        match player {
            Player::O => values.into_iter().max().unwrap(),
            Player::X => values.into_iter().min().unwrap(),
        }
    }

    /// O owns sub-boards (0,0) and (0,1) and two cells of (0,2); O must play in (0,2).
    fn o_to_win_position() -> Board {
        let mut board = Board::new();
        for k in 0..2 {
            for j in 0..3 {
                board.apply_move(mv(0, k, 0, j), Player::O).unwrap();
            }
        }
        board.apply_move(mv(0, 2, 0, 0), Player::O).unwrap();
        board.apply_move(mv(0, 2, 0, 1), Player::O).unwrap();
        board.apply_move(mv(2, 2, 0, 2), Player::X).unwrap();
        board
    }

    #[test]
    fn test_depth_validation() {
        assert!(Searcher::new(1).is_ok());
        assert!(Searcher::new(81).is_ok());
        assert_eq!(
            Searcher::new(0).unwrap_err(),
            Error::InvalidDepth { depth: 0, max: 81 }
        );
        assert!(Searcher::new(82).is_err());
    }

    #[test]
    fn test_depth_one_from_empty_board() {
        let mut searcher = Searcher::new(1).unwrap();
        let mut board = Board::new();
        assert!(Move::all().all(|m| board.is_legal(m)));

        let result = searcher.search_root(&mut board, Player::O).unwrap();

        // Every sub-board center is worth 4; the first one enumerated wins.
        assert_eq!(result.score, 4);
        assert_eq!(result.best_move, Some(mv(0, 0, 1, 1)));
        assert_eq!(board.stone_count(), 1);
        assert!(board.meta().iter().all(|(_, cell)| cell == MetaCell::Open));
        assert_eq!(board.active_board(), Some(Coord::at(1, 1)));
        assert_eq!(result.stats.nodes, 82);
        assert_eq!(result.stats.leaves, 81);
    }

    #[test]
    fn test_minimizer_prefers_negative_scores() {
        let mut searcher = Searcher::new(1).unwrap();
        let mut board = Board::new();
        let result = searcher.search_root(&mut board, Player::X).unwrap();
        assert_eq!(result.score, -4);
        assert_eq!(result.best_move, Some(mv(0, 0, 1, 1)));
    }

    #[test]
    fn test_inner_search_does_not_commit() {
        let mut searcher = Searcher::new(3).unwrap();
        let mut board = Board::new();
        board.commit_move(mv(1, 1, 0, 0), Player::O).unwrap();
        let before = board.clone();

        searcher.search(&mut board, 1, -INF, INF, Player::X).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_root_search_changes_only_the_committed_move() {
        let mut searcher = Searcher::new(3).unwrap();
        let mut board = Board::new();
        board.commit_move(mv(0, 0, 2, 2), Player::O).unwrap();
        let mut expected = board.clone();

        let result = searcher.search_root(&mut board, Player::X).unwrap();
        let best = result.best_move.unwrap();
        assert_eq!(best.board, Coord::at(2, 2));

        expected.commit_move(best, Player::X).unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn test_takes_winning_move() {
        for depth in 1..=3 {
            let mut searcher = Searcher::new(depth).unwrap();
            let mut board = o_to_win_position();
            let result = searcher.search_root(&mut board, Player::O).unwrap();
            assert_eq!(result.best_move, Some(mv(0, 2, 0, 2)), "depth {depth}");
            assert_eq!(board.outcome(), Some(Outcome::Winner(Player::O)));
        }
    }

    #[test]
    fn test_game_over_is_reported() {
        let mut searcher = Searcher::new(2).unwrap();
        let mut board = o_to_win_position();
        board.commit_move(mv(0, 2, 0, 2), Player::O).unwrap();
        assert!(matches!(
            searcher.search_root(&mut board, Player::X),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        let mut board = Board::new();
        board.commit_move(mv(1, 1, 1, 1), Player::O).unwrap();
        board.commit_move(mv(1, 1, 0, 2), Player::X).unwrap();

        for depth in 1..=3 {
            let mut plain_nodes = 0;
            let expected =
                plain_minimax(&mut board.clone(), 0, depth, Player::O, &mut plain_nodes);

            // Starting one ply below the root leaves the board uncommitted.
            let mut searcher = Searcher::new(depth + 1).unwrap();
            let mut work = board.clone();
            let value = searcher.search(&mut work, 1, -INF, INF, Player::O).unwrap();

            assert_eq!(value, expected, "depth {depth}");
            assert_eq!(work, board);
            assert!(searcher.stats().nodes <= plain_nodes);
        }
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let board = Board::new();
        let mut plain_nodes = 0;
        let expected = plain_minimax(&mut board.clone(), 0, 3, Player::O, &mut plain_nodes);

        let mut searcher = Searcher::new(3).unwrap();
        let mut work = board.clone();
        let result = searcher.search_root(&mut work, Player::O).unwrap();

        assert_eq!(result.score, expected);
        assert!(result.stats.cutoffs > 0);
        assert!(result.stats.nodes < plain_nodes);
    }
}
