//! Ultimate Tic-Tac-Toe engine with minimax search
//!
//! Ultimate Tic-Tac-Toe is played on a 3x3 meta-board whose cells are
//! themselves 3x3 tic-tac-toe boards:
//! - Winning a sub-board claims its cell on the meta-board
//! - A full sub-board without a line is drawn and closed to both players
//! - The cell a player marks names the sub-board the opponent must play in
//! - When that sub-board is already resolved, the opponent may play in any
//!   open sub-board
//! - Three sub-boards in a row on the meta-board win the game
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Sub-boards, meta-board and move history
//! - [`rules`]: Win/draw detection for any 3x3 grid
//! - [`eval`]: Line-count heuristic
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Search driver with timing and statistics
//! - [`game`]: Turn order and move record
//! - [`players`]: Player kinds and the random move chooser
//! - [`ui`]: Native GUI
//!
//! # Quick Start
//!
//! ```
//! use uttt::{AIEngine, Board, EngineConfig, Move, Player};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig::new(3).unwrap());
//!
//! // O opens in the center of the center board, sending X there
//! board.commit_move(Move::new(1, 1, 1, 1).unwrap(), Player::O).unwrap();
//!
//! // AI responds as X
//! let result = engine.get_move(&mut board, Player::X).unwrap();
//! println!("AI plays at {}", result.best_move);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod players;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Coord, MetaCell, Move, Outcome, Player};
pub use config::{EngineConfig, GameConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, Result};
pub use game::Game;
pub use players::{random_move, PlayerKind};
