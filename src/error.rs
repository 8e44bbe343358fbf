//! Error types for the Ultimate Tic-Tac-Toe engine

use thiserror::Error;

use crate::board::Move;

/// Main error type for the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate {axis} = {value} is out of bounds (must be 0-2)")]
    InvalidCoordinate { axis: &'static str, value: usize },

    #[error("move index {index} is out of bounds (must be 0-80)")]
    InvalidMoveIndex { index: usize },

    #[error("search depth {depth} is out of range (must be 1-{max})")]
    InvalidDepth { depth: usize, max: usize },

    #[error("illegal move {mv}")]
    IllegalMove { mv: Move },

    #[error("game already over")]
    GameOver,

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("move history is full (capacity {capacity})")]
    HistoryOverflow { capacity: usize },

    #[error("invalid player kind '{input}'. Expected one of: {expected}")]
    ParsePlayerKind { input: String, expected: String },

    #[error("invalid input '{input}': {reason}")]
    ParseInput { input: String, reason: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
