//! Search module for Ultimate Tic-Tac-Toe AI
//!
//! Contains the depth-limited minimax search with alpha-beta pruning.

pub mod minimax;

pub use minimax::{SearchResult, SearchStats, Searcher, INF};
