//! Game rules for Ultimate Tic-Tac-Toe
//!
//! This module implements the terminal detection shared by the nine
//! sub-boards and the meta-board. Move legality (the active sub-board
//! constraint) lives on [`crate::board::Board`] because it depends on the
//! move history.

pub mod line;

// Re-exports for convenient access
pub use line::{board_state, winning_line, BoardStatus, LineCell};
