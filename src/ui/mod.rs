//! GUI module for Ultimate Tic-Tac-Toe
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::UtttApp;
pub use game_state::{AiState, GameState, MoveTimer};
