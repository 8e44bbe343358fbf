//! Position evaluation for the minimax search

pub mod heuristic;
pub mod patterns;

pub use heuristic::{eval_player, evaluate};
pub use patterns::{score, LineWeight, META_WEIGHT};
