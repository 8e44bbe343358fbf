//! Heuristic evaluation function for Ultimate Tic-Tac-Toe positions
//!
//! This module provides the static evaluation used at the leaves of the
//! minimax search. It scores each of the 8 lines of every sub-board and of
//! the meta-board by how many marks a player has on it, and subtracts the
//! opponent's total. The meta-board counts [`META_WEIGHT`] times as much as
//! a single sub-board.

use crate::board::{Board, Coord, Grid3, Player, LINES};
use crate::rules::LineCell;

use super::patterns::{score, META_WEIGHT};

/// Sum of line weights for `player` over one 3x3 grid.
///
/// Only `player`'s marks are counted on each line; opposing marks on the
/// same line are ignored.
#[must_use]
pub fn eval_player<T: LineCell>(grid: &Grid3<T>, player: Player) -> i32 {
    LINES
        .iter()
        .map(|line| {
            let aligned = grid
                .line(line)
                .iter()
                .filter(|cell| cell.owner() == Some(player))
                .count();
            score(aligned)
        })
        .sum()
}

/// Signed line balance of one grid: positive favors O
#[inline]
fn balance<T: LineCell>(grid: &Grid3<T>) -> i32 {
    eval_player(grid, Player::O) - eval_player(grid, Player::X)
}

/// Evaluate the whole position.
///
/// Returns a score where positive values favor O (the maximizer) and
/// negative values favor X (the minimizer).
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let sub_boards: i32 = Coord::ALL
        .iter()
        .map(|&pos| balance(board.sub_board(pos)))
        .sum();

    sub_boards + META_WEIGHT * balance(board.meta())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Move};

    fn mv(k: usize, l: usize, i: usize, j: usize) -> Move {
        Move::new(k, l, i, j).unwrap()
    }

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_single_mark_counts_its_lines() {
        let mut board = Board::new();
        board.apply_move(mv(0, 0, 1, 1), Player::O).unwrap();
        assert_eq!(evaluate(&board), 4); // row, column, both diagonals

        let mut board = Board::new();
        board.apply_move(mv(2, 1, 0, 0), Player::O).unwrap();
        assert_eq!(evaluate(&board), 3); // corner

        let mut board = Board::new();
        board.apply_move(mv(2, 1, 0, 1), Player::X).unwrap();
        assert_eq!(evaluate(&board), -2); // edge
    }

    #[test]
    fn test_won_sub_board_adds_meta_weight() {
        let mut board = Board::new();
        for j in 0..3 {
            board.apply_move(mv(1, 1, 0, j), Player::O).unwrap();
        }
        // Sub-board: 100 (row) + 3 (columns) + 2 (diagonals);
        // meta-board: center lies on 4 lines, times 5.
        assert_eq!(evaluate(&board), 105 + 20);
    }

    #[test]
    fn test_blocked_line_still_scores() {
        let grid = Grid3::from_rows([
            [Cell::Taken(Player::O), Cell::Taken(Player::O), Cell::Taken(Player::X)],
            [Cell::Empty; 3],
            [Cell::Empty; 3],
        ]);
        // The top row can never be completed by O, yet it is worth 10.
        assert_eq!(eval_player(&grid, Player::O), 10 + 2 + 1);
        assert_eq!(eval_player(&grid, Player::X), 3);
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let mut board = Board::new();
        board.apply_move(mv(0, 0, 0, 0), Player::O).unwrap();
        board.apply_move(mv(0, 0, 1, 1), Player::X).unwrap();
        board.apply_move(mv(1, 1, 0, 2), Player::O).unwrap();
        for j in 0..3 {
            board.apply_move(mv(2, 2, j, 0), Player::X).unwrap();
        }
        assert_eq!(evaluate(&board.mirrored()), -evaluate(&board));
    }
}
