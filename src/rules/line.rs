//! Terminal detection for any 3x3 grid
//!
//! The same routine classifies sub-boards (made of [`Cell`]s) and the
//! meta-board (made of [`MetaCell`]s). A drawn sub-board occupies its
//! meta-board square but belongs to nobody, so it never completes a line.

use crate::board::{Cell, Coord, Grid3, MetaCell, Player, LINES};

/// Anything that can sit in a 3x3 grid and take part in a line
pub trait LineCell: Copy {
    /// Player owning this square, if any
    fn owner(self) -> Option<Player>;
    /// True when the square can no longer be played
    fn is_occupied(self) -> bool;
}

impl LineCell for Cell {
    #[inline]
    fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(p) => Some(p),
        }
    }

    #[inline]
    fn is_occupied(self) -> bool {
        !self.is_empty()
    }
}

impl LineCell for MetaCell {
    #[inline]
    fn owner(self) -> Option<Player> {
        match self {
            MetaCell::Won(p) => Some(p),
            MetaCell::Open | MetaCell::Drawn => None,
        }
    }

    #[inline]
    fn is_occupied(self) -> bool {
        !self.is_open()
    }
}

/// Terminal status of a 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardStatus {
    /// No line and at least one free square
    Ongoing,
    /// A line of three for this player
    Decided(Player),
    /// Every square occupied without a line
    Full,
}

impl BoardStatus {
    #[inline]
    pub fn is_ongoing(self) -> bool {
        self == BoardStatus::Ongoing
    }
}

/// Owner of a completed line, if the line is complete
#[inline]
fn line_owner<T: LineCell>(values: [T; 3]) -> Option<Player> {
    let owner = values[0].owner()?;
    (values[1].owner() == Some(owner) && values[2].owner() == Some(owner)).then_some(owner)
}

/// Classify a grid as ongoing, decided or full.
///
/// Rows are checked first, then columns, then diagonals; the first
/// complete line names the winner.
pub fn board_state<T: LineCell>(grid: &Grid3<T>) -> BoardStatus {
    if let Some(winner) = LINES.iter().find_map(|line| line_owner(grid.line(line))) {
        return BoardStatus::Decided(winner);
    }

    if grid.iter().all(|(_, cell)| cell.is_occupied()) {
        BoardStatus::Full
    } else {
        BoardStatus::Ongoing
    }
}

/// Coordinates of the first complete line, for highlighting
pub fn winning_line<T: LineCell>(grid: &Grid3<T>) -> Option<[Coord; 3]> {
    LINES
        .iter()
        .find(|line| line_owner(grid.line(line)).is_some())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const O: Cell = Cell::Taken(Player::O);
    const X: Cell = Cell::Taken(Player::X);
    const E: Cell = Cell::Empty;

    fn grid_with_line(line: &[Coord; 3], player: Player) -> Grid3<Cell> {
        let mut grid = Grid3::filled(Cell::Empty);
        for &pos in line {
            grid.set(pos, Cell::Taken(player));
        }
        grid
    }

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for line in &LINES {
            for player in [Player::O, Player::X] {
                let grid = grid_with_line(line, player);
                assert_eq!(board_state(&grid), BoardStatus::Decided(player), "line {:?}", line);
                assert_eq!(winning_line(&grid), Some(*line));
            }
        }
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        let grid = Grid3::filled(Cell::Empty);
        assert_eq!(board_state(&grid), BoardStatus::Ongoing);
        assert_eq!(winning_line(&grid), None);
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        let grid = Grid3::from_rows([[O, X, E], [E, O, E], [X, E, E]]);
        assert_eq!(board_state(&grid), BoardStatus::Ongoing);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = Grid3::from_rows([[O, O, X], [E, E, E], [E, E, E]]);
        assert_eq!(board_state(&grid), BoardStatus::Ongoing);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let grid = Grid3::from_rows([[O, X, O], [O, X, X], [X, O, O]]);
        assert_eq!(board_state(&grid), BoardStatus::Full);
    }

    #[test]
    fn test_full_board_with_line_is_decided() {
        let grid = Grid3::from_rows([[X, X, X], [O, O, X], [O, X, O]]);
        assert_eq!(board_state(&grid), BoardStatus::Decided(Player::X));
    }

    #[test]
    fn test_drawn_meta_cells_never_complete_a_line() {
        let drawn = Grid3::from_rows([
            [MetaCell::Drawn, MetaCell::Drawn, MetaCell::Drawn],
            [MetaCell::Open, MetaCell::Won(Player::O), MetaCell::Open],
            [MetaCell::Open, MetaCell::Open, MetaCell::Open],
        ]);
        assert_eq!(board_state(&drawn), BoardStatus::Ongoing);

        let mixed = Grid3::from_rows([
            [MetaCell::Won(Player::O), MetaCell::Drawn, MetaCell::Won(Player::O)],
            [MetaCell::Drawn, MetaCell::Won(Player::X), MetaCell::Won(Player::O)],
            [MetaCell::Won(Player::X), MetaCell::Won(Player::O), MetaCell::Drawn],
        ]);
        assert_eq!(board_state(&mixed), BoardStatus::Full);
    }

    #[test]
    fn test_meta_board_win() {
        let mut meta = Grid3::filled(MetaCell::Open);
        meta.set(Coord::at(0, 2), MetaCell::Won(Player::X));
        meta.set(Coord::at(1, 1), MetaCell::Won(Player::X));
        meta.set(Coord::at(2, 0), MetaCell::Won(Player::X));
        meta.set(Coord::at(0, 0), MetaCell::Drawn);
        assert_eq!(board_state(&meta), BoardStatus::Decided(Player::X));
    }
}
