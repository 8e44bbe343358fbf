//! Board representation for Ultimate Tic-Tac-Toe

pub mod board;
pub mod grid;
pub mod history;


use std::fmt;

use crate::error::{Error, Result};

// Re-exports
pub use board::{Board, MoveList, Outcome, ScopedMove};
pub use grid::{Grid3, LINES};
pub use history::MoveHistory;

/// Side length of every board (sub-boards and the meta-board)
pub const GRID_SIZE: usize = 3;
/// Number of playable cells (9 sub-boards of 9 cells)
pub const TOTAL_CELLS: usize = GRID_SIZE.pow(4); // 81

/// Deepest search the engine accepts: a game never lasts more than 81 plies.
pub const MAX_DEPTH: usize = TOTAL_CELLS;

/// Players. `O` moves first and maximizes the evaluation, `X` minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Numeric encoding: +1 for O, -1 for X
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Player::O => 1,
            Player::X => -1,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single sub-board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    /// Numeric encoding: 0 for empty, otherwise the player's value
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(p) => p.value(),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Resolved state of a sub-board as recorded on the meta-board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetaCell {
    /// Still playable
    #[default]
    Open,
    /// Three in a row for that player
    Won(Player),
    /// Full without a line; unavailable to both players
    Drawn,
}

impl MetaCell {
    /// Numeric encoding: 0 open, +1/-1 won, 2 drawn
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            MetaCell::Open => 0,
            MetaCell::Won(p) => p.value(),
            MetaCell::Drawn => 2,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == MetaCell::Open
    }
}

/// Position inside a 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// All nine coordinates in row-major order
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2),
        Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2),
        Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2),
    ];

    /// Validated constructor
    pub fn new(row: usize, col: usize) -> Result<Self> {
        check_axis("row", row)?;
        check_axis("col", col)?;
        Ok(Self::at(row as u8, col as u8))
    }

    /// Unchecked constructor for compile-time tables
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < GRID_SIZE * GRID_SIZE);
        Self::at((idx / GRID_SIZE) as u8, (idx % GRID_SIZE) as u8)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

fn check_axis(axis: &'static str, value: usize) -> Result<()> {
    if value < GRID_SIZE {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate { axis, value })
    }
}

/// A move: which sub-board (`board`) and which cell inside it (`cell`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub board: Coord,
    pub cell: Coord,
}

impl Move {
    /// Validated constructor taking (macro row, macro col, micro row, micro col)
    pub fn new(macro_row: usize, macro_col: usize, micro_row: usize, micro_col: usize) -> Result<Self> {
        check_axis("macro row", macro_row)?;
        check_axis("macro col", macro_col)?;
        check_axis("micro row", micro_row)?;
        check_axis("micro col", micro_col)?;
        Ok(Self {
            board: Coord::at(macro_row as u8, macro_col as u8),
            cell: Coord::at(micro_row as u8, micro_col as u8),
        })
    }

    #[inline]
    pub fn from_parts(board: Coord, cell: Coord) -> Self {
        Self { board, cell }
    }

    /// Index in lexicographic (macro row, macro col, micro row, micro col) order
    #[inline]
    pub fn index(self) -> usize {
        self.board.to_index() * 9 + self.cell.to_index()
    }

    pub fn from_index(index: usize) -> Result<Self> {
        if index >= TOTAL_CELLS {
            return Err(Error::InvalidMoveIndex { index });
        }
        Ok(Self {
            board: Coord::from_index(index / 9),
            cell: Coord::from_index(index % 9),
        })
    }

    /// Row on the flat 9x9 playing surface
    #[inline]
    pub fn global_row(self) -> usize {
        self.board.row as usize * GRID_SIZE + self.cell.row as usize
    }

    /// Column on the flat 9x9 playing surface
    #[inline]
    pub fn global_col(self) -> usize {
        self.board.col as usize * GRID_SIZE + self.cell.col as usize
    }

    /// Inverse of `global_row` / `global_col`
    pub fn from_global(row: usize, col: usize) -> Result<Self> {
        let side = GRID_SIZE * GRID_SIZE;
        for (axis, value) in [("row", row), ("col", col)] {
            if value >= side {
                return Err(Error::InvalidCoordinate { axis, value });
            }
        }
        Move::new(row / GRID_SIZE, col / GRID_SIZE, row % GRID_SIZE, col % GRID_SIZE)
    }

    /// Iterate all 81 moves in enumeration order
    pub fn all() -> impl Iterator<Item = Move> {
        Coord::ALL
            .into_iter()
            .flat_map(|board| Coord::ALL.into_iter().map(move |cell| Move { board, cell }))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{}]",
            self.board.row, self.board.col, self.cell.row, self.cell.col
        )
    }
}
