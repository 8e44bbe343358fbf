//! Board structure with meta-board and move history tracking

use std::fmt;
use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use super::history::MoveHistory;
use super::{Cell, Coord, Grid3, MetaCell, Move, Player, GRID_SIZE, TOTAL_CELLS};
use crate::error::{Error, Result};
use crate::rules::{board_state, BoardStatus};

/// Legal moves of a position, kept on the stack
pub type MoveList = SmallVec<[Move; TOTAL_CELLS]>;

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Full game state: nine sub-boards, the meta-board summarizing them and
/// the history that decides where the next move must go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    sub_boards: Grid3<Grid3<Cell>>,
    meta: Grid3<MetaCell>,
    history: MoveHistory,
}

impl Board {
    pub fn new() -> Self {
        Self {
            sub_boards: Grid3::filled(Grid3::filled(Cell::Empty)),
            meta: Grid3::filled(MetaCell::Open),
            history: MoveHistory::new(),
        }
    }

    /// Get cell content
    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        self.sub_boards.get(mv.board).get(mv.cell)
    }

    #[inline]
    pub fn sub_board(&self, board: Coord) -> &Grid3<Cell> {
        self.sub_boards.get_ref(board)
    }

    #[inline]
    pub fn meta(&self) -> &Grid3<MetaCell> {
        &self.meta
    }

    #[inline]
    pub fn meta_cell(&self, board: Coord) -> MetaCell {
        self.meta.get(board)
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Cell of the most recent move (top of the history)
    #[inline]
    pub fn last_cell(&self) -> Option<Coord> {
        self.history.peek()
    }

    /// Sub-board the next move is forced into, or `None` for a free choice
    pub fn active_board(&self) -> Option<Coord> {
        self.last_cell().filter(|&target| self.meta.get(target).is_open())
    }

    /// Terminal status of the whole game
    #[inline]
    pub fn status(&self) -> BoardStatus {
        board_state(&self.meta)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            BoardStatus::Ongoing => None,
            BoardStatus::Decided(winner) => Some(Outcome::Winner(winner)),
            BoardStatus::Full => Some(Outcome::Draw),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.status().is_ongoing()
    }

    /// Check whether a move may be played.
    ///
    /// The target cell must be empty. Before the first move any cell is
    /// allowed; afterwards the move must go to the sub-board named by the
    /// last move's cell, or to any open sub-board when that one is resolved.
    pub fn is_legal(&self, mv: Move) -> bool {
        if !self.cell(mv).is_empty() {
            return false;
        }
        match self.last_cell() {
            None => true,
            Some(target) if self.meta.get(target).is_open() => mv.board == target,
            Some(_) => self.meta.get(mv.board).is_open(),
        }
    }

    /// All legal moves in lexicographic enumeration order
    pub fn legal_moves(&self) -> MoveList {
        Move::all().filter(|&mv| self.is_legal(mv)).collect()
    }

    /// Place a mark and refresh the meta-board entry of its sub-board
    fn place(&mut self, mv: Move, player: Player) {
        let sub = self.sub_boards.get_mut(mv.board);
        sub.set(mv.cell, Cell::Taken(player));
        let resolved = match board_state(sub) {
            BoardStatus::Ongoing => MetaCell::Open,
            BoardStatus::Decided(winner) => MetaCell::Won(winner),
            BoardStatus::Full => MetaCell::Drawn,
        };
        self.meta.set(mv.board, resolved);
    }

    /// Apply a fictional (searched) move, pushing its cell onto the history.
    ///
    /// Legality is the caller's responsibility; every call must be paired
    /// with [`Board::undo_move`] in reverse order.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<()> {
        self.history.push(mv.cell)?;
        self.place(mv, player);
        Ok(())
    }

    /// Revert a fictional move.
    ///
    /// # Panics
    ///
    /// Panics when the history is empty or its top does not match `mv`:
    /// the apply/undo pairing is broken and the board can no longer be trusted.
    pub fn undo_move(&mut self, mv: Move) {
        let Some(top) = self.history.pop() else {
            panic!("move history underflow while undoing {mv}");
        };
        assert_eq!(top, mv.cell, "undo of {mv} out of order");

        self.sub_boards.get_mut(mv.board).set(mv.cell, Cell::Empty);
        // The move was legal, so its sub-board was open before it.
        self.meta.set(mv.board, MetaCell::Open);
    }

    /// Apply a fictional move that is undone when the guard is dropped
    pub fn scoped_move(&mut self, mv: Move, player: Player) -> Result<ScopedMove<'_>> {
        self.apply_move(mv, player)?;
        Ok(ScopedMove { board: self, mv })
    }

    /// Play a real move.
    ///
    /// A committed move replaces the top of the history instead of growing
    /// it, so a whole game never holds more than one committed entry.
    pub fn commit_move(&mut self, mv: Move, player: Player) -> Result<()> {
        if self.is_game_over() {
            return Err(Error::GameOver);
        }
        if !self.is_legal(mv) {
            return Err(Error::IllegalMove { mv });
        }

        self.history.replace_top(mv.cell);
        self.place(mv, player);
        Ok(())
    }

    /// Number of marks on the whole playing surface
    pub fn stone_count(&self) -> usize {
        self.sub_boards
            .iter()
            .map(|(pos, _)| {
                self.sub_board(pos)
                    .iter()
                    .filter(|(_, cell)| !cell.is_empty())
                    .count()
            })
            .sum()
    }

    /// Same position with every O and X swapped
    pub fn mirrored(&self) -> Board {
        let swap_cell = |cell: Cell| match cell {
            Cell::Empty => Cell::Empty,
            Cell::Taken(p) => Cell::Taken(p.opponent()),
        };
        let mut sub_boards = self.sub_boards;
        for pos in Coord::ALL {
            let swapped = self.sub_board(pos).map(swap_cell);
            sub_boards.set(pos, swapped);
        }
        let meta = self.meta.map(|cell| match cell {
            MetaCell::Won(p) => MetaCell::Won(p.opponent()),
            other => other,
        });
        Board {
            sub_boards,
            meta,
            history: self.history.clone(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A fictional move that is undone on drop.
///
/// Derefs to the board so the search can recurse through it; an early
/// return with `?` still restores the position.
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl ScopedMove<'_> {
    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.mv);
    }
}

/// Text rendering: `.` empty, `O`/`X` marks, `_` free cells of the active
/// sub-board, and resolved sub-boards filled with their owner (`N` if drawn).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active_board();
        let free_choice = self.last_cell().is_some() && active.is_none();
        let separator = "+-------+-------+-------+";

        for row in 0..GRID_SIZE * GRID_SIZE {
            if row % GRID_SIZE == 0 {
                writeln!(f, "{separator}")?;
            }
            for col in 0..GRID_SIZE * GRID_SIZE {
                if col % GRID_SIZE == 0 {
                    write!(f, "| ")?;
                }
                let mv = Move::from_parts(
                    Coord::at((row / GRID_SIZE) as u8, (col / GRID_SIZE) as u8),
                    Coord::at((row % GRID_SIZE) as u8, (col % GRID_SIZE) as u8),
                );
                let meta = self.meta.get(mv.board);
                let symbol = match (meta, self.cell(mv)) {
                    (MetaCell::Won(p), _) => p.symbol(),
                    (MetaCell::Drawn, _) => 'N',
                    (MetaCell::Open, Cell::Taken(p)) => p.symbol(),
                    (MetaCell::Open, Cell::Empty) => {
                        if active == Some(mv.board) || free_choice {
                            '_'
                        } else {
                            '.'
                        }
                    }
                };
                write!(f, "{symbol} ")?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{separator}")
    }
}
