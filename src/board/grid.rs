//! Fixed 3x3 grid shared by sub-boards and the meta-board

use super::{Coord, GRID_SIZE};

/// The 8 lines of a 3x3 grid: 3 rows, 3 columns, 2 diagonals
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// 3x3 matrix stored inline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid3<T> {
    cells: [[T; GRID_SIZE]; GRID_SIZE],
}

impl<T: Copy> Grid3<T> {
    /// Grid with every cell set to `value`
    pub fn filled(value: T) -> Self {
        Self {
            cells: [[value; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn from_rows(cells: [[T; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn get(&self, pos: Coord) -> T {
        self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: Coord, value: T) {
        self.cells[pos.row as usize][pos.col as usize] = value;
    }

    #[inline]
    pub fn get_ref(&self, pos: Coord) -> &T {
        &self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, pos: Coord) -> &mut T {
        &mut self.cells[pos.row as usize][pos.col as usize]
    }

    /// Values of one line
    #[inline]
    pub fn line(&self, line: &[Coord; 3]) -> [T; 3] {
        [self.get(line[0]), self.get(line[1]), self.get(line[2])]
    }

    /// Cells with their coordinates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        Coord::ALL.into_iter().map(move |pos| (pos, self.get(pos)))
    }

    /// Apply `f` to every cell
    pub fn map<U: Copy + Default>(&self, mut f: impl FnMut(T) -> U) -> Grid3<U> {
        let mut out = Grid3::filled(U::default());
        for pos in Coord::ALL {
            out.set(pos, f(self.get(pos)));
        }
        out
    }
}
