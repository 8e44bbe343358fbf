//! Bounded stack of the micro coordinates played so far
//!
//! The top entry is the cell of the last move; it names the sub-board the
//! next move is sent to. Fictional search moves push and pop, committed
//! moves overwrite the top, so the depth never exceeds the search depth
//! plus one.

use super::{Coord, MAX_DEPTH};
use crate::error::{Error, Result};

/// Capacity of the stack: one committed entry plus one per searched ply
pub const HISTORY_CAPACITY: usize = MAX_DEPTH + 1;

/// Fixed-capacity move history
#[derive(Debug, Clone)]
pub struct MoveHistory {
    entries: [Coord; HISTORY_CAPACITY],
    len: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            entries: [Coord::at(0, 0); HISTORY_CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Top of the stack
    #[inline]
    pub fn peek(&self) -> Option<Coord> {
        self.len.checked_sub(1).map(|top| self.entries[top])
    }

    pub fn push(&mut self, cell: Coord) -> Result<()> {
        if self.len == HISTORY_CAPACITY {
            return Err(Error::HistoryOverflow {
                capacity: HISTORY_CAPACITY,
            });
        }
        self.entries[self.len] = cell;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Coord> {
        let top = self.len.checked_sub(1)?;
        self.len = top;
        Some(self.entries[top])
    }

    /// Overwrite the top entry, or push onto an empty stack
    pub fn replace_top(&mut self, cell: Coord) {
        match self.len.checked_sub(1) {
            Some(top) => self.entries[top] = cell,
            None => {
                self.entries[0] = cell;
                self.len = 1;
            }
        }
    }

    /// Live entries, bottom first
    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.entries[..self.len]
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

// Slots above `len` hold stale entries; only the live part is compared.
impl PartialEq for MoveHistory {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveHistory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_peek() {
        let mut history = MoveHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.peek(), None);

        history.push(Coord::at(1, 2)).unwrap();
        history.push(Coord::at(0, 0)).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.peek(), Some(Coord::at(0, 0)));

        assert_eq!(history.pop(), Some(Coord::at(0, 0)));
        assert_eq!(history.peek(), Some(Coord::at(1, 2)));
        assert_eq!(history.pop(), Some(Coord::at(1, 2)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_replace_top() {
        let mut history = MoveHistory::new();
        history.replace_top(Coord::at(2, 2));
        assert_eq!(history.as_slice(), &[Coord::at(2, 2)]);

        history.replace_top(Coord::at(1, 1));
        assert_eq!(history.as_slice(), &[Coord::at(1, 1)]);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut history = MoveHistory::new();
        for _ in 0..HISTORY_CAPACITY {
            history.push(Coord::at(0, 1)).unwrap();
        }
        assert_eq!(
            history.push(Coord::at(0, 1)),
            Err(Error::HistoryOverflow {
                capacity: HISTORY_CAPACITY
            })
        );
    }

    #[test]
    fn test_equality_ignores_stale_slots() {
        let mut a = MoveHistory::new();
        let b = MoveHistory::new();
        a.push(Coord::at(2, 1)).unwrap();
        a.pop();
        assert_eq!(a, b);
    }
}
