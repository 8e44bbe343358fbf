//! Line weights for Ultimate Tic-Tac-Toe evaluation
//!
//! A line is worth more the more of a player's marks it holds. Lines are
//! scored per player without checking whether the opponent blocks them, so
//! a contested line counts for both sides.

/// Weight of a line by number of aligned marks
pub struct LineWeight;

impl LineWeight {
    /// One mark on the line
    pub const ONE: i32 = 1;
    /// Two marks on the line
    pub const TWO: i32 = 10;
    /// Complete line
    pub const THREE: i32 = 100;
}

/// Multiplier applied to the meta-board relative to a single sub-board
pub const META_WEIGHT: i32 = 5;

/// Weight of a line holding `aligned` marks of one player
#[inline]
#[must_use]
pub fn score(aligned: usize) -> i32 {
    match aligned {
        1 => LineWeight::ONE,
        2 => LineWeight::TWO,
        3 => LineWeight::THREE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_weights() {
        assert_eq!(score(0), 0);
        assert_eq!(score(1), 1);
        assert_eq!(score(2), 10);
        assert_eq!(score(3), 100);
        assert_eq!(score(4), 0);
    }

    #[test]
    fn test_weights_increase() {
        assert!(LineWeight::ONE < LineWeight::TWO);
        assert!(LineWeight::TWO < LineWeight::THREE);
    }
}
