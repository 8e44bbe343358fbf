//! Player kinds and the uniform random move chooser

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Move};
use crate::error::Error;

/// How a side chooses its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerKind {
    /// Moves entered by a person
    #[default]
    Human,
    /// Alpha-beta search
    Minimax,
    /// Uniformly random legal move
    Random,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 3] = [PlayerKind::Human, PlayerKind::Minimax, PlayerKind::Random];

    pub fn name(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Minimax => "minimax",
            PlayerKind::Random => "random",
        }
    }

    #[inline]
    pub fn is_human(self) -> bool {
        self == PlayerKind::Human
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the menu numbers `1`/`2`/`3` or the names
impl FromStr for PlayerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "human" | "h" => Ok(PlayerKind::Human),
            "2" | "minimax" | "ai" | "m" => Ok(PlayerKind::Minimax),
            "3" | "random" | "r" => Ok(PlayerKind::Random),
            _ => Err(Error::ParsePlayerKind {
                input: s.to_string(),
                expected: "1/human, 2/minimax, 3/random".to_string(),
            }),
        }
    }
}

/// Pick a legal move uniformly at random, or `None` when there is none
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    if board.is_game_over() {
        return None;
    }
    board.legal_moves().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Player};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_player_kind() {
        assert_eq!("1".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!(" Minimax ".parse::<PlayerKind>().unwrap(), PlayerKind::Minimax);
        assert_eq!("3".parse::<PlayerKind>().unwrap(), PlayerKind::Random);
        assert!(matches!(
            "4".parse::<PlayerKind>(),
            Err(Error::ParsePlayerKind { .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for kind in PlayerKind::ALL {
            assert_eq!(kind.to_string().parse::<PlayerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        board
            .commit_move(Move::new(0, 0, 2, 1).unwrap(), Player::O)
            .unwrap();

        for _ in 0..50 {
            let mv = random_move(&board, &mut rng).unwrap();
            assert!(board.is_legal(mv));
            assert_eq!(mv.board, Coord::new(2, 1).unwrap());
        }
    }

    #[test]
    fn test_random_move_covers_choices() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(random_move(&board, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 81);
    }
}
