//! Cell marks and the players that place them

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The occupant of a single depth-0 cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | ' ' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Draw `X` or `O` with equal probability. Never returns `Empty`.
    pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Mark {
        if rng.random_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A side that can place marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn to_mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    /// Parse "X" or "O" (case-insensitive). `input` is only used for error context.
    pub fn parse(token: &str, input: &str) -> crate::Result<Player> {
        match token.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
                input: input.to_string(),
            }),
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.to_mark()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_mark())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_char_conversion() {
        for mark in [Mark::Empty, Mark::X, Mark::O] {
            assert_eq!(Mark::from_char(mark.to_char()), Some(mark));
        }
        assert_eq!(Mark::from_char('?'), None);
    }

    #[test]
    fn test_coin_flip_never_empty_and_hits_both_sides() {
        let mut rng = StdRng::seed_from_u64(7);
        let flips: Vec<Mark> = (0..200).map(|_| Mark::coin_flip(&mut rng)).collect();
        assert!(flips.iter().all(|m| !m.is_empty()));
        assert!(flips.contains(&Mark::X));
        assert!(flips.contains(&Mark::O));
    }

    #[test]
    fn test_player_parse() {
        assert_eq!(Player::parse("x", "x@0,0").unwrap(), Player::X);
        assert_eq!(Player::parse("O", "O@0,0").unwrap(), Player::O);
        let err = Player::parse("Z", "Z@0,0").unwrap_err();
        assert!(err.to_string().contains("expected 'X' or 'O'"));
    }

    #[test]
    fn test_player_to_mark() {
        assert_eq!(Player::X.to_mark(), Mark::X);
        assert_eq!(Mark::from(Player::O), Mark::O);
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
