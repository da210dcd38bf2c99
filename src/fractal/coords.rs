//! Coordinate paths through a nested board

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::mark::Player;
use crate::{Error, Result};

/// Side length of every grid at every level
pub const GRID_SIDE: usize = 3;

/// One `(row, col)` step, ordered outermost level first.
pub type Step = (usize, usize);

/// Ordered `(row, col)` steps from the root toward a cell or sub-board.
///
/// A path addressing a depth-0 cell of a depth-`d` board has `d + 1` steps.
/// Shorter paths address sub-boards.
///
/// # Examples
///
/// ```
/// use fractal_tictactoe::fractal::CoordPath;
///
/// let path: CoordPath = "0,0/1,1".parse()?;
/// assert_eq!(path.steps(), &[(0, 0), (1, 1)]);
/// assert_eq!(path.to_string(), "0,0/1,1");
/// # Ok::<(), fractal_tictactoe::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoordPath {
    steps: Vec<Step>,
}

impl CoordPath {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The empty path, addressing the root itself.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check every component lies in `0..3`.
    pub fn ensure_in_range(&self) -> Result<()> {
        ensure_steps_in_range(&self.steps)
    }
}

/// Check every component of `steps` lies in `0..3`.
pub(crate) fn ensure_steps_in_range(steps: &[Step]) -> Result<()> {
    match steps
        .iter()
        .enumerate()
        .find(|(_, (row, col))| *row >= GRID_SIDE || *col >= GRID_SIDE)
    {
        Some((level, &(row, col))) => Err(Error::CoordinateOutOfRange { level, row, col }),
        None => Ok(()),
    }
}

impl From<Vec<Step>> for CoordPath {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(steps)
    }
}

impl<const N: usize> From<[Step; N]> for CoordPath {
    fn from(steps: [Step; N]) -> Self {
        Self::new(steps.to_vec())
    }
}

impl AsRef<[Step]> for CoordPath {
    fn as_ref(&self) -> &[Step] {
        &self.steps
    }
}

impl FromStr for CoordPath {
    type Err = Error;

    /// Parse `row,col` steps separated by `/`. An empty (or blank) string is
    /// the root path.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let syntax = |reason: String| Error::InvalidCoordinateSyntax {
            input: s.to_string(),
            reason,
        };

        let mut steps = Vec::new();
        for (level, part) in trimmed.split('/').enumerate() {
            let (row, col) = part
                .split_once(',')
                .ok_or_else(|| syntax(format!("step {level} '{part}' is not 'row,col'")))?;
            let parse = |token: &str| {
                token
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| syntax(format!("step {level} component '{token}': {e}")))
            };
            steps.push((parse(row)?, parse(col)?));
        }

        let path = Self { steps };
        path.ensure_in_range()?;
        Ok(path)
    }
}

impl TryFrom<String> for CoordPath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CoordPath> for String {
    fn from(path: CoordPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for CoordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (row, col)) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{row},{col}")?;
        }
        Ok(())
    }
}

/// A mark placement: who plays, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    pub player: Player,
    pub path: CoordPath,
}

impl FromStr for Play {
    type Err = Error;

    /// Parse `P@path`, e.g. `X@0,0/1,1`.
    fn from_str(s: &str) -> Result<Self> {
        let (player, path) = s
            .split_once('@')
            .ok_or_else(|| Error::InvalidCoordinateSyntax {
                input: s.to_string(),
                reason: "expected 'PLAYER@row,col/...'".to_string(),
            })?;
        Ok(Self {
            player: Player::parse(player, s)?,
            path: path.parse()?,
        })
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.player, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multi_level_path() {
        let path: CoordPath = "2,1 / 0,0 / 1,2".parse().unwrap();
        assert_eq!(path.steps(), &[(2, 1), (0, 0), (1, 2)]);
        assert_eq!(path.to_string(), "2,1/0,0/1,2");
    }

    #[test]
    fn test_blank_is_root() {
        assert!("".parse::<CoordPath>().unwrap().is_empty());
        assert!("  ".parse::<CoordPath>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_syntax() {
        for input in ["0", "0,0/", "a,1", "0;0", "0,0,0"] {
            let err = input.parse::<CoordPath>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidCoordinateSyntax { .. }),
                "{input} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let err = "0,0/3,1".parse::<CoordPath>().unwrap_err();
        assert!(matches!(
            err,
            Error::CoordinateOutOfRange {
                level: 1,
                row: 3,
                col: 1
            }
        ));
    }

    #[test]
    fn test_parse_play() {
        let play: Play = "o@1,2".parse().unwrap();
        assert_eq!(play.player, Player::O);
        assert_eq!(play.path.steps(), &[(1, 2)]);
        assert_eq!(play.to_string(), "O@1,2");

        assert!("1,2".parse::<Play>().is_err());
        assert!(matches!(
            "Q@1,2".parse::<Play>(),
            Err(Error::InvalidPlayerString { .. })
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let path = CoordPath::from([(0, 1), (2, 2)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"0,1/2,2\"");
        let back: CoordPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
