//! The recursive board tree: construction, coordinate routing and accessors

use std::{array, fmt};

use rand::Rng;
use tracing::{debug, warn};

use super::{
    coords::{CoordPath, GRID_SIDE, Step, ensure_steps_in_range},
    mark::{Mark, Player},
};
use crate::{Error, Result};

/// A 3×3 grid, indexed `[row][col]`
pub type Grid<T> = [[T; GRID_SIDE]; GRID_SIDE];

/// Contents of a board: marks at depth 0, owned sub-boards above that
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cells {
    Leaf(Grid<Mark>),
    Nested(Box<Grid<RecursiveBoard>>),
}

/// A self-similar tic-tac-toe board.
///
/// A depth-0 board is an ordinary 3×3 grid of [`Mark`]s. A depth-`n` board is
/// a 3×3 grid of depth-`n - 1` boards, each owned by its parent.
///
/// # Winner placeholder
///
/// Every board carries a `winner` that is drawn uniformly from `X`/`O` when the
/// board is built. It is **not** computed from the cells and [`play`] never
/// updates it. Parents render their children's `winner` as the mark for that
/// sub-board, so the rendered sub-board marks do not reflect the game state.
///
/// [`play`]: RecursiveBoard::play
///
/// # Examples
///
/// ```
/// use fractal_tictactoe::fractal::{Mark, Player, RecursiveBoard};
///
/// let mut board = RecursiveBoard::new(1);
/// board.play(Player::X, [(0, 0), (1, 1)])?;
/// assert_eq!(board.mark_at(&"0,0/1,1".parse()?)?, Mark::X);
/// assert_eq!(board.occupied_count(), 1);
/// # Ok::<(), fractal_tictactoe::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursiveBoard {
    depth: usize,
    winner: Mark,
    cells: Cells,
}

impl RecursiveBoard {
    /// Build a board of `depth` with winners drawn from the thread RNG.
    pub fn new(depth: usize) -> Self {
        Self::with_rng(depth, &mut rand::rng())
    }

    /// Build a board of `depth`, drawing every winner from `rng`.
    ///
    /// Each board draws its own winner before building its children, which are
    /// built row-major. Seeding `rng` therefore fixes every winner in the tree.
    pub fn with_rng<R: Rng + ?Sized>(depth: usize, rng: &mut R) -> Self {
        let board = Self::build(depth, rng);
        debug!(depth, leaves = board.leaf_count(), "built board");
        board
    }

    fn build<R: Rng + ?Sized>(depth: usize, rng: &mut R) -> Self {
        let winner = Mark::coin_flip(rng);
        let cells = match depth {
            0 => Cells::Leaf([[Mark::Empty; GRID_SIDE]; GRID_SIDE]),
            _ => Cells::Nested(Box::new(array::from_fn(|_| {
                array::from_fn(|_| Self::build(depth - 1, rng))
            }))),
        };
        Self {
            depth,
            winner,
            cells,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The construction-time placeholder winner. See the type-level docs.
    pub fn winner(&self) -> Mark {
        self.winner
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.cells, Cells::Leaf(_))
    }

    /// Sub-board at `(row, col)`, or `None` on a leaf or out of range.
    pub fn child(&self, row: usize, col: usize) -> Option<&RecursiveBoard> {
        match &self.cells {
            Cells::Nested(children) => children.get(row)?.get(col),
            Cells::Leaf(_) => None,
        }
    }

    /// Mark at `(row, col)` on a leaf, or `None` on a nested board or out of range.
    pub fn mark(&self, row: usize, col: usize) -> Option<Mark> {
        match &self.cells {
            Cells::Leaf(grid) => grid.get(row)?.get(col).copied(),
            Cells::Nested(_) => None,
        }
    }

    /// Marks that represent each cell when this board is drawn: its own marks on
    /// a leaf, its children's winners otherwise.
    pub fn display_marks(&self) -> Grid<Mark> {
        match &self.cells {
            Cells::Leaf(grid) => *grid,
            Cells::Nested(children) => children
                .each_ref()
                .map(|row| row.each_ref().map(|child| child.winner)),
        }
    }

    /// Grid of children's winners, or `None` on a leaf.
    pub fn winner_grid(&self) -> Option<Grid<Mark>> {
        match self.cells {
            Cells::Nested(_) => Some(self.display_marks()),
            Cells::Leaf(_) => None,
        }
    }

    /// Follow `path` down to a sub-board. The empty path returns `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinates`] if the path is longer than the
    /// board is deep, or [`Error::CoordinateOutOfRange`] for a bad component.
    pub fn sub_board(&self, path: &CoordPath) -> Result<&RecursiveBoard> {
        if path.len() > self.depth {
            return Err(Error::InvalidCoordinates {
                expected: self.depth,
                got: path.len(),
            });
        }
        path.ensure_in_range()?;

        let mut board = self;
        for &(row, col) in path.steps() {
            board = board
                .child(row, col)
                .ok_or(Error::CoordinateOutOfRange { level: board.depth, row, col })?;
        }
        Ok(board)
    }

    /// Read the depth-0 cell addressed by a full path.
    pub fn mark_at(&self, path: &CoordPath) -> Result<Mark> {
        self.check_full_path(path.steps())?;
        let (&(row, col), prefix) = path
            .steps()
            .split_last()
            .ok_or(Error::InvalidCoordinates {
                expected: self.depth + 1,
                got: 0,
            })?;
        let leaf = self.sub_board(&CoordPath::new(prefix.to_vec()))?;
        leaf.mark(row, col)
            .ok_or(Error::CoordinateOutOfRange { level: self.depth, row, col })
    }

    /// Write `player` into the depth-0 cell selected by `coords`.
    ///
    /// `coords` holds one `(row, col)` step per level, outermost first, so it
    /// must have exactly `depth + 1` steps. Any earlier mark in that cell is
    /// overwritten. Winners are left untouched.
    ///
    /// # Errors
    ///
    /// The board is left unchanged and:
    /// - [`Error::InvalidCoordinates`] is returned (and a warning logged) if the
    ///   number of steps is wrong;
    /// - [`Error::CoordinateOutOfRange`] is returned if a component is not 0-2.
    pub fn play(&mut self, player: Player, coords: impl AsRef<[Step]>) -> Result<()> {
        let coords = coords.as_ref();
        if let Err(err) = self.check_full_path(coords) {
            if let Error::InvalidCoordinates { expected, got } = err {
                warn!(expected, got, "invalid amount of row-cols passed to board");
            }
            return Err(err);
        }
        self.route(player.to_mark(), coords);
        Ok(())
    }

    fn check_full_path(&self, coords: &[Step]) -> Result<()> {
        let expected = self.depth + 1;
        if coords.len() != expected {
            return Err(Error::InvalidCoordinates {
                expected,
                got: coords.len(),
            });
        }
        ensure_steps_in_range(coords)
    }

    fn route(&mut self, mark: Mark, coords: &[Step]) {
        let Some((&(row, col), rest)) = coords.split_first() else {
            return;
        };
        match &mut self.cells {
            Cells::Leaf(grid) => grid[row][col] = mark,
            Cells::Nested(children) => children[row][col].route(mark, rest),
        }
    }

    /// Number of depth-0 boards in this tree.
    pub fn leaf_count(&self) -> usize {
        match &self.cells {
            Cells::Leaf(_) => 1,
            Cells::Nested(children) => children.iter().flatten().map(Self::leaf_count).sum(),
        }
    }

    /// Number of non-empty depth-0 cells in this tree.
    pub fn occupied_count(&self) -> usize {
        match &self.cells {
            Cells::Leaf(grid) => grid.iter().flatten().filter(|m| !m.is_empty()).count(),
            Cells::Nested(children) => children.iter().flatten().map(Self::occupied_count).sum(),
        }
    }

    /// Visit every board in the tree, parents before children.
    pub fn for_each_board<'a>(&'a self, visit: &mut impl FnMut(&'a RecursiveBoard)) {
        visit(self);
        if let Cells::Nested(children) = &self.cells {
            for child in children.iter().flatten() {
                child.for_each_board(visit);
            }
        }
    }

    fn text_lines(&self) -> Vec<String> {
        match &self.cells {
            Cells::Leaf(grid) => grid
                .iter()
                .map(|row| row.iter().map(|m| m.to_char()).collect::<String>())
                .collect(),
            Cells::Nested(children) => {
                let column_sep = format!(" {} ", "|".repeat(self.depth));
                let row_char = if self.depth == 1 { '-' } else { '=' };
                let mut lines = Vec::new();
                for (r, row) in children.iter().enumerate() {
                    let blocks: Vec<Vec<String>> = row.iter().map(Self::text_lines).collect();
                    let joined: Vec<String> = (0..blocks[0].len())
                        .map(|i| {
                            blocks
                                .iter()
                                .map(|block| block[i].as_str())
                                .collect::<Vec<_>>()
                                .join(&column_sep)
                        })
                        .collect();
                    if r > 0 {
                        let width = joined[0].chars().count();
                        lines.push(row_char.to_string().repeat(width));
                    }
                    lines.extend(joined);
                }
                lines
            }
        }
    }
}

impl fmt::Display for RecursiveBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.text_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
