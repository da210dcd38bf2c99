//! Common test utilities for the fractal board test suite.
//!
//! Seeded board construction and float/point comparison helpers shared by the
//! routing, rendering and CLI tests.

#![allow(dead_code)]

use fractal_tictactoe::{
    Mark, RecursiveBoard,
    fractal::Cells,
    ports::Point,
};
use rand::{SeedableRng, rngs::StdRng};

/// Build a board whose placeholder winners are fixed by `seed`.
pub fn seeded_board(depth: usize, seed: u64) -> RecursiveBoard {
    RecursiveBoard::with_rng(depth, &mut StdRng::seed_from_u64(seed))
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn approx_point(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// Every leaf cell with its full coordinate path, outermost step first.
pub fn leaf_cells(board: &RecursiveBoard) -> Vec<(Vec<(usize, usize)>, Mark)> {
    let mut out = Vec::new();
    collect_leaf_cells(board, &mut Vec::new(), &mut out);
    out
}

fn collect_leaf_cells(
    board: &RecursiveBoard,
    prefix: &mut Vec<(usize, usize)>,
    out: &mut Vec<(Vec<(usize, usize)>, Mark)>,
) {
    match board.cells() {
        Cells::Leaf(grid) => {
            for (r, row) in grid.iter().enumerate() {
                for (c, &mark) in row.iter().enumerate() {
                    let mut path = prefix.clone();
                    path.push((r, c));
                    out.push((path, mark));
                }
            }
        }
        Cells::Nested(children) => {
            for (r, row) in children.iter().enumerate() {
                for (c, child) in row.iter().enumerate() {
                    prefix.push((r, c));
                    collect_leaf_cells(child, prefix, out);
                    prefix.pop();
                }
            }
        }
    }
}

/// Winners of every board in the tree, parents before children.
pub fn all_winners(board: &RecursiveBoard) -> Vec<Mark> {
    let mut winners = Vec::new();
    board.for_each_board(&mut |b| winners.push(b.winner()));
    winners
}

/// Winners of every board at exactly `depth`.
pub fn winners_at_depth(board: &RecursiveBoard, depth: usize) -> Vec<Mark> {
    let mut winners = Vec::new();
    board.for_each_board(&mut |b| {
        if b.depth() == depth {
            winners.push(b.winner());
        }
    });
    winners
}
