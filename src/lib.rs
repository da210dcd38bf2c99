//! Fractal tic-tac-toe: boards nested to any depth
//!
//! This crate provides:
//! - A recursive board whose depth-0 cells hold marks and whose deeper cells
//!   hold whole boards
//! - Coordinate routing that places a mark at any nesting level
//! - Depth-generic layout that draws nested boards onto any [`ports::Surface`]
//! - SVG and recording surfaces, and a small CLI that renders both views

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod fractal;
pub mod ports;

pub use app::RenderConfig;
pub use error::{Error, Result};
pub use fractal::{CoordPath, Mark, Player, RecursiveBoard, View};
