//! Self-similar tic-tac-toe boards

pub mod board;
pub mod coords;
pub mod geometry;
pub mod mark;
pub mod render;

pub use board::{Cells, Grid, RecursiveBoard};
pub use coords::{CoordPath, GRID_SIDE, Play, Step};
pub use geometry::{Geometry, GeometryTable, STANDARD_GEOMETRY};
pub use mark::{Mark, Player};
pub use render::{Palette, RenderStyle, View, draw_views, level_for};
