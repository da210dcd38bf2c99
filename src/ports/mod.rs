//! Ports (trait boundaries) for external collaborators.
//!
//! The board renderer owns the [`Surface`] trait; concrete canvases live in
//! the adapters module or in the embedding application.

pub mod surface;

pub use surface::{Color, Point, Surface};
