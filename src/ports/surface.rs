//! Surface port - abstraction over a 2D stroking canvas
//!
//! The board renderer only needs to stroke straight paths and circular arcs
//! in a chosen color and width. Anything that can do that (an SVG writer, an
//! HTML canvas binding, a recorder for tests) implements [`Surface`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in surface pixel coordinates, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    /// Offset by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An opaque RGB stroke color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
}

impl fmt::Display for Color {
    /// CSS hex notation, e.g. `#ff0000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A 2D drawing surface with canvas-style path stroking.
///
/// Calls follow the canvas model: `begin_path` starts a fresh path,
/// `move_to`/`line_to`/`arc` extend it, and `stroke` paints it using the
/// stroke color and width in effect at that moment.
pub trait Surface {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new sub-path at `point`.
    fn move_to(&mut self, point: Point);

    /// Extend the current sub-path with a straight segment to `point`.
    fn line_to(&mut self, point: Point);

    /// Add a circular arc around `center`. Angles are in radians, measured
    /// clockwise from the positive x axis in screen space.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    /// Paint the current path.
    fn stroke(&mut self);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    /// Stroke a single segment from `from` to `to`.
    fn stroke_line(&mut self, from: Point, to: Point) {
        self.begin_path();
        self.move_to(from);
        self.line_to(to);
        self.stroke();
    }

    /// Stroke a full circle.
    fn stroke_circle(&mut self, center: Point, radius: f64) {
        self.begin_path();
        self.arc(center, radius, 0.0, std::f64::consts::TAU);
        self.stroke();
    }
}
