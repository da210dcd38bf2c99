//! Depth-generic layout of nested boards onto a [`Surface`]

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    board::{Cells, RecursiveBoard},
    coords::CoordPath,
    geometry::{Geometry, GeometryTable},
    mark::Mark,
};
use crate::{
    Result,
    ports::{Color, Point, Surface},
};

/// Which rendering pass a board is drawn in.
///
/// The outer view shows a board's full structure one level smaller than the
/// inner view, and stops one level above the leaves: boards just above the
/// leaves show their children's winners instead of their children. The inner
/// view draws every level down to the leaf marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Outer,
    Inner,
}

impl View {
    /// How many levels this view shifts the geometry lookup down by.
    pub fn level_offset(self) -> usize {
        match self {
            View::Outer => 1,
            View::Inner => 0,
        }
    }
}

impl From<bool> for View {
    fn from(is_outer: bool) -> Self {
        if is_outer { View::Outer } else { View::Inner }
    }
}

/// Geometry level for a board of `depth` drawn in `view`. Negative for a
/// depth-0 board in the outer view, which has no geometry.
pub fn level_for(depth: usize, view: View) -> isize {
    depth as isize - view.level_offset() as isize
}

/// Stroke colors for grid lines and the two marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub grid: Color,
    pub x: Color,
    pub o: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Color::BLACK,
            x: Color::RED,
            o: Color::BLUE,
        }
    }
}

/// Everything the renderer needs besides the board and the surface
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderStyle {
    pub geometry: GeometryTable,
    pub palette: Palette,
}

impl RenderStyle {
    pub fn new(geometry: GeometryTable, palette: Palette) -> Self {
        Self { geometry, palette }
    }

    /// Extend the geometry table, if needed, so every view of a board of
    /// `depth` has a row.
    #[must_use = "covering returns a new style; the original is unchanged"]
    pub fn covering(&self, depth: usize) -> Self {
        Self {
            geometry: self
                .geometry
                .extended_to(GeometryTable::levels_required(depth)),
            palette: self.palette,
        }
    }

    /// Side length in pixels of a board of `depth` drawn in `view`.
    pub fn extent(&self, depth: usize, view: View) -> Result<f64> {
        Ok(self.geometry.lookup(level_for(depth, view))?.size)
    }
}

impl RecursiveBoard {
    /// Draw this board and its visible descendants with the standard geometry
    /// and palette, top-left corner at `top_left`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingGeometry`] when the standard table has no
    /// row for a level this view needs. Nothing is drawn past that point.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        view: View,
        top_left: Point,
    ) -> Result<()> {
        self.draw_with(surface, &RenderStyle::default(), view, top_left)
    }

    /// Draw with an explicit geometry table and palette.
    pub fn draw_with<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        style: &RenderStyle,
        view: View,
        top_left: Point,
    ) -> Result<()> {
        debug!(depth = self.depth(), ?view, "drawing board");
        self.draw_level(surface, style, view, top_left)
    }

    fn draw_level<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        style: &RenderStyle,
        view: View,
        top_left: Point,
    ) -> Result<()> {
        let level = level_for(self.depth(), view);
        let geometry = *style.geometry.lookup(level)?;
        let inner = geometry.inner_size();
        let origin = top_left.offset(geometry.margin, geometry.margin);

        surface.set_stroke_color(style.palette.grid);
        surface.set_line_width(geometry.stroke);
        for third in [inner / 3.0, 2.0 * inner / 3.0] {
            surface.stroke_line(origin.offset(0.0, third), origin.offset(inner, third));
        }
        for third in [inner / 3.0, 2.0 * inner / 3.0] {
            surface.stroke_line(origin.offset(third, 0.0), origin.offset(third, inner));
        }

        // Just above the leaves, the outer view stops and shows winners instead.
        let shows_children = !(self.depth() == 1 && view == View::Outer);
        match self.cells() {
            Cells::Nested(children) if shows_children => {
                let next = style.geometry.lookup(level - 1)?.size;
                for (r, row) in children.iter().enumerate() {
                    for (c, child) in row.iter().enumerate() {
                        let corner = origin.offset(c as f64 * next, r as f64 * next);
                        child.draw_level(surface, style, view, corner)?;
                    }
                }
            }
            _ => {}
        }

        let sixth = inner / 6.0;
        for (r, row) in self.display_marks().iter().enumerate() {
            for (c, &mark) in row.iter().enumerate() {
                let center = origin.offset(
                    (2 * c + 1) as f64 * sixth,
                    (2 * r + 1) as f64 * sixth,
                );
                draw_mark(surface, &style.palette, &geometry, mark, center);
            }
        }
        Ok(())
    }
}

fn draw_mark<S: Surface + ?Sized>(
    surface: &mut S,
    palette: &Palette,
    geometry: &Geometry,
    mark: Mark,
    center: Point,
) {
    let radius = geometry.radius;
    match mark {
        Mark::Empty => {}
        Mark::X => {
            surface.set_stroke_color(palette.x);
            surface.set_line_width(geometry.stroke);
            surface.stroke_line(
                center.offset(-radius, -radius),
                center.offset(radius, radius),
            );
            surface.stroke_line(
                center.offset(-radius, radius),
                center.offset(radius, -radius),
            );
        }
        Mark::O => {
            surface.set_stroke_color(palette.o);
            surface.set_line_width(geometry.stroke);
            surface.stroke_circle(center, radius);
        }
    }
}

/// Render the two standard views: `board` in the outer view on `outer`, and
/// the sub-board at `inner_root` in the inner view on `inner`. Both are
/// anchored at the surface origin.
pub fn draw_views<O, I>(
    board: &RecursiveBoard,
    inner_root: &CoordPath,
    style: &RenderStyle,
    outer: &mut O,
    inner: &mut I,
) -> Result<()>
where
    O: Surface + ?Sized,
    I: Surface + ?Sized,
{
    board.draw_with(outer, style, View::Outer, Point::ORIGIN)?;
    board
        .sub_board(inner_root)?
        .draw_with(inner, style, View::Inner, Point::ORIGIN)
}
