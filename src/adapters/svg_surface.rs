//! SVG document surface.
//!
//! Each stroked path becomes one `<path>` element carrying the stroke color
//! and width in effect when it was stroked.

use std::{
    f64::consts::{PI, TAU},
    fmt::Write as _,
    path::Path,
};

use crate::{
    Error, Result,
    ports::{Color, Point, Surface},
};

/// Surface that accumulates strokes into an SVG document.
///
/// # Examples
///
/// ```
/// use fractal_tictactoe::adapters::SvgSurface;
/// use fractal_tictactoe::fractal::{RecursiveBoard, View};
/// use fractal_tictactoe::ports::Point;
///
/// let board = RecursiveBoard::new(1);
/// let mut svg = SvgSurface::new(500.0, 500.0);
/// board.draw(&mut svg, View::Inner, Point::ORIGIN)?;
/// assert!(svg.finish().starts_with("<svg"));
/// # Ok::<(), fractal_tictactoe::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Color>,
    stroke_color: Color,
    line_width: f64,
    path_data: String,
    elements: Vec<String>,
}

impl SvgSurface {
    /// Create an empty document with a white background.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: Some(Color::rgb(255, 255, 255)),
            stroke_color: Color::BLACK,
            line_width: 1.0,
            path_data: String::new(),
            elements: Vec::new(),
        }
    }

    /// Use `background` as fill, or `None` for a transparent document.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Number of `<path>` elements stroked so far.
    pub fn path_count(&self) -> usize {
        self.elements.len()
    }

    /// Render the complete document.
    pub fn finish(&self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = num(self.width),
            h = num(self.height),
        );
        if let Some(color) = self.background {
            let _ = writeln!(doc, "  <rect width=\"100%\" height=\"100%\" fill=\"{color}\"/>");
        }
        for element in &self.elements {
            let _ = writeln!(doc, "  {element}");
        }
        doc.push_str("</svg>\n");
        doc
    }

    /// Write the document to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.finish()).map_err(|source| Error::Io {
            operation: format!("write SVG to {}", path.display()),
            source,
        })
    }

    fn push_point(&mut self, command: char, point: Point) {
        if !self.path_data.is_empty() {
            self.path_data.push(' ');
        }
        let _ = write!(self.path_data, "{command}{} {}", num(point.x), num(point.y));
    }

    fn push_arc(&mut self, radius: f64, large_arc: bool, clockwise: bool, to: Point) {
        let _ = write!(
            self.path_data,
            " A{r} {r} 0 {large} {sweep} {x} {y}",
            r = num(radius),
            large = u8::from(large_arc),
            sweep = u8::from(clockwise),
            x = num(to.x),
            y = num(to.y),
        );
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn num(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center.offset(radius * angle.cos(), radius * angle.sin())
}

impl Surface for SvgSurface {
    fn begin_path(&mut self) {
        self.path_data.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.push_point('M', point);
    }

    fn line_to(&mut self, point: Point) {
        self.push_point('L', point);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        let start = point_on_circle(center, radius, start_angle);
        // Like a canvas, join an existing sub-path to the arc's start.
        let command = if self.path_data.is_empty() { 'M' } else { 'L' };
        self.push_point(command, start);

        let sweep = end_angle - start_angle;
        let clockwise = sweep >= 0.0;
        if sweep.abs() >= TAU {
            // A single SVG arc cannot close on itself; go halfway twice.
            let half = start_angle + if clockwise { PI } else { -PI };
            self.push_arc(radius, false, clockwise, point_on_circle(center, radius, half));
            self.push_arc(radius, false, clockwise, start);
        } else {
            let end = point_on_circle(center, radius, end_angle);
            self.push_arc(radius, sweep.abs() > PI, clockwise, end);
        }
    }

    fn stroke(&mut self) {
        if self.path_data.is_empty() {
            return;
        }
        self.elements.push(format!(
            "<path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>",
            self.path_data,
            self.stroke_color,
            num(self.line_width),
        ));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
}
