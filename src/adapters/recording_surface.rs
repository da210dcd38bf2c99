//! Surface that records every call, for inspecting what a render produced.

use crate::ports::{Color, Point, Surface};

/// One call made against a [`Surface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke,
    SetStrokeColor(Color),
    SetLineWidth(f64),
}

/// A straight segment that was actually stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokedLine {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub width: f64,
}

/// An arc that was actually stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokedArc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color,
    pub width: f64,
}

impl StrokedArc {
    pub fn is_full_circle(&self) -> bool {
        (self.end_angle - self.start_angle).abs() >= std::f64::consts::TAU - 1e-9
    }
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Line(Point, Point),
    Arc(Point, f64, f64, f64),
}

/// Records calls in order and resolves them into stroked lines and arcs.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    stroke_color: Color,
    line_width: f64,
    cursor: Option<Point>,
    pending: Vec<Pending>,
    lines: Vec<StrokedLine>,
    arcs: Vec<StrokedArc>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            stroke_color: Color::BLACK,
            line_width: 1.0,
            cursor: None,
            pending: Vec::new(),
            lines: Vec::new(),
            arcs: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every stroked straight segment, in stroke order.
    pub fn line_segments(&self) -> &[StrokedLine] {
        &self.lines
    }

    /// Every stroked arc, in stroke order.
    pub fn arcs(&self) -> &[StrokedArc] {
        &self.arcs
    }

    /// Stroked arcs that close into a full circle.
    pub fn circles(&self) -> Vec<StrokedArc> {
        self.arcs.iter().copied().filter(StrokedArc::is_full_circle).collect()
    }

    /// Stroked lines drawn in `color`.
    pub fn lines_in(&self, color: Color) -> Vec<StrokedLine> {
        self.lines.iter().copied().filter(|l| l.color == color).collect()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
        self.pending.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
        self.cursor = Some(point);
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
        if let Some(from) = self.cursor {
            self.pending.push(Pending::Line(from, point));
        }
        self.cursor = Some(point);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self.pending
            .push(Pending::Arc(center, radius, start_angle, end_angle));
        self.cursor = Some(center.offset(radius * end_angle.cos(), radius * end_angle.sin()));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
        let (color, width) = (self.stroke_color, self.line_width);
        for pending in &self.pending {
            match *pending {
                Pending::Line(from, to) => self.lines.push(StrokedLine {
                    from,
                    to,
                    color,
                    width,
                }),
                Pending::Arc(center, radius, start_angle, end_angle) => {
                    self.arcs.push(StrokedArc {
                        center,
                        radius,
                        start_angle,
                        end_angle,
                        color,
                        width,
                    })
                }
            }
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
        self.line_width = width;
    }
}
