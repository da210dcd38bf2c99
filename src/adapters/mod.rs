//! Adapters implementing domain ports.
//!
//! Adapters depend on the ports module, never the other way around.

pub mod recording_surface;
pub mod svg_surface;

pub use recording_surface::{DrawCommand, RecordingSurface, StrokedArc, StrokedLine};
pub use svg_surface::SvgSurface;
