//! Application layer: configuration shared by the CLI and embedding drivers.

pub mod config;

pub use config::{MAX_DEPTH, RenderConfig};
