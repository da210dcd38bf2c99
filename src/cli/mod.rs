//! CLI infrastructure for the fractal board driver
//!
//! This module provides the command-line interface that builds a board,
//! applies plays, and renders or prints it.

pub mod commands;
pub mod output;
