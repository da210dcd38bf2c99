//! Error types for the fractal board crate

use thiserror::Error;

/// Main error type for the fractal board crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid coordinates: expected {expected} row-col pairs, got {got}")]
    InvalidCoordinates { expected: usize, got: usize },

    #[error("coordinate ({row}, {col}) at level {level} is out of bounds (must be 0-2)")]
    CoordinateOutOfRange { level: usize, row: usize, col: usize },

    #[error("invalid coordinate path '{input}': {reason}")]
    InvalidCoordinateSyntax { input: String, reason: String },

    #[error("invalid player '{player}' in '{input}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, input: String },

    #[error("no geometry for level {level}")]
    MissingGeometry { level: isize },

    #[error("invalid geometry: {message}")]
    InvalidGeometry { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
