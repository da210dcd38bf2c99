//! Configuration for building and rendering a board.

use std::path::Path;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    fractal::{CoordPath, GeometryTable, Palette, Play, RecursiveBoard, RenderStyle},
};

/// Deepest board the driver will build (3^12 leaf cells).
pub const MAX_DEPTH: usize = 6;

/// Configuration for building a board and rendering its two views.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
///
/// # Examples
///
/// ```
/// use fractal_tictactoe::app::RenderConfig;
///
/// let config = RenderConfig::new(3)
///     .with_seed(42)
///     .with_inner_root("1,1".parse()?);
/// config.validate()?;
/// assert_eq!(config.style().geometry.len(), 4);
/// # Ok::<(), fractal_tictactoe::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Nesting depth of the root board
    pub depth: usize,
    /// Seed for the placeholder winners; `None` uses the thread RNG
    pub seed: Option<u64>,
    /// Sub-board shown in the inner view
    pub inner_root: CoordPath,
    /// Stroke colors
    pub palette: Palette,
    /// Geometry rows; extended automatically to cover `depth`
    pub geometry: GeometryTable,
}

impl RenderConfig {
    /// Configuration for a board of `depth` with every other field defaulted.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_inner_root(mut self, inner_root: CoordPath) -> Self {
        self.inner_root = inner_root;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_geometry(mut self, geometry: GeometryTable) -> Self {
        self.geometry = geometry;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        debug!(path = %path.display(), depth = config.depth, "loaded config");
        Ok(config)
    }

    /// Check the depth and inner root against each other.
    pub fn validate(&self) -> Result<()> {
        if self.depth > MAX_DEPTH {
            return Err(Error::InvalidConfiguration {
                message: format!("depth {} exceeds the maximum of {MAX_DEPTH}", self.depth),
            });
        }
        self.inner_root.ensure_in_range()?;
        if self.inner_root.len() > self.depth {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "inner root '{}' has {} steps but the board is only {} deep",
                    self.inner_root,
                    self.inner_root.len(),
                    self.depth
                ),
            });
        }
        Ok(())
    }

    /// Validate, and additionally require a board that has an outer view.
    pub fn ensure_renderable(&self) -> Result<()> {
        self.validate()?;
        if self.depth == 0 {
            return Err(Error::InvalidConfiguration {
                message: "a depth-0 board has no outer view; use depth 1 or more".to_string(),
            });
        }
        Ok(())
    }

    /// Render style whose geometry covers every level this depth can reach.
    pub fn style(&self) -> RenderStyle {
        RenderStyle::new(self.geometry.clone(), self.palette).covering(self.depth)
    }

    /// Build the board, seeded if a seed is configured.
    pub fn build_board(&self) -> RecursiveBoard {
        match self.seed {
            Some(seed) => RecursiveBoard::with_rng(self.depth, &mut StdRng::seed_from_u64(seed)),
            None => RecursiveBoard::new(self.depth),
        }
    }

    /// Build the board and apply `plays` in order.
    pub fn build_board_with_plays(&self, plays: &[Play]) -> Result<RecursiveBoard> {
        let mut board = self.build_board();
        for play in plays {
            board.play(play.player, &play.path)?;
        }
        Ok(board)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            seed: None,
            inner_root: CoordPath::from([(0, 0)]),
            palette: Palette::default(),
            geometry: GeometryTable::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{Mark, ports::Color};

    #[test]
    fn test_defaults_match_standard_layout() {
        let config = RenderConfig::default();
        assert_eq!(config.depth, 2);
        assert_eq!(config.inner_root.steps(), &[(0, 0)]);
        config.ensure_renderable().unwrap();
    }

    #[test]
    fn test_inner_root_deeper_than_board_is_rejected() {
        let config = RenderConfig::new(1).with_inner_root("0,0/1,1".parse().unwrap());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("only 1 deep"));
    }

    #[test]
    fn test_depth_limits() {
        assert!(RenderConfig::new(MAX_DEPTH + 1).validate().is_err());
        let shallow = RenderConfig::new(0).with_inner_root(CoordPath::root());
        shallow.validate().unwrap();
        assert!(shallow.ensure_renderable().is_err());
    }

    #[test]
    fn test_seeded_builds_are_identical() {
        let config = RenderConfig::new(2).with_seed(9);
        assert_eq!(config.build_board(), config.build_board());
    }

    #[test]
    fn test_build_with_plays() {
        let config = RenderConfig::new(1).with_seed(1);
        let plays: Vec<Play> = vec!["X@0,0/1,1".parse().unwrap(), "O@2,2/0,0".parse().unwrap()];
        let board = config.build_board_with_plays(&plays).unwrap();
        assert_eq!(board.mark_at(&"0,0/1,1".parse().unwrap()).unwrap(), Mark::X);
        assert_eq!(board.occupied_count(), 2);

        let short: Vec<Play> = vec!["X@0,0".parse().unwrap()];
        assert!(config.build_board_with_plays(&short).is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"depth": 3, "seed": 5, "inner_root": "2,2/1,0", "palette": {{"grid": {{"r": 0, "g": 0, "b": 0}}, "x": {{"r": 0, "g": 128, "b": 0}}, "o": {{"r": 0, "g": 0, "b": 255}}}}}}"#
        )
        .unwrap();
        let config = RenderConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.depth, 3);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.inner_root.len(), 2);
        assert_eq!(config.palette.x, Color::rgb(0, 128, 0));
        assert_eq!(config.geometry, GeometryTable::standard());
        assert_eq!(config.style().geometry.len(), 4);
    }

    #[test]
    fn test_load_rejects_unknown_keys_and_bad_geometry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"depht": 3}}"#).unwrap();
        assert!(matches!(
            RenderConfig::from_json_file(file.path()),
            Err(Error::Serialization(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"geometry": []}}"#).unwrap();
        assert!(RenderConfig::from_json_file(file.path()).is_err());
    }

    #[test]
    fn test_saved_config_reloads_exactly() {
        let config = RenderConfig::new(3).with_seed(9);
        let config = RenderConfig {
            geometry: config.style().geometry,
            ..config
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let reloaded = RenderConfig::from_json_file(file.path()).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(
            reloaded.geometry.get(0).unwrap().radius,
            10.0 * std::f64::consts::SQRT_2
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RenderConfig::from_json_file(Path::new("/nonexistent/render.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
