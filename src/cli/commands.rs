//! CLI subcommands and the board options they share

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    app::RenderConfig,
    fractal::{CoordPath, Play, RecursiveBoard},
};

pub mod render;
pub mod show;

/// Options that describe which board to build
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Nesting depth of the root board (overrides the config file)
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Random seed for the placeholder winners
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sub-board shown in the inner view (format: row,col/row,col...)
    #[arg(long)]
    pub inner: Option<CoordPath>,

    /// Place a mark before rendering (format: X@row,col/row,col...); repeatable
    #[arg(long = "play")]
    pub plays: Vec<Play>,

    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl BoardArgs {
    /// Merge the config file (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => RenderConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        match &self.inner {
            Some(inner) => config.inner_root = inner.clone(),
            // A depth-0 board has no sub-boards, so fall back to the root.
            None if config.depth == 0 => config.inner_root = CoordPath::root(),
            None => {}
        }
        config.validate().context("invalid board configuration")?;
        Ok(config)
    }

    /// Build the configured board and apply every `--play` in order.
    pub fn build(&self, config: &RenderConfig) -> Result<RecursiveBoard> {
        config
            .build_board_with_plays(&self.plays)
            .context("applying --play moves")
    }
}
