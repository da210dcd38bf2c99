//! Render command - Write the outer and inner views as SVG files

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use super::BoardArgs;
use crate::{
    adapters::SvgSurface,
    cli::output::{format_number, print_kv, print_section},
    fractal::{View, draw_views},
};

#[derive(Parser, Debug)]
#[command(about = "Render the outer and inner views to SVG")]
pub struct RenderArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Output file for the outer (full-board) view
    #[arg(long, default_value = "outer.svg")]
    pub outer_out: PathBuf,

    /// Output file for the inner (sub-board) view
    #[arg(long, default_value = "inner.svg")]
    pub inner_out: PathBuf,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let config = args.board.resolve()?;
    config.ensure_renderable()?;
    let style = config.style();
    let board = args.board.build(&config)?;

    let inner_board = board.sub_board(&config.inner_root)?;
    let outer_extent = style.extent(board.depth(), View::Outer)?;
    let inner_extent = style.extent(inner_board.depth(), View::Inner)?;

    let mut outer = SvgSurface::new(outer_extent, outer_extent);
    let mut inner = SvgSurface::new(inner_extent, inner_extent);
    draw_views(&board, &config.inner_root, &style, &mut outer, &mut inner)
        .context("rendering board views")?;

    outer
        .write_to(&args.outer_out)
        .context("writing outer view")?;
    inner
        .write_to(&args.inner_out)
        .context("writing inner view")?;
    info!(
        outer = %args.outer_out.display(),
        inner = %args.inner_out.display(),
        "wrote board views"
    );

    print_section("Rendered fractal board");
    print_kv("Depth", &board.depth().to_string());
    print_kv("Leaf boards", &format_number(board.leaf_count()));
    print_kv("Marks placed", &board.occupied_count().to_string());
    print_kv(
        "Outer view",
        &format!(
            "{} ({} px, {} paths)",
            args.outer_out.display(),
            outer_extent,
            outer.path_count()
        ),
    );
    let root_label = if config.inner_root.is_empty() {
        "root".to_string()
    } else {
        config.inner_root.to_string()
    };
    print_kv(
        "Inner view",
        &format!(
            "{} ({}, {} px, {} paths)",
            args.inner_out.display(),
            root_label,
            inner_extent,
            inner.path_count()
        ),
    );
    Ok(())
}
