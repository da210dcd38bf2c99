//! Fractal tic-tac-toe CLI
//!
//! Builds a nested board, applies plays, and either renders the outer and
//! inner views to SVG or prints the board as text.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fractal-ttt")]
#[command(version, about = "Render and play self-similar tic-tac-toe boards", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the outer and inner views to SVG files
    Render(fractal_tictactoe::cli::commands::render::RenderArgs),

    /// Print the board as text
    Show(fractal_tictactoe::cli::commands::show::ShowArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render(args) => fractal_tictactoe::cli::commands::render::execute(args),
        Commands::Show(args) => fractal_tictactoe::cli::commands::show::execute(args),
    }
}
