//! Show command - Print a board as text

use anyhow::Result;
use clap::Parser;

use super::BoardArgs;
use crate::cli::output::{format_mark_grid, format_number, print_kv, print_section, print_subsection};

#[derive(Parser, Debug)]
#[command(about = "Print the board and its placeholder winners as text")]
pub struct ShowArgs {
    #[command(flatten)]
    pub board: BoardArgs,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let config = args.board.resolve()?;
    let board = args.board.build(&config)?;

    print_section(&format!("Depth-{} board", board.depth()));
    print_kv("Leaf boards", &format_number(board.leaf_count()));
    print_kv("Marks placed", &board.occupied_count().to_string());
    print_kv("Root winner", &board.winner().to_string());

    print_subsection("Cells");
    print!("{board}");

    // Placeholders drawn at construction; plays never change them.
    if let Some(grid) = board.winner_grid() {
        print_subsection("Sub-board winners (random placeholders)");
        for row in format_mark_grid(&grid) {
            println!("  {row}");
        }
    }
    Ok(())
}
