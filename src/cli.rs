use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Weekly shopping planner: nets your weekly menu against the pantry.
#[derive(Parser, Debug)]
#[command(name = "shopping_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON seed file with starting inventory and menu (read only).
    #[arg(short, long, global = true)]
    pub seed: Option<PathBuf>,

    /// Start with an empty menu and inventory instead of the sample week.
    #[arg(long, global = true, conflicts_with = "seed")]
    pub empty: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu loop (default).
    Interactive,

    /// Print the weekly menu.
    Menu,

    /// Print the current inventory.
    Inventory,

    /// Print the shopping list for the week.
    Shopping {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Skip the per-recipe breakdown (text format only).
        #[arg(long)]
        no_breakdown: bool,
    },

    /// Compare one day's recipe against the inventory.
    Detail {
        /// Day number as listed by `menu` (1-based).
        day: usize,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}
