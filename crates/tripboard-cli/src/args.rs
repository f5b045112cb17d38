use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tripboard")]
#[command(about = "Render, sort, filter and edit an itinerary board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./tripboard.toml, or $TRIPBOARD_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file with the point collection; built-in sample board when absent
    #[arg(long, global = true)]
    pub points: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the derived list once and exit
    Show {
        /// Sort tag: day, event, time, price, offers (unknown tags fall back to day)
        #[arg(long)]
        sort: Option<String>,

        /// Filter tag: everything, past, present, future (unknown tags fall back to everything)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Open the interactive board
    Board {
        #[arg(long)]
        sort: Option<String>,

        #[arg(long)]
        filter: Option<String>,
    },
}
