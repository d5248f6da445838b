//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em table simulator and hand evaluator"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands between built-in strategies
    Sim {
        /// Maximum number of hands to play
        #[arg(long)]
        hands: u64,
        /// Seats at the table (2-10); overrides HOLDEM_PLAYERS
        #[arg(long)]
        players: Option<usize>,
        /// Deck seed; overrides HOLDEM_SEED
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy per seat, repeated or comma separated; cycles over the seats
        #[arg(long = "ai", value_delimiter = ',')]
        ai: Vec<String>,
        /// Append hand histories to this JSONL file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Only print the final summary
        #[arg(long)]
        quiet: bool,
    },
    /// Evaluate seven cards, e.g. `holdem rank As Ks Qs Js Ts 2d 3c`
    Rank {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
