//! Command-line definitions for the `flip7` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "flip7",
    version,
    about = "Flip 7: push-your-luck card game in the terminal"
)]
pub struct Flip7Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a hot-seat match at this terminal
    Play {
        /// Number of players (3-18); must match --names when both are given
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=18))]
        players: Option<u8>,
        /// Comma-separated player names
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,
        /// Deck seed for a reproducible match
        #[arg(long)]
        seed: Option<u64>,
        /// Total score that ends the match
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        target: Option<u32>,
        /// Append finished turns to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Print a freshly shuffled deck
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarize a turn log written by `play --log`
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
