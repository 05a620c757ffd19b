use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::DEFAULT_BATCH_SIZE;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Worker threads for the column scan (defaults to one per core)
    #[arg(long, global = true)]
    pub threads: Option<usize>,
    /// Fill table rows on a single thread
    #[arg(long, global = true)]
    pub sequential: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a batch of targets against a sorted sequence
    Solve {
        /// File with the sorted sequence, one integer per line
        sequence: PathBuf,
        /// File with target sums, one integer per line
        targets: PathBuf,
        /// Number of targets to evaluate
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch: usize,
        /// Print the reachability table after each successful check
        #[arg(long)]
        show_table: bool,
        /// Write batch results as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print the sum range and table size for a sequence
    Range {
        /// File with the sorted sequence, one integer per line
        sequence: PathBuf,
    },
    /// Query targets interactively
    Repl {
        /// File with the sorted sequence, one integer per line
        sequence: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
