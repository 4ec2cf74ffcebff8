//! Word Ladder Solver - CLI
//!
//! Finds the shortest word ladder between two words using a pruned
//! backtracking search over a dictionary file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use word_ladder::{
    commands::{SolveConfig, solve_ladder},
    output::print_solve_report,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word-ladder solver (one letter changes per step)",
    version,
    author
)]
struct Cli {
    /// Start word of the ladder
    start: String,

    /// End word of the ladder (must be in the wordlist)
    end: String,

    /// Path to the wordlist file, one word per line
    #[arg(short = 'w', long)]
    wordlist: PathBuf,

    /// Maximum chain length, endpoints included
    #[arg(short = 'm', long, default_value = "20")]
    max_length: usize,

    /// Search time budget in seconds
    #[arg(short = 't', long, default_value = "60")]
    timeout: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.max_length == 0 {
        anyhow::bail!("Maximum chain length must be greater than zero");
    }

    if cli.timeout == 0 {
        anyhow::bail!("Timeout must be greater than zero");
    }

    let mut config = SolveConfig::new(cli.start, cli.end, cli.wordlist);
    config.max_chain_length = cli.max_length;
    config.timeout = Duration::from_secs(cli.timeout);

    let report = solve_ladder(&config).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_report(&report);
    Ok(())
}
