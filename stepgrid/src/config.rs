//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use stepgrid_search::SearchLimits;

/// Run BFS / IDS / A* queries over a stepped grid, one query per line.
///
/// Each line reads `<BFS|IDS|A*> <targetX> <targetY> <step0> <step1> ...`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "stepgrid", version, about)]
pub struct Config {
    /// Read queries from this file instead of standard input.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Abort a query once its search tree would exceed this many nodes.
    #[arg(long, value_name = "N")]
    pub max_nodes: Option<usize>,

    /// Give up on an IDS query after this many deepening passes.
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,

    /// Do not report process memory usage when a target is found.
    #[arg(long)]
    pub no_memory: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_nodes: self.max_nodes,
            max_iterations: self.max_iterations,
        }
    }

    /// Default `env_logger` filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
