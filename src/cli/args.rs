//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pagerank::PageRankConfig;

/// wordgraph - query the word-adjacency graph of a text file
#[derive(Parser, Debug, Clone)]
#[command(name = "wordgraph")]
#[command(about = "Build a directed word graph from a text file and query it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct WordGraphArgs {
    /// Text file to build the graph from
    pub file: PathBuf,

    /// Seed for bridge selection and random walks (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory that random walks are saved into
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// PageRank damping factor
    #[arg(long, default_value_t = 0.85)]
    pub damping: f64,

    /// PageRank sweeps
    #[arg(long, default_value_t = 100)]
    pub iterations: usize,

    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Run one query and exit; without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl WordGraphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose + 1
        }
    }

    pub fn pagerank_config(&self) -> PageRankConfig {
        PageRankConfig {
            damping: self.damping,
            max_iterations: self.iterations,
            ..PageRankConfig::default()
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the adjacency list with edge weights
    Show,

    /// Query bridge words between two words
    Bridge { word1: String, word2: String },

    /// Insert bridge words into a text
    Generate { text: String },

    /// Shortest path between two words, or from one word to every other word
    Path { word1: String, word2: Option<String> },

    /// PageRank of a word
    Rank { word: String },

    /// Random walk, optionally saved to a file in --out-dir
    Walk {
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Highest-ranked words
    Top {
        #[arg(default_value_t = 10)]
        k: usize,
    },
}
