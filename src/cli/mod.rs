//! Command-line interface for fuzzmatch.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **distance**: Compute an edit distance between two strings
//! - **score**: Compute a normalized similarity score between two strings
//! - **extract**: Rank a list of candidates against a query
//!
//! ## Usage
//!
//! ```text
//! # Plain ratio between two strings
//! fuzzmatch score "this is a test" "this is a test!"
//!
//! # Weighted ratio with preprocessing
//! fuzzmatch score "NEW YORK Mets" "new york mets" --scorer wratio --preprocess
//!
//! # Levenshtein distance with a bound
//! fuzzmatch distance kitten sitting --max-distance 2
//!
//! # Rank candidates from a file, keep the best three
//! fuzzmatch extract "new york jets" --candidates-file teams.txt --limit 3
//!
//! # Pipe candidates on stdin
//! cat teams.txt | fuzzmatch extract "new york jets" --candidates-file -
//!
//! # JSON output for scripting
//! fuzzmatch score kitten sitting --format json
//! ```

use clap::{Parser, Subcommand};

pub mod distance;
pub mod extract;
pub mod score;

#[derive(Parser)]
#[command(name = "fuzzmatch")]
#[command(version)]
#[command(about = "Fuzzy string matching: edit distances, scorers, and candidate ranking")]
#[command(
    long_about = "fuzzmatch computes edit distances and normalized similarity scores between strings, and ranks lists of candidates against a query.\n\nIt provides:\n- Levenshtein, Indel, and Hamming distances, optionally bounded\n- Similarity scorers (ratio, partial_ratio, token_sort_ratio, token_set_ratio, wratio, ...)\n- Batch extraction with score cutoffs, result limits, and parallel scoring"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an edit distance between two strings
    Distance(distance::DistanceArgs),

    /// Compute a similarity score between two strings
    Score(score::ScoreArgs),

    /// Rank candidates against a query
    Extract(extract::ExtractArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
