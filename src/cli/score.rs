//! Score command - compute a similarity score between two strings.
//!
//! Scores are on the 0-100 scale, rounded to one decimal place. With
//! `--cutoff`, scores below the cutoff are reported as 0.

use clap::Args;

use crate::cli::OutputFormat;
use crate::scoring::{self, Scorer};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// First string
    #[arg(required = true)]
    pub a: String,

    /// Second string
    #[arg(required = true)]
    pub b: String,

    /// Scorer to use
    #[arg(long, default_value = "ratio")]
    pub scorer: Scorer,

    /// Preprocess both strings before scoring (lowercase, replace
    /// non-alphanumeric characters, collapse whitespace)
    #[arg(long)]
    pub preprocess: bool,

    /// Report scores below this cutoff as 0 (range 0-100)
    #[arg(long)]
    pub cutoff: Option<f64>,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if the cutoff is outside the valid range.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        eprintln!(
            "Scoring with {} (preprocess: {})",
            args.scorer.name(),
            args.preprocess,
        );
    }

    let score = scoring::score(&args.a, &args.b, args.scorer, args.preprocess, args.cutoff)?;

    match format {
        OutputFormat::Text => print_text(&args, score),
        OutputFormat::Json => print_json(&args, score)?,
        OutputFormat::Tsv => print_tsv(&args, score),
    }

    Ok(())
}

fn print_text(args: &ScoreArgs, score: f64) {
    println!(
        "\nScore ({}): {:?} vs {:?}",
        args.scorer.name(),
        args.a,
        args.b
    );

    println!("\n   Score: {score:.1}");
    if let Some(cutoff) = args.cutoff {
        println!("   Cutoff: {cutoff:.1}");
    }
}

fn print_json(args: &ScoreArgs, score: f64) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "a": args.a,
        "b": args.b,
        "scorer": args.scorer.name(),
        "preprocess": args.preprocess,
        "cutoff": args.cutoff,
        "score": score,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(args: &ScoreArgs, score: f64) {
    println!("a\tb\tscorer\tscore");
    println!(
        "{}\t{}\t{}\t{score:.1}",
        args.a,
        args.b,
        args.scorer.name(),
    );
}
