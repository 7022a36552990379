//! Distance command - compute an edit distance between two strings.
//!
//! Prints the raw distance and, when no bound is given, the normalized
//! similarity for the chosen metric.

use clap::Args;

use crate::cli::OutputFormat;
use crate::distance::{self, Metric};

/// Arguments for the distance command
#[derive(Args)]
pub struct DistanceArgs {
    /// First string
    #[arg(required = true)]
    pub a: String,

    /// Second string
    #[arg(required = true)]
    pub b: String,

    /// Distance metric to use
    #[arg(long, default_value = "levenshtein")]
    pub metric: Metric,

    /// Stop early once the distance is known to exceed this bound.
    /// The distance is reported as "> BOUND" when that happens.
    #[arg(long)]
    pub max_distance: Option<usize>,
}

/// Execute the distance command
///
/// # Errors
///
/// Returns an error if the metric rejects the inputs (Hamming requires
/// equal lengths).
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: DistanceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        eprintln!(
            "Computing {} distance: {} chars vs {} chars",
            args.metric.name(),
            args.a.chars().count(),
            args.b.chars().count(),
        );
    }

    let result = distance::distance(&args.a, &args.b, args.metric, args.max_distance)?;

    // The similarity is only meaningful from a full computation, so skip it
    // when a bound was requested.
    let similarity = if args.max_distance.is_none() {
        Some(distance::similarity(&args.a, &args.b, args.metric)?)
    } else {
        None
    };

    match format {
        OutputFormat::Text => print_text(&args, result, similarity),
        OutputFormat::Json => print_json(&args, result, similarity)?,
        OutputFormat::Tsv => print_tsv(&args, result, similarity),
    }

    Ok(())
}

/// Render the distance for display, using "> BOUND" when the bound was hit
fn format_distance(result: Option<usize>, bound: Option<usize>) -> String {
    match (result, bound) {
        (Some(d), _) => d.to_string(),
        (None, Some(b)) => format!("> {b}"),
        (None, None) => String::from("-"),
    }
}

fn print_text(args: &DistanceArgs, result: Option<usize>, similarity: Option<f64>) {
    println!(
        "\nDistance ({}): {:?} vs {:?}",
        args.metric.name(),
        args.a,
        args.b
    );

    println!(
        "\n   Distance: {}",
        format_distance(result, args.max_distance)
    );
    if let Some(sim) = similarity {
        println!("   Similarity: {:.1}%", sim * 100.0);
    }
}

fn print_json(
    args: &DistanceArgs,
    result: Option<usize>,
    similarity: Option<f64>,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "a": args.a,
        "b": args.b,
        "metric": args.metric.name(),
        "max_distance": args.max_distance,
        "distance": result,
        "similarity": similarity,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(args: &DistanceArgs, result: Option<usize>, similarity: Option<f64>) {
    println!("a\tb\tmetric\tdistance\tsimilarity");

    let sim = similarity.map_or_else(|| String::from("-"), |s| format!("{s:.4}"));
    println!(
        "{}\t{}\t{}\t{}\t{}",
        args.a,
        args.b,
        args.metric.name(),
        format_distance(result, args.max_distance),
        sim,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance_plain() {
        assert_eq!(format_distance(Some(3), None), "3");
        assert_eq!(format_distance(Some(0), Some(2)), "0");
    }

    #[test]
    fn test_format_distance_exceeded_bound() {
        assert_eq!(format_distance(None, Some(2)), "> 2");
    }
}
