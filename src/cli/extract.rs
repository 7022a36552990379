//! Extract command - rank a list of candidates against a query.
//!
//! Candidates come from positional arguments, from a file with one
//! candidate per line, or from stdin via `--candidates-file -`. Positional
//! candidates are scored before the ones read from a file.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::extract::{self, ExtractMatch, ExtractOptions};
use crate::scoring::Scorer;

/// Arguments for the extract command
#[derive(Args)]
pub struct ExtractArgs {
    /// Query string to match candidates against
    #[arg(required = true)]
    pub query: String,

    /// Candidate strings
    pub candidates: Vec<String>,

    /// Read candidates from a file, one per line (use '-' for stdin)
    /// Blank lines are skipped
    #[arg(long)]
    pub candidates_file: Option<PathBuf>,

    /// Scorer used for ranking
    #[arg(long, default_value = "wratio")]
    pub scorer: Scorer,

    /// Drop candidates scoring below this cutoff (range 0-100)
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Keep only the best N matches, ranked by descending score
    #[arg(long)]
    pub limit: Option<usize>,

    /// Preprocess the query and every candidate before scoring
    #[arg(long)]
    pub preprocess: bool,
}

/// Execute the extract command
///
/// # Errors
///
/// Returns an error if the candidates file cannot be read or the cutoff
/// is outside the valid range.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let candidates = collect_candidates(&args)?;

    if verbose {
        eprintln!(
            "Ranking {} candidates against {:?} with {}",
            candidates.len(),
            args.query,
            args.scorer.name(),
        );
    }

    let options = ExtractOptions {
        cutoff: args.cutoff,
        limit: args.limit,
        preprocess: args.preprocess,
        ..ExtractOptions::default()
    };
    let matches = extract::extract(&args.query, &candidates, args.scorer, &options)?;

    if matches.is_empty() {
        eprintln!("No candidates matched.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text(&args, &matches, candidates.len()),
        OutputFormat::Json => print_json(&args, &matches, candidates.len())?,
        OutputFormat::Tsv => print_tsv(&matches),
    }

    Ok(())
}

/// Gather candidates from the positional arguments and the optional file
fn collect_candidates(args: &ExtractArgs) -> anyhow::Result<Vec<String>> {
    let mut candidates = args.candidates.clone();
    if let Some(path) = &args.candidates_file {
        candidates.extend(read_candidates(path)?);
    }
    Ok(candidates)
}

fn read_candidates(path: &Path) -> anyhow::Result<Vec<String>> {
    use std::io::{self, Read};

    // Handle stdin
    let content = if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn print_text(args: &ExtractArgs, matches: &[ExtractMatch<'_>], total: usize) {
    println!(
        "\nExtract ({}): {:?} against {} candidates",
        args.scorer.name(),
        args.query,
        total,
    );
    println!();

    for (i, m) in matches.iter().enumerate() {
        println!("#{} {:?} ({:.1})", i + 1, m.candidate, m.score);
    }
}

fn print_json(
    args: &ExtractArgs,
    matches: &[ExtractMatch<'_>],
    total: usize,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "query": args.query,
        "scorer": args.scorer.name(),
        "candidates": total,
        "matches": matches,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(matches: &[ExtractMatch<'_>]) {
    println!("rank\tindex\tcandidate\tscore");
    for (i, m) in matches.iter().enumerate() {
        println!("{}\t{}\t{}\t{:.1}", i + 1, m.index, m.candidate, m.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_candidates(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn args_with_file(path: PathBuf) -> ExtractArgs {
        ExtractArgs {
            query: "new york jets".to_string(),
            candidates: Vec::new(),
            candidates_file: Some(path),
            scorer: Scorer::WRatio,
            cutoff: None,
            limit: None,
            preprocess: false,
        }
    }

    #[test]
    fn test_read_candidates_skips_blank_lines() {
        let file = create_temp_candidates(&["new york giants", "", "   ", "dallas cowboys"]);

        let candidates = read_candidates(file.path()).unwrap();
        assert_eq!(candidates, vec!["new york giants", "dallas cowboys"]);
    }

    #[test]
    fn test_read_candidates_missing_file() {
        let result = read_candidates(Path::new("/nonexistent/candidates.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_collect_candidates_positional_before_file() {
        let file = create_temp_candidates(&["from file"]);
        let mut args = args_with_file(file.path().to_path_buf());
        args.candidates = vec!["positional".to_string()];

        let candidates = collect_candidates(&args).unwrap();
        assert_eq!(candidates, vec!["positional", "from file"]);
    }

    #[test]
    fn test_collect_candidates_without_file() {
        let args = ExtractArgs {
            query: "q".to_string(),
            candidates: vec!["a".to_string(), "b".to_string()],
            candidates_file: None,
            scorer: Scorer::WRatio,
            cutoff: None,
            limit: None,
            preprocess: false,
        };

        let candidates = collect_candidates(&args).unwrap();
        assert_eq!(candidates, vec!["a", "b"]);
    }
}
