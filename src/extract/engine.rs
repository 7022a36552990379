//! Scoring loops, filtering, and ranking for the batch operations.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::atomic;

use rayon::prelude::*;
use tracing::debug;

use crate::extract::{ExtractError, ExtractMatch, ExtractOptions};
use crate::preprocess::default_process;
use crate::scoring::{round_score, Scorer};
use crate::utils::validation::validate_cutoff;

/// Candidate count at which scoring moves onto the rayon thread pool.
const PARALLEL_THRESHOLD: usize = 100;

fn prepared(s: &str, preprocess: bool) -> Cow<'_, str> {
    if preprocess {
        Cow::Owned(default_process(s))
    } else {
        Cow::Borrowed(s)
    }
}

fn check_cancelled(options: &ExtractOptions) -> Result<(), ExtractError> {
    if let Some(flag) = &options.cancel {
        if flag.load(atomic::Ordering::Relaxed) {
            return Err(ExtractError::Cancelled);
        }
    }
    Ok(())
}

/// Score `query` against every candidate.
///
/// Results below the cutoff are dropped. With a limit the survivors are
/// ranked by descending score (ties keep candidate order); without one
/// they come back in candidate order. An empty candidate set yields an
/// empty result.
///
/// # Errors
///
/// Returns [`ExtractError::Validation`] for a cutoff outside
/// `0.0..=100.0`, and [`ExtractError::Cancelled`] when the options carry
/// a cancellation flag that was raised mid-run.
pub fn extract<'a, S>(
    query: &str,
    candidates: &'a [S],
    scorer: Scorer,
    options: &ExtractOptions,
) -> Result<Vec<ExtractMatch<'a>>, ExtractError>
where
    S: AsRef<str> + Sync,
{
    if let Some(cutoff) = options.cutoff {
        validate_cutoff(cutoff)?;
    }
    if candidates.is_empty() {
        debug!("extract called with an empty candidate set");
        return Ok(Vec::new());
    }

    let query = prepared(query, options.preprocess);
    let score_one = |(index, candidate): (usize, &'a S)| -> Result<ExtractMatch<'a>, ExtractError> {
        check_cancelled(options)?;
        let candidate = candidate.as_ref();
        let against = prepared(candidate, options.preprocess);
        Ok(ExtractMatch {
            candidate,
            score: round_score(scorer.compute(&query, &against)),
            index,
        })
    };

    let scored: Vec<ExtractMatch<'a>> = if candidates.len() >= PARALLEL_THRESHOLD {
        debug!("scoring {} candidates in parallel", candidates.len());
        candidates
            .par_iter()
            .enumerate()
            .map(score_one)
            .collect::<Result<_, _>>()?
    } else {
        candidates
            .iter()
            .enumerate()
            .map(score_one)
            .collect::<Result<_, _>>()?
    };

    let total = scored.len();
    let mut results: Vec<ExtractMatch<'a>> = match options.cutoff {
        Some(cutoff) => scored.into_iter().filter(|m| m.score >= cutoff).collect(),
        None => scored,
    };
    if results.is_empty() {
        debug!("all {} candidates fell below the cutoff", total);
    }

    if let Some(limit) = options.limit {
        // Stable sort: equal scores keep their candidate order.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(limit);
    }
    Ok(results)
}

/// The single best candidate, or `None` when every candidate falls below
/// the cutoff. Ties go to the earliest candidate.
///
/// # Errors
///
/// Same conditions as [`extract`].
pub fn extract_one<'a, S>(
    query: &str,
    candidates: &'a [S],
    scorer: Scorer,
    options: &ExtractOptions,
) -> Result<Option<ExtractMatch<'a>>, ExtractError>
where
    S: AsRef<str> + Sync,
{
    let options = ExtractOptions {
        limit: Some(1),
        ..options.clone()
    };
    Ok(extract(query, candidates, scorer, &options)?.into_iter().next())
}

/// Pairwise scores of every query against every candidate.
///
/// Row `i` holds the scores of `queries[i]`; a cutoff collapses low cells
/// to 0 rather than dropping them, keeping the matrix rectangular. The
/// `limit` option is ignored here. Preprocessing runs once per string, not
/// once per pair, and cancellation is checked between rows.
///
/// # Errors
///
/// Same conditions as [`extract`].
pub fn score_matrix<S, T>(
    queries: &[S],
    candidates: &[T],
    scorer: Scorer,
    options: &ExtractOptions,
) -> Result<Vec<Vec<f64>>, ExtractError>
where
    S: AsRef<str> + Sync,
    T: AsRef<str> + Sync,
{
    if let Some(cutoff) = options.cutoff {
        validate_cutoff(cutoff)?;
    }

    let queries: Vec<Cow<'_, str>> = queries
        .iter()
        .map(|q| prepared(q.as_ref(), options.preprocess))
        .collect();
    let candidates: Vec<Cow<'_, str>> = candidates
        .iter()
        .map(|c| prepared(c.as_ref(), options.preprocess))
        .collect();

    let score_row = |query: &Cow<'_, str>| -> Result<Vec<f64>, ExtractError> {
        check_cancelled(options)?;
        Ok(candidates
            .iter()
            .map(|candidate| {
                let score = round_score(scorer.compute(query, candidate));
                match options.cutoff {
                    Some(cutoff) if score < cutoff => 0.0,
                    _ => score,
                }
            })
            .collect())
    };

    if queries.len().saturating_mul(candidates.len()) >= PARALLEL_THRESHOLD {
        queries.par_iter().map(score_row).collect()
    } else {
        queries.iter().map(score_row).collect()
    }
}
