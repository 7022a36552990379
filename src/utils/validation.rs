//! Centralized validation for caller-supplied scoring parameters.

use thiserror::Error;

/// Lowest accepted score cutoff
pub const MIN_CUTOFF: f64 = 0.0;

/// Highest accepted score cutoff, matching the percentage scorer range
pub const MAX_CUTOFF: f64 = 100.0;

/// Parameter validation error types
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("score cutoff {0} is outside the valid range {MIN_CUTOFF}..={MAX_CUTOFF}")]
    InvalidCutoff(f64),
}

/// Validate that a score cutoff lies within the scorer output range.
///
/// NaN and infinities are rejected alongside out-of-range finite values,
/// since comparing scores against them would silently filter everything
/// or nothing.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCutoff` if the cutoff is not a finite
/// value in `0.0..=100.0`.
pub fn validate_cutoff(cutoff: f64) -> Result<(), ValidationError> {
    if cutoff.is_finite() && (MIN_CUTOFF..=MAX_CUTOFF).contains(&cutoff) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCutoff(cutoff))
    }
}
