//! Shared validation and numeric helpers.

pub mod validation;

/// Helper function to convert usize count to f64 with explicit precision loss allowance.
///
/// String lengths are far below the f64 mantissa limit, so the conversion is
/// exact for every input the scorers see.
#[inline]
pub(crate) fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}
