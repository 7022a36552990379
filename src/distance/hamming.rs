//! Hamming distance over equal-length sequences.

use crate::distance::DistanceError;
use crate::utils::count_to_f64;

/// Number of positions at which `a` and `b` differ.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] when the inputs differ in length.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, DistanceError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// Distance capped at `max_distance`; `None` once the cap is exceeded.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] when the inputs differ in length.
pub fn bounded_distance<T: PartialEq>(
    a: &[T],
    b: &[T],
    max_distance: usize,
) -> Result<Option<usize>, DistanceError> {
    check_lengths(a, b)?;
    let mut dist = 0usize;
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            dist += 1;
            if dist > max_distance {
                return Ok(None);
            }
        }
    }
    Ok(Some(dist))
}

/// Similarity in `[0, 1]`: `1 - distance / len`. Two empty sequences score 1.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] when the inputs differ in length.
pub fn normalized_similarity<T: PartialEq>(a: &[T], b: &[T]) -> Result<f64, DistanceError> {
    let dist = distance(a, b)?;
    if a.is_empty() {
        return Ok(1.0);
    }
    Ok(1.0 - count_to_f64(dist) / count_to_f64(a.len()))
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<(), DistanceError> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(DistanceError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(distance(&chars("karolin"), &chars("kathrin")).unwrap(), 3);
        assert_eq!(distance(&chars("abc"), &chars("abc")).unwrap(), 0);
        assert_eq!(distance(&chars(""), &chars("")).unwrap(), 0);
        assert_eq!(distance(&chars("abc"), &chars("xyz")).unwrap(), 3);
    }

    #[test]
    fn test_length_mismatch() {
        let err = distance(&chars("ab"), &chars("abc")).unwrap_err();
        assert!(matches!(
            err,
            DistanceError::LengthMismatch { left: 2, right: 3 }
        ));
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_bounded() {
        let a = chars("karolin");
        let b = chars("kathrin");
        assert_eq!(bounded_distance(&a, &b, 3).unwrap(), Some(3));
        assert_eq!(bounded_distance(&a, &b, 2).unwrap(), None);
        assert!(bounded_distance(&chars("ab"), &chars("a"), 5).is_err());
    }

    #[test]
    fn test_normalized_similarity() {
        assert!((normalized_similarity(&chars(""), &chars("")).unwrap() - 1.0).abs() < 1e-9);
        let sim = normalized_similarity(&chars("karolin"), &chars("kathrin")).unwrap();
        assert!((sim - 4.0 / 7.0).abs() < 1e-9);
    }
}
