use super::error::AnalysisError;

/// Index at which the intersection search starts unless told otherwise.
pub const DEFAULT_INTERSECTION_START: usize = 100;

/// Which curve is ahead at a single substrate value. Ties count for the second curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leader {
    First,
    Second,
}

impl Leader {
    fn at(first: f64, second: f64) -> Self {
        if first > second {
            Leader::First
        } else {
            Leader::Second
        }
    }
}

/// Finds the first index at which the faster of two curves changes.
///
/// The leader is recorded at `start`; the curves are then scanned from `start`
/// to their end and the first index with a different leader is returned.
///
/// # Arguments
///
/// * `first` - Velocities of the first curve
/// * `second` - Velocities of the second curve, on the same substrate basis
/// * `start` - Index to start the search from
///
/// # Returns
///
/// * `Ok(Some(index))` - The first index where the leader flips
/// * `Ok(None)` - The leader never changes in `start..len`
/// * `Err(AnalysisError)` - If the curves differ in length or `start` is out of bounds
///
/// # Examples
///
/// ```
/// use menten::analysis::intersection::intersection;
///
/// let first = [5.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 1.0];
/// let second = [1.0, 1.0, 1.0, 1.0, 5.0, 5.0, 5.0, 5.0];
/// assert_eq!(intersection(&first, &second, 0).unwrap(), Some(4));
/// ```
pub fn intersection(
    first: &[f64],
    second: &[f64],
    start: usize,
) -> Result<Option<usize>, AnalysisError> {
    if first.len() != second.len() {
        return Err(AnalysisError::LengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }

    if start >= first.len() {
        return Err(AnalysisError::StartOutOfBounds {
            start,
            len: first.len(),
        });
    }

    let initial = Leader::at(first[start], second[start]);

    let index = first[start..]
        .iter()
        .zip(&second[start..])
        .position(|(&a, &b)| Leader::at(a, b) != initial)
        .map(|offset| start + offset);

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_curves() {
        let first = [5.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 1.0];
        let second = [1.0, 1.0, 1.0, 1.0, 5.0, 5.0, 5.0, 5.0];
        assert_eq!(intersection(&first, &second, 0).unwrap(), Some(4));
    }

    #[test]
    fn test_crossing_after_start() {
        let first = [5.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 1.0];
        let second = [1.0, 1.0, 1.0, 1.0, 5.0, 5.0, 5.0, 5.0];
        assert_eq!(intersection(&first, &second, 3).unwrap(), Some(4));
        assert_eq!(intersection(&first, &second, 4).unwrap(), None);
    }

    #[test]
    fn test_no_flip() {
        let first = [2.0, 3.0, 4.0, 5.0];
        let second = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(intersection(&first, &second, 0).unwrap(), None);
    }

    #[test]
    fn test_ties_count_for_second_curve() {
        // Equal at the start, first pulls ahead at index 1
        let first = [0.0, 2.0, 3.0];
        let second = [0.0, 1.0, 2.0];
        assert_eq!(intersection(&first, &second, 0).unwrap(), Some(1));

        let equal = [1.0, 1.0, 1.0];
        assert_eq!(intersection(&equal, &equal, 0).unwrap(), None);
    }

    #[test]
    fn test_start_out_of_bounds() {
        let curve = [1.0, 2.0, 3.0];
        assert_eq!(
            intersection(&curve, &curve, 3),
            Err(AnalysisError::StartOutOfBounds { start: 3, len: 3 })
        );
        assert!(intersection(&[], &[], 0).is_err());
        assert!(intersection(&curve, &curve, DEFAULT_INTERSECTION_START).is_err());
    }

    #[test]
    fn test_length_mismatch() {
        let result = intersection(&[1.0, 2.0, 3.0], &[1.0, 2.0], 0);
        assert_eq!(
            result,
            Err(AnalysisError::LengthMismatch {
                first: 3,
                second: 2
            })
        );
    }
}
