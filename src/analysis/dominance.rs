use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AnalysisError;

/// Which of two curves reaches the higher peak velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dominance {
    /// The first curve has the strictly larger maximum
    First,
    /// The second curve has the strictly larger maximum
    Second,
    /// Both maxima are equal
    Indeterminate,
}

impl Dominance {
    /// Picks the item belonging to the dominant curve, if there is one.
    pub fn select<T>(self, first: T, second: T) -> Option<T> {
        match self {
            Dominance::First => Some(first),
            Dominance::Second => Some(second),
            Dominance::Indeterminate => None,
        }
    }
}

impl fmt::Display for Dominance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dominance::First => write!(f, "1"),
            Dominance::Second => write!(f, "2"),
            Dominance::Indeterminate => write!(f, "Indeterminate"),
        }
    }
}

/// Classifies which of two curves dominates by comparing their maxima.
///
/// Equal maxima are `Indeterminate`; there is no tie-break.
///
/// # Arguments
///
/// * `first` - Velocities of the first curve
/// * `second` - Velocities of the second curve, on the same substrate basis
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(Dominance)` - The classification
/// * `Err(AnalysisError)` - If the curves are empty or differ in length
pub fn dominant(first: &[f64], second: &[f64]) -> Result<Dominance, AnalysisError> {
    if first.len() != second.len() {
        return Err(AnalysisError::LengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }

    if first.is_empty() {
        return Err(AnalysisError::EmptyCurve);
    }

    let max_first = peak(first);
    let max_second = peak(second);

    let dominance = if max_first > max_second {
        Dominance::First
    } else if max_second > max_first {
        Dominance::Second
    } else {
        Dominance::Indeterminate
    };

    Ok(dominance)
}

/// Returns the largest velocity of a curve.
pub(crate) fn peak(curve: &[f64]) -> f64 {
    curve.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
