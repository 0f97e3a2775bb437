//! Pairwise comparison of all curves in a sweep
//!
//! This module compares every unordered pair of distinct curves in a
//! [`CurveTable`] and sorts the pairs into those whose leader changes along
//! the substrate axis ("intersecting") and those where one curve stays ahead
//! ("rejects"). A missing intersection never aborts the sweep; only contract
//! violations such as an out-of-range start index do.

use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::sweep::table::{CurveKey, CurveTable};

use super::{
    dominance::{dominant, Dominance},
    error::AnalysisError,
    intersection::intersection,
};

/// The outcome of comparing two curves of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairComparison {
    /// Key of the first curve
    pub first: CurveKey,
    /// Key of the second curve
    pub second: CurveKey,
    /// Which curve reaches the higher peak velocity
    pub dominance: Dominance,
    /// Index on the substrate axis where the leader changes
    pub intersection: Option<usize>,
    /// Substrate concentration at the intersection index
    pub concentration: Option<f64>,
}

impl PairComparison {
    /// Returns true if the leader changes somewhere after the start index.
    pub fn intersects(&self) -> bool {
        self.intersection.is_some()
    }

    /// Returns the key of the dominant curve, if any.
    pub fn dominant_key(&self) -> Option<CurveKey> {
        self.dominance.select(self.first, self.second)
    }
}

/// All pair comparisons of a sweep, split by whether they intersect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Start index used for the intersection search
    pub start: usize,
    /// Pairs whose leader changes along the substrate axis
    pub intersecting: Vec<PairComparison>,
    /// Pairs where one curve stays ahead over the whole searched range
    pub rejects: Vec<PairComparison>,
}

impl SweepReport {
    /// Returns the total number of compared pairs.
    pub fn len(&self) -> usize {
        self.intersecting.len() + self.rejects.len()
    }

    /// Returns true if no pairs were compared.
    pub fn is_empty(&self) -> bool {
        self.intersecting.is_empty() && self.rejects.is_empty()
    }

    /// Iterates over all comparisons, intersecting pairs first.
    pub fn iter(&self) -> impl Iterator<Item = &PairComparison> {
        self.intersecting.iter().chain(self.rejects.iter())
    }
}

/// Compares two curves of a table.
///
/// # Arguments
///
/// * `table` - The sweep result holding both curves
/// * `substrate` - The substrate axis the table was computed on
/// * `first` - Key of the first curve
/// * `second` - Key of the second curve
/// * `start` - Index to start the intersection search from
///
/// # Returns
///
/// The `PairComparison`, or an `AnalysisError` if a curve is missing, its
/// length does not match the substrate axis, or `start` is out of bounds
pub fn compare_pair(
    table: &CurveTable,
    substrate: &[f64],
    first: CurveKey,
    second: CurveKey,
    start: usize,
) -> Result<PairComparison, AnalysisError> {
    let curve_first = lookup(table, substrate, first)?;
    let curve_second = lookup(table, substrate, second)?;

    let dominance = dominant(curve_first, curve_second)?;
    let intersection = intersection(curve_first, curve_second, start)?;
    let concentration = intersection.map(|index| substrate[index]);

    Ok(PairComparison {
        first,
        second,
        dominance,
        intersection,
        concentration,
    })
}

/// Compares every unordered pair of distinct curves in a table.
///
/// Pairs are visited once, in ascending key order (`(a, b)` with `a < b`).
///
/// # Arguments
///
/// * `table` - The sweep result
/// * `substrate` - The substrate axis the table was computed on
/// * `start` - Index to start each intersection search from
///
/// # Returns
///
/// A `SweepReport` with intersecting pairs and rejects, or the first
/// `AnalysisError` encountered
pub fn compare_all(
    table: &CurveTable,
    substrate: &[f64],
    start: usize,
) -> Result<SweepReport, AnalysisError> {
    let mut report = SweepReport {
        start,
        ..Default::default()
    };

    for (&first, &second) in table.keys().tuple_combinations() {
        let comparison = compare_pair(table, substrate, first, second, start)?;

        match comparison.intersection {
            Some(index) => {
                debug!("{first} and {second} intersect at index {index}");
                report.intersecting.push(comparison);
            }
            None => {
                debug!("{first} and {second} do not intersect");
                report.rejects.push(comparison);
            }
        }
    }

    info!(
        "Compared {} pairs: {} intersecting, {} without intersection",
        report.len(),
        report.intersecting.len(),
        report.rejects.len()
    );

    Ok(report)
}

fn lookup<'a>(
    table: &'a CurveTable,
    substrate: &[f64],
    key: CurveKey,
) -> Result<&'a [f64], AnalysisError> {
    let curve = table.get(&key).ok_or(AnalysisError::MissingCurve(key))?;

    if curve.len() != substrate.len() {
        return Err(AnalysisError::AxisMismatch {
            curve: curve.len(),
            axis: substrate.len(),
        });
    }

    Ok(curve)
}
