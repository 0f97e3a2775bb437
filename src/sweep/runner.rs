//! Sweep runner
//!
//! Evaluates the rate law over parameter points and groups the resulting
//! velocities by `(Km, Vmax)`. Every call starts from an empty [`CurveTable`];
//! tables are never shared between runs.

use itertools::iproduct;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::kinetics::{KineticsError, MentenParameters};

use super::table::CurveTable;

/// A single point of the parameter space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterPoint {
    /// Substrate concentration
    pub s: f64,
    /// Half-saturation constant
    pub km: f64,
    /// Maximum velocity
    pub vmax: f64,
}

impl ParameterPoint {
    pub fn new(s: f64, km: f64, vmax: f64) -> Self {
        Self { s, km, vmax }
    }
}

impl From<(f64, f64, f64)> for ParameterPoint {
    fn from((s, km, vmax): (f64, f64, f64)) -> Self {
        Self { s, km, vmax }
    }
}

/// Evaluates every parameter point and groups the velocities by `(Km, Vmax)`.
///
/// Velocities are appended to their curve in enumeration order. If the same
/// `(Km, Vmax)` pair is enumerated more than once for a substrate value, its
/// curve grows accordingly; keeping the enumeration free of duplicates is up
/// to the caller.
///
/// # Arguments
///
/// * `points` - Any iterator of parameter points or `(S, Km, Vmax)` triples
///
/// # Returns
///
/// A freshly built `CurveTable`, or the first `KineticsError` encountered
pub fn run<I, P>(points: I) -> Result<CurveTable, KineticsError>
where
    I: IntoIterator<Item = P>,
    P: Into<ParameterPoint>,
{
    let mut table = CurveTable::default();

    for point in points {
        let ParameterPoint { s, km, vmax } = point.into();
        let params = MentenParameters::new(km, vmax)?;
        table.push(params.into(), params.velocity(s)?);
    }

    Ok(table)
}

/// Sweeps the Cartesian product `substrate × kms × vmaxes`.
///
/// The substrate axis is the outermost loop, so each curve in the resulting
/// table lists one velocity per substrate value in the order supplied.
///
/// # Arguments
///
/// * `substrate` - Ordered substrate concentrations (the shared x-axis)
/// * `kms` - Half-saturation constants to sweep
/// * `vmaxes` - Maximum velocities to sweep
///
/// # Examples
///
/// ```
/// use menten::sweep::runner::run_grid;
///
/// let table = run_grid(&[0.0, 1.0, 2.0], &[1.0], &[2.0]).unwrap();
/// assert_eq!(table.curve(1.0, 2.0), Some([0.0, 1.0, 4.0 / 3.0].as_slice()));
/// ```
pub fn run_grid(
    substrate: &[f64],
    kms: &[f64],
    vmaxes: &[f64],
) -> Result<CurveTable, KineticsError> {
    let points = iproduct!(substrate, kms, vmaxes).map(|(&s, &km, &vmax)| (s, km, vmax));
    let table = run(points)?;

    if merged_duplicates(&table, substrate, kms, vmaxes) {
        warn!(
            "Sweep produced {} curves for {} parameter pairs; duplicate Km or Vmax values were merged",
            table.len(),
            kms.len() * vmaxes.len()
        );
    }

    for (key, curve) in &table {
        debug!("{key}: {} velocities", curve.len());
    }

    Ok(table)
}

/// Computes the velocity curve of a single `(Km, Vmax)` pair.
///
/// # Arguments
///
/// * `substrate` - Ordered substrate concentrations
/// * `km` - Half-saturation constant
/// * `vmax` - Maximum velocity
///
/// # Returns
///
/// One velocity per substrate value, in the same order
pub fn run_with_data(substrate: &[f64], km: f64, vmax: f64) -> Result<Vec<f64>, KineticsError> {
    MentenParameters::new(km, vmax)?.velocities(substrate)
}

/// Returns true if the grid enumerated fewer distinct keys than `kms × vmaxes`.
///
/// An empty substrate axis yields no curves at all, which is not a merge.
fn merged_duplicates(table: &CurveTable, substrate: &[f64], kms: &[f64], vmaxes: &[f64]) -> bool {
    !substrate.is_empty() && table.len() != kms.len() * vmaxes.len()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::sweep::table::CurveKey;

    use super::*;

    #[test]
    fn test_run_grid_single_pair() {
        let table = run_grid(&[0.0, 1.0, 2.0], &[1.0], &[2.0]).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(&CurveKey::new(1.0, 2.0)),
            Some([0.0, 1.0, 4.0 / 3.0].as_slice())
        );
    }

    #[test]
    fn test_run_grid_cartesian_product() {
        let substrate = [0.0, 0.5, 1.0, 5.0];
        let table = run_grid(&substrate, &[0.1, 0.5, 1.0], &[0.9, 1.1]).unwrap();

        assert_eq!(table.len(), 6);
        for (key, curve) in table.iter() {
            assert_eq!(curve.len(), substrate.len());
            assert_eq!(curve, run_with_data(&substrate, key.km(), key.vmax()).unwrap());
        }
    }

    #[test]
    fn test_run_is_fresh_per_call() {
        let first = run_grid(&[0.0, 1.0], &[1.0], &[1.0]).unwrap();
        let second = run_grid(&[0.0, 1.0], &[1.0], &[1.0]).unwrap();

        assert_eq!(first.curve(1.0, 1.0).map(<[f64]>::len), Some(2));
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_pairs_append_in_enumeration_order() {
        let table = run_grid(&[0.0, 1.0], &[1.0, 1.0], &[2.0]).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.curve(1.0, 2.0), Some([0.0, 0.0, 1.0, 1.0].as_slice()));
    }

    #[test]
    fn test_run_accepts_triples() {
        let table = run(vec![(1.0, 1.0, 2.0), (0.0, 1.0, 2.0)]).unwrap();
        assert_eq!(table.curve(1.0, 2.0), Some([1.0, 0.0].as_slice()));
    }

    #[test]
    fn test_run_rejects_invalid_points() {
        let result = run(vec![ParameterPoint::new(1.0, 0.0, 1.0)]);
        assert!(result.is_err());

        let result = run_grid(&[-1.0], &[1.0], &[1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_with_data() {
        let velocities = run_with_data(&[0.0, 1.0, 3.0], 1.0, 2.0).unwrap();
        assert_eq!(velocities, vec![0.0, 1.0, 1.5]);
    }

    #[test]
    fn test_empty_inputs_yield_empty_table() {
        let table = run_grid(&[0.0, 1.0], &[], &[1.0]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_substrate_is_not_a_merge() {
        let kms = [0.1, 1.0];
        let vmaxes = [1.0];
        let table = run_grid(&[], &kms, &vmaxes).unwrap();

        assert!(table.is_empty());
        assert!(!merged_duplicates(&table, &[], &kms, &vmaxes));
    }

    #[test]
    fn test_duplicate_kms_are_a_merge() {
        let substrate = [0.0, 1.0];
        let kms = [1.0, 1.0];
        let vmaxes = [2.0];
        let table = run_grid(&substrate, &kms, &vmaxes).unwrap();

        assert!(merged_duplicates(&table, &substrate, &kms, &vmaxes));

        let distinct = run_grid(&substrate, &[0.5, 1.0], &vmaxes).unwrap();
        assert!(!merged_duplicates(&distinct, &substrate, &[0.5, 1.0], &vmaxes));
    }

    #[test]
    fn test_infinite_vmax_is_rejected() {
        let result = run_grid(&[0.0, 1.0], &[1.0], &[f64::INFINITY]);

        assert_eq!(
            result,
            Err(KineticsError::InvalidParameter {
                name: "Vmax",
                value: f64::INFINITY
            })
        );
    }
}
