//! Curve Table Module
//!
//! This module provides the data structures that hold the outcome of a parameter sweep.
//!
//! # Key Components
//!
//! - [`CurveKey`]: The `(Km, Vmax)` pair identifying a kinetic curve
//! - [`CurveTable`]: A mapping from curve keys to their velocity sequences
//!
//! Keys compare by exact floating-point equality. They are wrapped in
//! [`OrderedFloat`] so that they are totally ordered and the table iterates in
//! ascending `(Km, Vmax)` order.

use std::collections::BTreeMap;
use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::kinetics::{KineticsError, MentenParameters};

/// Identifies a kinetic curve by its `(Km, Vmax)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurveKey {
    km: OrderedFloat<f64>,
    vmax: OrderedFloat<f64>,
}

impl CurveKey {
    /// Creates a key from raw parameter values.
    pub fn new(km: f64, vmax: f64) -> Self {
        Self {
            km: OrderedFloat(km),
            vmax: OrderedFloat(vmax),
        }
    }

    /// Returns the half-saturation constant of this key.
    pub fn km(&self) -> f64 {
        self.km.into_inner()
    }

    /// Returns the maximum velocity of this key.
    pub fn vmax(&self) -> f64 {
        self.vmax.into_inner()
    }
}

impl From<MentenParameters> for CurveKey {
    fn from(params: MentenParameters) -> Self {
        Self::new(params.km(), params.vmax())
    }
}

impl TryFrom<CurveKey> for MentenParameters {
    type Error = KineticsError;

    fn try_from(key: CurveKey) -> Result<Self, Self::Error> {
        MentenParameters::new(key.km(), key.vmax())
    }
}

impl fmt::Display for CurveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Km={} Vmax={}", self.km, self.vmax)
    }
}

/// Velocity sequences grouped by their `(Km, Vmax)` pair.
///
/// A table is produced once by the sweep runner and is read-only afterwards.
/// Each curve is ordered like the substrate sequence the sweep was run on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveTable {
    curves: BTreeMap<CurveKey, Vec<f64>>,
}

impl CurveTable {
    /// Appends a velocity to the curve of the given key, creating the curve if needed.
    pub(crate) fn push(&mut self, key: CurveKey, velocity: f64) {
        self.curves.entry(key).or_default().push(velocity);
    }

    /// Returns the curve for a key, if present.
    pub fn get(&self, key: &CurveKey) -> Option<&[f64]> {
        self.curves.get(key).map(Vec::as_slice)
    }

    /// Returns the curve for a raw `(Km, Vmax)` pair, if present.
    pub fn curve(&self, km: f64, vmax: f64) -> Option<&[f64]> {
        self.get(&CurveKey::new(km, vmax))
    }

    /// Returns true if the table holds a curve for the key.
    pub fn contains_key(&self, key: &CurveKey) -> bool {
        self.curves.contains_key(key)
    }

    /// Returns the keys in ascending `(Km, Vmax)` order.
    pub fn keys(&self) -> impl Iterator<Item = &CurveKey> + Clone {
        self.curves.keys()
    }

    /// Returns an iterator over keys and their curves.
    pub fn iter(&self) -> impl Iterator<Item = (&CurveKey, &[f64])> {
        self.curves.iter().map(|(key, curve)| (key, curve.as_slice()))
    }

    /// Returns the number of curves in the table.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if the table holds no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl<'a> IntoIterator for &'a CurveTable {
    type Item = (&'a CurveKey, &'a Vec<f64>);
    type IntoIter = std::collections::btree_map::Iter<'a, CurveKey, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
