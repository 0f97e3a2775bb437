//! Setup module for configuring parameter sweeps.
//!
//! This module provides the [`SweepSetup`] struct and its builder. The defaults
//! reproduce the exploratory grid the crate was built around:
//!
//! - Substrate axis from 0 to 5 M with 1000 points
//! - Km from 0.1 to 1.0 with 10 points
//! - Vmax from 0.9 to 1.1 with 2 points
//! - Intersection search starting at index 100
//!
//! Axes are generated with `ndarray::Array1::linspace`, so both bounds are included.

use derive_builder::Builder;
use log::info;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::analysis::intersection::DEFAULT_INTERSECTION_START;

use super::{error::SweepError, runner::run_grid, table::CurveTable};

/// An evenly spaced, inclusive range of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearAxis {
    pub from: f64,
    pub to: f64,
    pub points: usize,
}

impl LinearAxis {
    pub fn new(from: f64, to: f64, points: usize) -> Self {
        Self { from, to, points }
    }

    /// Returns the values of this axis.
    pub fn values(&self) -> Vec<f64> {
        Array1::linspace(self.from, self.to, self.points).to_vec()
    }

    /// Checks that the axis has points and is not reversed.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the axis, used in the error message
    pub fn validate(&self, name: &str) -> Result<(), SweepError> {
        if self.points == 0 {
            return Err(SweepError::InvalidSetup(format!(
                "{name} axis must have at least one point"
            )));
        }

        if !(self.from.is_finite() && self.to.is_finite()) || self.from > self.to {
            return Err(SweepError::InvalidSetup(format!(
                "{name} axis range {}..{} is invalid",
                self.from, self.to
            )));
        }

        Ok(())
    }
}

/// Configuration of a full `(S, Km, Vmax)` sweep.
///
/// # Examples
///
/// ```
/// use menten::prelude::SweepSetupBuilder;
///
/// let setup = SweepSetupBuilder::default()
///     .max_substrate(2.0)
///     .num_substrate(200)
///     .build()
///     .unwrap();
///
/// let table = setup.run().unwrap();
/// assert_eq!(table.len(), 20);
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq)]
pub struct SweepSetup {
    #[builder(default = "5.0")]
    pub max_substrate: f64,
    #[builder(default = "1000")]
    pub num_substrate: usize,
    #[builder(default = "0.1")]
    pub km_from: f64,
    #[builder(default = "1.0")]
    pub km_to: f64,
    #[builder(default = "10")]
    pub num_km: usize,
    #[builder(default = "0.9")]
    pub vmax_from: f64,
    #[builder(default = "1.1")]
    pub vmax_to: f64,
    #[builder(default = "2")]
    pub num_vmax: usize,
    #[builder(default = "DEFAULT_INTERSECTION_START")]
    pub intersection_start: usize,
}

impl SweepSetup {
    pub fn substrate_axis(&self) -> LinearAxis {
        LinearAxis::new(0.0, self.max_substrate, self.num_substrate)
    }

    pub fn km_axis(&self) -> LinearAxis {
        LinearAxis::new(self.km_from, self.km_to, self.num_km)
    }

    pub fn vmax_axis(&self) -> LinearAxis {
        LinearAxis::new(self.vmax_from, self.vmax_to, self.num_vmax)
    }

    /// Returns the substrate concentrations of this setup.
    pub fn substrate(&self) -> Vec<f64> {
        self.substrate_axis().values()
    }

    /// Validates all axes of the setup.
    pub fn validate(&self) -> Result<(), SweepError> {
        self.substrate_axis().validate("Substrate")?;
        self.km_axis().validate("Km")?;
        self.vmax_axis().validate("Vmax")?;
        Ok(())
    }

    /// Runs the sweep described by this setup.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing either:
    /// * `Ok(CurveTable)` - One curve per `(Km, Vmax)` pair
    /// * `Err(SweepError)` - If the setup is invalid or a parameter is out of range
    pub fn run(&self) -> Result<CurveTable, SweepError> {
        self.validate()?;

        let substrate = self.substrate();
        let kms = self.km_axis().values();
        let vmaxes = self.vmax_axis().values();

        info!(
            "Sweeping {} substrate values over {} Km x {} Vmax values",
            substrate.len(),
            kms.len(),
            vmaxes.len()
        );

        Ok(run_grid(&substrate, &kms, &vmaxes)?)
    }
}
