//! Michaelis-Menten rate law
//!
//! This module provides the scalar and vectorized evaluation of
//!
//! ```text
//! v = Vmax · S / (Km + S)
//! ```
//!
//! Every evaluation validates its inputs: the half-saturation constant `Km` and
//! the maximum velocity `Vmax` must be finite and strictly positive and the
//! substrate concentration `S` must be finite and non-negative. Under these constraints the
//! denominator is always positive and the velocity lies in `[0, Vmax)`.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Computes the Michaelis-Menten velocity for a single substrate concentration.
///
/// # Arguments
///
/// * `s` - Substrate concentration, finite and `>= 0`
/// * `km` - Half-saturation constant, finite and `> 0`
/// * `vmax` - Maximum velocity, finite and `> 0`
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(f64)` - The reaction velocity
/// * `Err(KineticsError)` - If any of the parameters is out of its domain
///
/// # Examples
///
/// ```
/// use menten::kinetics::michaelis_menten;
///
/// let v = michaelis_menten(1.0, 1.0, 2.0).unwrap();
/// assert_eq!(v, 1.0);
/// ```
pub fn michaelis_menten(s: f64, km: f64, vmax: f64) -> Result<f64, KineticsError> {
    MentenParameters::new(km, vmax)?.velocity(s)
}

/// A validated pair of Michaelis-Menten parameters.
///
/// Holding the parameters in this type guarantees `km > 0` and `vmax > 0`,
/// so only the substrate concentration needs checking on evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MentenParameters {
    km: f64,
    vmax: f64,
}

impl MentenParameters {
    /// Creates a new parameter pair.
    ///
    /// # Arguments
    ///
    /// * `km` - Half-saturation constant, finite and `> 0`
    /// * `vmax` - Maximum velocity, finite and `> 0`
    ///
    /// # Returns
    ///
    /// A `Result` containing the validated parameters or a `KineticsError::InvalidParameter`
    pub fn new(km: f64, vmax: f64) -> Result<Self, KineticsError> {
        if !km.is_finite() || km <= 0.0 {
            return Err(KineticsError::InvalidParameter {
                name: "Km",
                value: km,
            });
        }

        if !vmax.is_finite() || vmax <= 0.0 {
            return Err(KineticsError::InvalidParameter {
                name: "Vmax",
                value: vmax,
            });
        }

        Ok(Self { km, vmax })
    }

    /// Returns the half-saturation constant.
    pub fn km(&self) -> f64 {
        self.km
    }

    /// Returns the maximum velocity.
    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Evaluates the rate law at a single substrate concentration.
    pub fn velocity(&self, s: f64) -> Result<f64, KineticsError> {
        validate_substrate(s)?;
        Ok(self.vmax * s / (self.km + s))
    }

    /// Evaluates the rate law for every substrate value, preserving order.
    ///
    /// # Arguments
    ///
    /// * `substrate` - Ordered substrate concentrations
    ///
    /// # Returns
    ///
    /// A vector with one velocity per substrate value, or the first validation error
    pub fn velocities(&self, substrate: &[f64]) -> Result<Vec<f64>, KineticsError> {
        substrate.iter().map(|&s| self.velocity(s)).collect()
    }

    /// Vectorized evaluation over an ndarray substrate axis.
    ///
    /// All substrate values are validated up front, after which the rate law is
    /// applied elementwise.
    pub fn velocities_array(&self, substrate: &Array1<f64>) -> Result<Array1<f64>, KineticsError> {
        substrate.iter().try_for_each(|&s| validate_substrate(s))?;

        let (km, vmax) = (self.km, self.vmax);
        Ok(substrate.mapv(|s| vmax * s / (km + s)))
    }
}

fn validate_substrate(s: f64) -> Result<(), KineticsError> {
    if !s.is_finite() || s < 0.0 {
        return Err(KineticsError::InvalidParameter {
            name: "S",
            value: s,
        });
    }
    Ok(())
}

/// Errors raised when evaluating the rate law.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KineticsError {
    /// A parameter lies outside of its domain (`Km <= 0`, `Vmax <= 0`, `S < 0` or NaN).
    #[error("Invalid parameter {name}: {value} is out of range")]
    InvalidParameter { name: &'static str, value: f64 },
}
