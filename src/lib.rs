//! Michaelis-Menten kinetics explorer
//!
//! This library provides functionality for exploring enzyme kinetics under the
//! Michaelis-Menten rate law, including:
//! - Evaluating the rate law for single values and whole substrate axes
//! - Sweeping a Cartesian grid of substrate, Km and Vmax values
//! - Classifying which of two parameterizations dominates
//! - Finding where two velocity curves intersect
//! - Comparing named enzyme panels from literature Km values
//! - Plotting and tabulating results

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::analysis::comparison::*;
    pub use crate::analysis::dominance::*;
    pub use crate::analysis::error::*;
    pub use crate::analysis::intersection::*;
    pub use crate::kinetics::*;
    pub use crate::panel::*;
    pub use crate::sweep::error::*;
    pub use crate::sweep::runner::*;
    pub use crate::sweep::setup::*;
    pub use crate::sweep::table::*;
}

/// The Michaelis-Menten rate law
pub mod kinetics;

/// Parameter sweeps over substrate, Km and Vmax
pub mod sweep {
    /// Error types for sweep failures
    pub mod error;
    /// Evaluation of parameter points and grids
    pub mod runner;
    /// Sweep setup and configuration
    pub mod setup;
    /// Curve table data structures
    pub mod table;
}

/// Analysis of pairs of velocity curves
pub mod analysis {
    /// Pairwise comparison of all curves in a sweep
    pub mod comparison;
    /// Dominance classification
    pub mod dominance;
    /// Error types for analysis failures
    pub mod error;
    /// Intersection search
    pub mod intersection;
}

/// Named enzyme panels
pub mod panel;

/// Plotting and visualization functionality
pub mod plotting;

/// Table display of results
pub mod info;
