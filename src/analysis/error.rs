//! Analysis Error Module
//!
//! Errors raised when comparing two kinetic curves. All variants describe a
//! caller contract violation; a comparison that simply finds no intersection
//! is not an error and is reported as `Ok(None)` instead.

use thiserror::Error;

use crate::sweep::table::CurveKey;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Curves differ in length: {first} vs {second}")]
    LengthMismatch { first: usize, second: usize },
    #[error("Start index {start} is out of bounds for curves of length {len}")]
    StartOutOfBounds { start: usize, len: usize },
    #[error("Curve of length {curve} does not match substrate axis of length {axis}")]
    AxisMismatch { curve: usize, axis: usize },
    #[error("Cannot compare empty curves")]
    EmptyCurve,
    #[error("No curve found for {0}")]
    MissingCurve(CurveKey),
}
