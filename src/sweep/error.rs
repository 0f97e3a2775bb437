use thiserror::Error;

use crate::kinetics::KineticsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid sweep setup: {0}")]
    InvalidSetup(String),
    #[error("Failed to evaluate rate law: {0}")]
    Kinetics(#[from] KineticsError),
}
