//! Enzyme panels
//!
//! A panel is a named set of Km values (one per enzyme or substrate) and the
//! pairs that should be compared against each other at a shared Vmax. The
//! built-in panels use literature Km values from BRENDA:
//!
//! - [`EnzymePanel::pfk`]: 6-phosphofructokinase (EC 2.7.1.56)
//! - [`EnzymePanel::gut`]: UTP-glucose-1-phosphate uridylyltransferase from *Nostoc* sp. (EC 2.7.7.9)
//! - [`EnzymePanel::pfk_vs_gut`]: both enzymes acting on similar sugars
//!
//! Custom panels can be assembled from `NAME=KM` and `A:B` strings, which is
//! how the command line interface accepts them.

use std::{collections::BTreeMap, str::FromStr};

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    analysis::{
        dominance::{dominant, Dominance},
        error::AnalysisError,
        intersection::{intersection, DEFAULT_INTERSECTION_START},
    },
    kinetics::{KineticsError, MentenParameters},
    sweep::setup::LinearAxis,
};

/// Vmax shared by the built-in panels.
pub const DEFAULT_PANEL_VMAX: f64 = 370.0;

lazy_static::lazy_static! {
    static ref KM_PATTERN: Regex =
        Regex::new(r"^([\w\-]+)=([0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?)$").expect("Invalid Km pattern");
    static ref PAIR_PATTERN: Regex =
        Regex::new(r"^([\w\-]+):([\w\-]+)$").expect("Invalid pair pattern");
}

/// A labelled Km value, parsed from `NAME=KM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnzymeKm {
    pub name: String,
    pub km: f64,
}

impl FromStr for EnzymeKm {
    type Err = PanelError;

    /// Parses a labelled Km from a string such as `ATP=0.12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = KM_PATTERN
            .captures(s.trim())
            .ok_or_else(|| PanelError::Parse(format!("'{s}', expected NAME=KM")))?;

        let km = caps[2]
            .parse::<f64>()
            .map_err(|e| PanelError::Parse(format!("'{s}': {e}")))?;

        Ok(Self {
            name: caps[1].to_string(),
            km,
        })
    }
}

/// Two labels to compare, parsed from `A:B`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnzymePair {
    pub first: String,
    pub second: String,
}

impl EnzymePair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl FromStr for EnzymePair {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = PAIR_PATTERN
            .captures(s.trim())
            .ok_or_else(|| PanelError::Parse(format!("'{s}', expected A:B")))?;

        Ok(Self::new(&caps[1], &caps[2]))
    }
}

/// Named Km values and the pairs to compare at a shared Vmax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnzymePanel {
    pub name: String,
    pub kms: BTreeMap<String, f64>,
    pub pairs: Vec<EnzymePair>,
    pub vmax: f64,
    pub substrate: LinearAxis,
}

impl EnzymePanel {
    /// Creates an empty panel on the default substrate axis (0 to 5 M, 1000 points).
    pub fn new(name: impl Into<String>, vmax: f64) -> Self {
        Self {
            name: name.into(),
            kms: BTreeMap::new(),
            pairs: Vec::new(),
            vmax,
            substrate: LinearAxis::new(0.0, 5.0, 1000),
        }
    }

    pub fn with_km(mut self, name: impl Into<String>, km: f64) -> Self {
        self.kms.insert(name.into(), km);
        self
    }

    pub fn with_pair(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.pairs.push(EnzymePair::new(first, second));
        self
    }

    pub fn with_substrate(mut self, substrate: LinearAxis) -> Self {
        self.substrate = substrate;
        self
    }

    /// Assembles a panel from parsed Km values and pairs.
    ///
    /// A label given more than once is rejected with `PanelError::Parse`.
    pub fn from_parts(
        name: impl Into<String>,
        kms: Vec<EnzymeKm>,
        pairs: Vec<EnzymePair>,
        vmax: f64,
    ) -> Result<Self, PanelError> {
        let mut panel = Self::new(name, vmax);

        for EnzymeKm { name, km } in kms {
            if panel.kms.contains_key(&name) {
                return Err(PanelError::Parse(format!("Km of {name} given more than once")));
            }
            panel.kms.insert(name, km);
        }

        panel.pairs = pairs;
        Ok(panel)
    }

    /// 6-phosphofructokinase substrates and products.
    pub fn pfk() -> Self {
        Self::new("PFK", DEFAULT_PANEL_VMAX)
            .with_km("ATP", 0.12)
            .with_km("ADP", 0.28)
            .with_km("f16b", 6.1)
            .with_km("f1p", 0.25)
            .with_pair("ATP", "ADP")
            .with_pair("f16b", "f1p")
    }

    /// UTP-glucose-1-phosphate uridylyltransferase from *Nostoc* sp.
    pub fn gut() -> Self {
        Self::new("GUT", DEFAULT_PANEL_VMAX)
            .with_km("g1p", 0.742)
            .with_km("glucose", 3.04)
            .with_km("UTP", 0.0424)
            .with_km("diphosphate", 0.376)
            .with_pair("UTP", "diphosphate")
            .with_pair("g1p", "glucose")
    }

    /// PFK against GUT on a wider substrate axis (0 to 10 M, 10000 points).
    pub fn pfk_vs_gut() -> Self {
        Self::new("PFK vs GUT", DEFAULT_PANEL_VMAX)
            .with_km("GUT", 0.742)
            .with_km("PFK", 0.25)
            .with_pair("PFK", "GUT")
            .with_substrate(LinearAxis::new(0.0, 10.0, 10000))
    }

    /// Returns the Km of a label.
    pub fn km(&self, name: &str) -> Result<f64, PanelError> {
        self.kms
            .get(name)
            .copied()
            .ok_or_else(|| PanelError::UnknownEnzyme(name.to_string()))
    }

    /// Compares every pair of the panel.
    ///
    /// Both curves of a pair are computed on the panel's substrate axis with the
    /// shared Vmax. The intersection search starts at [`DEFAULT_INTERSECTION_START`].
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing either:
    /// * `Ok(Vec<NamedComparison>)` - One comparison per pair, in panel order
    /// * `Err(PanelError)` - If a label is unknown, a Km is invalid or the axis is too short
    pub fn compare(&self) -> Result<Vec<NamedComparison>, PanelError> {
        let substrate = self.substrate.values();

        self.pairs
            .iter()
            .map(|pair| -> Result<NamedComparison, PanelError> {
                let first = MentenParameters::new(self.km(&pair.first)?, self.vmax)?;
                let second = MentenParameters::new(self.km(&pair.second)?, self.vmax)?;

                let first_curve = first.velocities(&substrate)?;
                let second_curve = second.velocities(&substrate)?;

                let dominance = dominant(&first_curve, &second_curve)?;
                let intersection =
                    intersection(&first_curve, &second_curve, DEFAULT_INTERSECTION_START)?;

                debug!(
                    "{}: {} vs {} -> {:?}, intersection {:?}",
                    self.name, pair.first, pair.second, dominance, intersection
                );

                Ok(NamedComparison {
                    pair: pair.clone(),
                    first_km: first.km(),
                    second_km: second.km(),
                    first: first_curve,
                    second: second_curve,
                    dominance,
                    concentration: intersection.map(|index| substrate[index]),
                    intersection,
                    vmax: self.vmax,
                    substrate: substrate.clone(),
                })
            })
            .collect()
    }
}

/// The comparison of one labelled pair of a panel, including both curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedComparison {
    pub pair: EnzymePair,
    pub first_km: f64,
    pub second_km: f64,
    pub substrate: Vec<f64>,
    pub first: Vec<f64>,
    pub second: Vec<f64>,
    pub vmax: f64,
    pub dominance: Dominance,
    pub intersection: Option<usize>,
    pub concentration: Option<f64>,
}

impl NamedComparison {
    /// Returns the label of the dominant curve, if any.
    pub fn dominant_name(&self) -> Option<&str> {
        self.dominance
            .select(self.pair.first.as_str(), self.pair.second.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    #[error("Failed to parse {0}")]
    Parse(String),
    #[error("Unknown enzyme or substrate: {0}")]
    UnknownEnzyme(String),
    #[error("Invalid kinetic parameters: {0}")]
    Kinetics(#[from] KineticsError),
    #[error("Failed to compare curves: {0}")]
    Analysis(#[from] AnalysisError),
}
