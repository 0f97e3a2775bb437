use plotly::{
    common::{DashType, Line, Mode},
    layout::Axis,
    Layout, Plot, Scatter,
};
use thiserror::Error;

use crate::{
    analysis::{
        comparison::PairComparison,
        dominance::{peak, Dominance},
    },
    panel::NamedComparison,
    sweep::table::{CurveKey, CurveTable},
};

const COLORS: &[&str] = &[
    "green", "blue", "red", "purple", "orange", "yellow", "brown", "pink", "gray", "cyan",
];

const DEFAULT_WIDTH: usize = 800;
const DEFAULT_HEIGHT: usize = 600;
const X_LABEL: &str = "Substrate Concentration (M)";
const Y_LABEL: &str = "Reaction Velocity (M/sec)";

/// A velocity curve with the label it is shown under.
#[derive(Debug, Clone)]
pub struct LabeledCurve<'a> {
    pub label: String,
    pub velocities: &'a [f64],
}

impl<'a> LabeledCurve<'a> {
    pub fn new(label: impl Into<String>, velocities: &'a [f64]) -> Self {
        Self {
            label: label.into(),
            velocities,
        }
    }
}

/// Plots velocity curves against a shared substrate axis.
///
/// # Arguments
///
/// * `substrate` - The substrate axis shared by all curves
/// * `curves` - Curves to draw, each of the same length as `substrate`
/// * `title` - Title of the figure
/// * `intersection` - Optional substrate concentration to mark with a dashed vertical line
///
/// # Returns
///
/// A Plot object, or a `PlotError` if there are no curves or a curve does not match the axis
#[bon::builder]
pub fn plot_curves<'a>(
    substrate: &'a [f64],
    curves: Vec<LabeledCurve<'a>>,
    #[builder(into)] title: String,
    intersection: Option<f64>,
) -> Result<Plot, PlotError> {
    if curves.is_empty() {
        return Err(PlotError::NoCurves);
    }

    let mut plot = Plot::new();
    let mut top = 0.0_f64;

    for (i, curve) in curves.iter().enumerate() {
        if curve.velocities.len() != substrate.len() {
            return Err(PlotError::LengthMismatch {
                label: curve.label.clone(),
                expected: substrate.len(),
                found: curve.velocities.len(),
            });
        }

        top = top.max(peak(curve.velocities));

        let trace = Scatter::new(substrate.to_vec(), curve.velocities.to_vec())
            .name(curve.label.as_str())
            .mode(Mode::Lines)
            .line(Line::new().color(COLORS[i % COLORS.len()]).width(2.0));
        plot.add_trace(trace);
    }

    if let Some(concentration) = intersection {
        let marker = Scatter::new(vec![concentration, concentration], vec![0.0, top])
            .name(format!("Intersection @ {concentration:.4} M"))
            .mode(Mode::Lines)
            .line(Line::new().color("black").width(1.0).dash(DashType::Dash));
        plot.add_trace(marker);
    }

    let layout = Layout::new()
        .title(title)
        .show_legend(true)
        .width(DEFAULT_WIDTH)
        .height(DEFAULT_HEIGHT)
        .x_axis(Axis::new().title(X_LABEL))
        .y_axis(Axis::new().title(Y_LABEL));

    plot.set_layout(layout);

    Ok(plot)
}

/// Builds the figure title from a dominance classification.
pub fn dominance_title(dominance: Dominance, first: &str, second: &str) -> String {
    match dominance.select(first, second) {
        Some(name) => format!("{name} dominates"),
        None => "No enzyme dominates".to_string(),
    }
}

impl PairComparison {
    /// Plots both curves of a sweep comparison.
    ///
    /// # Arguments
    ///
    /// * `table` - The sweep result the comparison was computed from
    /// * `substrate` - The substrate axis of the sweep
    /// * `number` - Running number used as title prefix
    pub fn plot(
        &self,
        table: &CurveTable,
        substrate: &[f64],
        number: usize,
    ) -> Result<Plot, PlotError> {
        let first = curve(table, self.first)?;
        let second = curve(table, self.second)?;

        plot_curves()
            .substrate(substrate)
            .curves(vec![
                LabeledCurve::new(format!("Enzyme 1: {}", self.first), first),
                LabeledCurve::new(format!("Enzyme 2: {}", self.second), second),
            ])
            .title(format!(
                "{number}: {}",
                dominance_title(self.dominance, "Enzyme 1", "Enzyme 2")
            ))
            .maybe_intersection(self.concentration)
            .call()
    }
}

impl NamedComparison {
    /// Plots both curves of a panel comparison, titled with the dominant label.
    pub fn plot(&self) -> Result<Plot, PlotError> {
        let first = &self.pair.first;
        let second = &self.pair.second;

        plot_curves()
            .substrate(&self.substrate)
            .curves(vec![
                LabeledCurve::new(
                    format!("{first} Rate: Km={} Vmax={}", self.first_km, self.vmax),
                    &self.first,
                ),
                LabeledCurve::new(
                    format!("{second} Rate: Km={} Vmax={}", self.second_km, self.vmax),
                    &self.second,
                ),
            ])
            .title(dominance_title(self.dominance, first, second))
            .maybe_intersection(self.concentration)
            .call()
    }
}

fn curve(table: &CurveTable, key: CurveKey) -> Result<&[f64], PlotError> {
    table.get(&key).ok_or(PlotError::MissingCurve(key))
}

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("No curves to plot")]
    NoCurves,
    #[error("Curve {label} has {found} values, expected {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },
    #[error("No curve found for {0}")]
    MissingCurve(CurveKey),
}
