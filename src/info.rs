//! Information display module for sweep and panel results
//!
//! This module renders curve tables and comparison results as text tables. It
//! implements `Display` for [`CurveTable`] and [`SweepReport`] and provides
//! [`panel_table`] for the comparisons of an enzyme panel.

use std::fmt::{self, Display};

use tabled::{builder::Builder, settings::Style};

use crate::{
    analysis::{
        comparison::{PairComparison, SweepReport},
        dominance::peak,
    },
    panel::NamedComparison,
    sweep::table::CurveTable,
};

/// Trait for converting results to table records
///
/// Implementors provide the column headers and one row of string values.
trait TableRecord {
    /// Get the column headers for the table
    fn columns() -> Vec<String>;

    /// Convert the instance to a record for display in a table
    fn to_record(&self) -> Vec<String>;
}

impl TableRecord for PairComparison {
    fn columns() -> Vec<String> {
        vec![
            "Enzyme 1".to_string(),
            "Enzyme 2".to_string(),
            "Dominant".to_string(),
            "Intersection".to_string(),
            "Concentration (M)".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.first.to_string(),
            self.second.to_string(),
            self.dominance.to_string(),
            optional(self.intersection),
            optional(self.concentration.map(|c| format!("{c:.4}"))),
        ]
    }
}

impl TableRecord for NamedComparison {
    fn columns() -> Vec<String> {
        vec![
            "Pair".to_string(),
            "Km 1".to_string(),
            "Km 2".to_string(),
            "Vmax".to_string(),
            "Dominant".to_string(),
            "Intersection (M)".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            format!("{} vs {}", self.pair.first, self.pair.second),
            self.first_km.to_string(),
            self.second_km.to_string(),
            self.vmax.to_string(),
            self.dominant_name().unwrap_or("-").to_string(),
            optional(self.concentration.map(|c| format!("{c:.4}"))),
        ]
    }
}

impl Display for CurveTable {
    /// Formats the table as one row per curve with its peak velocity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(vec!["Km", "Vmax", "Points", "Peak velocity"]);

        for (key, curve) in self.iter() {
            builder.push_record(vec![
                key.km().to_string(),
                key.vmax().to_string(),
                curve.len().to_string(),
                format!("{:.6}", peak(curve)),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        write!(f, "{table}")
    }
}

impl Display for SweepReport {
    /// Formats the report with a section for intersecting pairs and one for rejects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(vec![format!(
            "Sweep report ({} pairs, intersection search from index {})",
            self.len(),
            self.start
        )]);

        if !self.intersecting.is_empty() {
            builder.push_record(vec![format!(
                "Intersecting pairs ({})",
                self.intersecting.len()
            )]);
            builder.push_record(vec![to_table(&self.intersecting)]);
        }

        if !self.rejects.is_empty() {
            builder.push_record(vec![format!("Rejects ({})", self.rejects.len())]);
            builder.push_record(vec![to_table(&self.rejects)]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{table}")
    }
}

/// Renders the comparisons of an enzyme panel as a table.
pub fn panel_table(name: &str, comparisons: &[NamedComparison]) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec![name.to_string()]);
    builder.push_record(vec![to_table(comparisons)]);

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

fn to_table<T: TableRecord>(records: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(T::columns());

    for record in records {
        builder.push_record(record.to_record());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use crate::{analysis::comparison::compare_all, panel::EnzymePanel, sweep::runner::run_grid};

    use super::*;

    #[test]
    fn test_curve_table_display() {
        let table = run_grid(&[0.0, 1.0, 2.0], &[1.0], &[2.0]).unwrap();
        let rendered = table.to_string();

        assert!(rendered.contains("Peak velocity"));
        assert!(rendered.contains("1.333333"));
    }

    #[test]
    fn test_sweep_report_display() {
        let substrate: Vec<f64> = (0..200).map(|i| i as f64 * 0.05).collect();
        let table = run_grid(&substrate, &[0.1, 1.0], &[0.9, 1.1]).unwrap();
        let report = compare_all(&table, &substrate, 100).unwrap();
        let rendered = report.to_string();

        assert!(rendered.contains("Sweep report (6 pairs"));
        assert!(rendered.contains("Rejects"));
        assert!(rendered.contains("Km=0.1 Vmax=0.9"));
    }

    #[test]
    fn test_panel_table() {
        let comparisons = EnzymePanel::gut().compare().unwrap();
        let rendered = panel_table("GUT", &comparisons);

        assert!(rendered.contains("UTP vs diphosphate"));
        assert!(rendered.contains("g1p vs glucose"));
    }
}
