//! Command-line interface for the menten library
//!
//! This binary provides a CLI to explore Michaelis-Menten kinetics, including:
//! - Sweeping a grid of Km and Vmax values and reporting which pairs intersect
//! - Comparing enzyme panels built from literature or custom Km values
//! - Evaluating the rate law for a single parameter pair
//!
//! # Usage
//!
//! ```bash
//! # Sweep the default grid and write figures of all compared pairs
//! menten sweep --plot-dir figures
//!
//! # Compare the PFK panel
//! menten panel --preset pfk
//!
//! # Compare a custom panel
//! menten panel --enzyme ATP=0.12 --enzyme ADP=0.28 --pair ATP:ADP --vmax 370
//!
//! # Evaluate the rate law
//! menten velocity --km 1 --vmax 2 --substrate 0 1 2
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use menten::{
    info::panel_table,
    plotting::PlotError,
    prelude::*,
};
use plotly::Plot;
use tabled::{builder::Builder, settings::Style};
use thiserror::Error;

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Sweep a grid of Km and Vmax values and compare every pair of curves
    Sweep {
        /// Upper bound of the substrate axis (M)
        #[arg(long, default_value_t = 5.0)]
        max_substrate: f64,

        /// Number of points on the substrate axis
        #[arg(long, default_value_t = 1000)]
        num_substrate: usize,

        /// Lower bound of the Km sweep
        #[arg(long, default_value_t = 0.1)]
        km_from: f64,

        /// Upper bound of the Km sweep
        #[arg(long, default_value_t = 1.0)]
        km_to: f64,

        /// Number of Km values
        #[arg(long, default_value_t = 10)]
        num_km: usize,

        /// Lower bound of the Vmax sweep
        #[arg(long, default_value_t = 0.9)]
        vmax_from: f64,

        /// Upper bound of the Vmax sweep
        #[arg(long, default_value_t = 1.1)]
        vmax_to: f64,

        /// Number of Vmax values
        #[arg(long, default_value_t = 2)]
        num_vmax: usize,

        /// Index on the substrate axis to start the intersection search from
        #[arg(long, default_value_t = DEFAULT_INTERSECTION_START)]
        start: usize,

        /// Print the curve table before the report
        #[arg(long)]
        curves: bool,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Directory to write HTML figures of all compared pairs to
        #[arg(short, long)]
        plot_dir: Option<PathBuf>,
    },
    /// Compare the pairs of an enzyme panel at a shared Vmax
    Panel {
        /// Built-in panel to compare
        #[arg(long, conflicts_with_all = ["enzyme", "pair"])]
        preset: Option<Preset>,

        /// Km of an enzyme or substrate, as NAME=KM
        #[arg(short, long)]
        enzyme: Vec<EnzymeKm>,

        /// Pair of labels to compare, as A:B
        #[arg(long)]
        pair: Vec<EnzymePair>,

        /// Shared Vmax of all curves
        #[arg(long)]
        vmax: Option<f64>,

        /// Print the comparisons as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Directory to write HTML figures of all compared pairs to
        #[arg(short, long)]
        plot_dir: Option<PathBuf>,
    },
    /// Evaluate the rate law for one Km and Vmax
    Velocity {
        /// Half-saturation constant
        #[arg(long)]
        km: f64,

        /// Maximum velocity
        #[arg(long)]
        vmax: f64,

        /// Substrate concentrations
        #[arg(long, num_args = 1.., required = true)]
        substrate: Vec<f64>,
    },
}

/// Built-in enzyme panels
#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// 6-phosphofructokinase
    Pfk,
    /// UTP-glucose-1-phosphate uridylyltransferase
    Gut,
    /// PFK against GUT
    PfkVsGut,
}

impl From<Preset> for EnzymePanel {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Pfk => EnzymePanel::pfk(),
            Preset::Gut => EnzymePanel::gut(),
            Preset::PfkVsGut => EnzymePanel::pfk_vs_gut(),
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Sweep(#[from] SweepError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Panel(#[from] PanelError),
    #[error(transparent)]
    Kinetics(#[from] KineticsError),
    #[error("Failed to plot: {0}")]
    Plot(#[from] PlotError),
    #[error("Either --preset or at least one --enzyme and --pair must be given")]
    EmptyPanel,
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid progress template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}

/// Main entry point for the CLI application
pub fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Sweep {
            max_substrate,
            num_substrate,
            km_from,
            km_to,
            num_km,
            vmax_from,
            vmax_to,
            num_vmax,
            start,
            curves,
            json,
            plot_dir,
        } => {
            let setup = SweepSetup {
                max_substrate,
                num_substrate,
                km_from,
                km_to,
                num_km,
                vmax_from,
                vmax_to,
                num_vmax,
                intersection_start: start,
            };

            let table = setup.run()?;
            let substrate = setup.substrate();
            let report = compare_all(&table, &substrate, setup.intersection_start)?;

            if curves && !json {
                println!("{table}");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }

            if let Some(dir) = plot_dir {
                let figures = report
                    .intersecting
                    .iter()
                    .enumerate()
                    .map(|(i, c)| ("intersecting", i + 1, c))
                    .chain(
                        report
                            .rejects
                            .iter()
                            .enumerate()
                            .map(|(i, c)| ("reject", i + 1, c)),
                    )
                    .map(|(kind, number, comparison)| -> Result<(String, Plot), CliError> {
                        let plot = comparison.plot(&table, &substrate, number)?;
                        Ok((format!("{kind}_{number:03}.html"), plot))
                    });

                write_figures(&dir, report.len(), figures)?;
            }
        }
        Commands::Panel {
            preset,
            enzyme,
            pair,
            vmax,
            json,
            plot_dir,
        } => {
            let mut panel = match preset {
                Some(preset) => EnzymePanel::from(preset),
                None if !enzyme.is_empty() && !pair.is_empty() => {
                    EnzymePanel::from_parts("Custom panel", enzyme, pair, DEFAULT_PANEL_VMAX)?
                }
                None => return Err(CliError::EmptyPanel),
            };

            if let Some(vmax) = vmax {
                panel.vmax = vmax;
            }

            let comparisons = panel.compare()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&comparisons)?);
            } else {
                println!("{}", panel_table(&panel.name, &comparisons));
            }

            if let Some(dir) = plot_dir {
                let figures = comparisons
                    .iter()
                    .map(|comparison| -> Result<(String, Plot), CliError> {
                        let name = format!(
                            "{}_{}_vs_{}.html",
                            panel.name.replace(' ', "_"),
                            comparison.pair.first,
                            comparison.pair.second
                        );
                        Ok((name, comparison.plot()?))
                    });

                write_figures(&dir, comparisons.len(), figures)?;
            }
        }
        Commands::Velocity {
            km,
            vmax,
            substrate,
        } => {
            let velocities = run_with_data(&substrate, km, vmax)?;

            let mut builder = Builder::default();
            builder.push_record(vec!["S (M)".to_string(), "v (M/sec)".to_string()]);
            for (s, v) in substrate.iter().zip(velocities.iter()) {
                builder.push_record(vec![s.to_string(), format!("{v:.6}")]);
            }

            let mut table = builder.build();
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}

/// Writes figures as standalone HTML files into a directory, with a progress bar.
fn write_figures<I>(dir: &Path, total: usize, figures: I) -> Result<(), CliError>
where
    I: Iterator<Item = Result<(String, Plot), CliError>>,
{
    fs::create_dir_all(dir)?;

    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {elapsed} | {msg}")?
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );

    for figure in figures {
        let (name, plot) = figure?;
        progress_bar.set_message(name.clone());
        fs::write(dir.join(&name), plot.to_html())?;
        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("done");
    info!("Wrote {total} figures to {}", dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_panel_args() {
        let cli = Cli::try_parse_from([
            "menten", "panel", "--enzyme", "ATP=0.12", "--enzyme", "ADP=0.28", "--pair", "ATP:ADP",
        ])
        .unwrap();

        match cli.command {
            Commands::Panel { enzyme, pair, .. } => {
                assert_eq!(enzyme.len(), 2);
                assert_eq!(pair, vec![EnzymePair::new("ATP", "ADP")]);
            }
            _ => panic!("Expected panel command"),
        }
    }

    #[test]
    fn test_preset_conflicts_with_custom_panel() {
        let result = Cli::try_parse_from([
            "menten", "panel", "--preset", "pfk", "--enzyme", "ATP=0.12",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_panel_is_rejected() {
        let result = run(Commands::Panel {
            preset: None,
            enzyme: vec![],
            pair: vec![],
            vmax: None,
            json: false,
            plot_dir: None,
        });
        assert!(matches!(result, Err(CliError::EmptyPanel)));
    }

    #[test]
    fn test_repeated_enzyme_is_rejected() {
        let cli = Cli::try_parse_from([
            "menten", "panel", "--enzyme", "ATP=0.1", "--enzyme", "ATP=0.2", "--pair", "ATP:ATP",
        ])
        .unwrap();

        let result = run(cli.command);
        assert!(matches!(result, Err(CliError::Panel(PanelError::Parse(_)))));
    }

    #[test]
    fn test_panel_writes_figures() {
        let dir = tempfile::tempdir().unwrap();

        run(Commands::Panel {
            preset: Some(Preset::Pfk),
            enzyme: vec![],
            pair: vec![],
            vmax: None,
            json: false,
            plot_dir: Some(dir.path().to_path_buf()),
        })
        .unwrap();

        assert!(dir.path().join("PFK_ATP_vs_ADP.html").exists());
        assert!(dir.path().join("PFK_f16b_vs_f1p.html").exists());
    }
}
