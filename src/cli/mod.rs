//! Command-line parsing for the Tauc band gap estimator.
//!
//! Argument parsing stays separate from the analysis code; [`crate::app`]
//! turns a parsed [`Cli`] into an `AnalysisConfig`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::TransitionType;

/// Band gap estimation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Method {
    /// Linear extrapolation of the Tauc plot absorption edge.
    #[default]
    Tauc,
}

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tauc",
    version,
    about = "Estimate the optical band gap of a material from UV-Vis absorbance data (Tauc plot)"
)]
pub struct Cli {
    /// UV-Vis data file: `wavelength_nm absorbance` per line.
    #[arg(long, value_name = "PATH")]
    pub uvvis: PathBuf,

    /// Transition type.
    #[arg(long = "type", value_enum, env = "TAUC_TYPE", default_value_t = TransitionType::Direct)]
    pub transition: TransitionType,

    /// Estimation method.
    #[arg(long, value_enum, default_value_t = Method::Tauc)]
    pub method: Method,

    /// Show the Tauc plot (terminal viewer, or ASCII when stdout is not a terminal).
    #[arg(long)]
    pub plot: bool,

    /// Save the Tauc plot to a file (.svg).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export Tauc points and edge-window flags to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Write the estimate, fit and settings to JSON.
    #[arg(long, value_name = "JSON")]
    pub report: Option<PathBuf>,

    /// Minimum edge window width as a fraction of the energy span, in (0, 1].
    #[arg(long, env = "TAUC_EDGE_WINDOW_FRACTION", default_value_t = 0.15)]
    pub edge_window_fraction: f64,

    /// Minimum number of points in the edge window (>= 3).
    #[arg(long, env = "TAUC_MIN_WINDOW_POINTS", default_value_t = 5)]
    pub min_window_points: usize,

    /// Relative slope difference under which two windows count as tied, in [0, 1).
    #[arg(long, env = "TAUC_TIE_TOLERANCE", default_value_t = 0.05)]
    pub tie_tolerance: f64,

    /// Slope a window needs to qualify, as a fraction of the overall Tauc slope scale.
    #[arg(long, env = "TAUC_MIN_SLOPE_FRACTION", default_value_t = 0.01)]
    pub min_slope_fraction: f64,

    /// Fail when the estimate lies outside the measured energy range.
    #[arg(long)]
    pub strict: bool,

    /// Debug-level logging (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}
