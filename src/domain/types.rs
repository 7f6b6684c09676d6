//! Shared domain types.
//!
//! Results are serializable so they can be written to the JSON report and
//! reloaded by downstream scripts.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TaucError;

/// Planck constant times speed of light, in eV·nm.
pub const HC_EV_NM: f64 = 1239.84198;

/// One measured UV-Vis sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    pub wavelength_nm: f64,
    pub absorbance: f64,
}

/// A measured spectrum, sorted by ascending wavelength.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    points: Vec<SpectrumPoint>,
}

impl Spectrum {
    /// Build a spectrum, sorting the points by wavelength.
    ///
    /// Physical validity is checked by the transform, not here, so the loader
    /// can hand over whatever the file contained.
    pub fn new(mut points: Vec<SpectrumPoint>) -> Self {
        points.sort_by(|a, b| a.wavelength_nm.total_cmp(&b.wavelength_nm));
        Self { points }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(wavelength_nm, absorbance)| SpectrumPoint {
                    wavelength_nm,
                    absorbance,
                })
                .collect(),
        )
    }

    pub fn points(&self) -> &[SpectrumPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Absorption mechanism; selects the Tauc exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransitionType {
    /// Direct allowed transition, `n = 2`.
    #[default]
    Direct,
    /// Indirect allowed transition, `n = 1/2`.
    Indirect,
}

impl TransitionType {
    /// Exponent `n` in `(A·hν)^n`.
    pub fn exponent(self) -> f64 {
        match self {
            TransitionType::Direct => 2.0,
            TransitionType::Indirect => 0.5,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TransitionType::Direct => "Direct",
            TransitionType::Indirect => "Indirect",
        }
    }

    /// Axis label for the Tauc ordinate.
    pub fn y_label(self) -> &'static str {
        match self {
            TransitionType::Direct => "(αhν)²",
            TransitionType::Indirect => "(αhν)^(1/2)",
        }
    }
}

/// A point on the Tauc plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaucPoint {
    pub energy_ev: f64,
    pub tauc_y: f64,
    /// Source sample, kept for exports and the edge checks.
    pub wavelength_nm: f64,
    pub absorbance: f64,
}

/// Contiguous run of Tauc points chosen as the absorption edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWindow {
    /// First index (inclusive) into the energy-ordered Tauc points.
    pub start: usize,
    /// Last index (inclusive).
    pub end: usize,
    pub energy_lo: f64,
    pub energy_hi: f64,
    /// Mean finite-difference slope over the window.
    pub mean_slope: f64,
}

impl EdgeWindow {
    pub fn point_count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, idx: usize) -> bool {
        (self.start..=self.end).contains(&idx)
    }

    pub fn slice<'a>(&self, points: &'a [TaucPoint]) -> &'a [TaucPoint] {
        &points[self.start..=self.end]
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.energy_lo + self.energy_hi)
    }
}

/// Ordinary least squares line `tauc_y = slope · E + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    /// Energy span `[lo, hi]` of the fitted points.
    pub x_range: [f64; 2],
    pub r_squared: f64,
    pub n_points: usize,
}

impl FitResult {
    pub fn predict(&self, energy_ev: f64) -> f64 {
        self.slope * energy_ev + self.intercept
    }
}

/// Whether the intercept landed where a band gap can physically be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Positive and inside the measured energy range.
    InRange,
    /// Non-positive or outside the measured energy range.
    OutOfRange,
}

/// Final output of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandGapEstimate {
    pub energy_ev: f64,
    pub transition_type: TransitionType,
    pub fit: FitResult,
    pub confidence: Confidence,
}

impl BandGapEstimate {
    pub fn is_in_range(&self) -> bool {
        self.confidence == Confidence::InRange
    }

    /// Reject estimates that fell outside the measured range.
    pub fn ensure_in_range(&self) -> Result<(), TaucError> {
        match self.confidence {
            Confidence::InRange => Ok(()),
            Confidence::OutOfRange => Err(TaucError::DegenerateFit(format!(
                "extrapolated band gap {:.4} eV lies outside the measured energy range",
                self.energy_ev
            ))),
        }
    }
}

/// Tuning knobs for the edge selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeOptions {
    /// Minimum window width as a fraction of the full energy span.
    pub edge_window_fraction: f64,
    /// Minimum number of points per window (capped for tiny datasets).
    pub min_window_points: usize,
    /// Windows within this relative distance of the steepest slope tie.
    pub tie_tolerance: f64,
    /// Qualifying slope, as a fraction of `y span / energy span`.
    pub min_slope_fraction: f64,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            edge_window_fraction: 0.15,
            min_window_points: 5,
            tie_tolerance: 0.05,
            min_slope_fraction: 0.01,
        }
    }
}

impl EdgeOptions {
    pub fn validate(&self) -> Result<(), TaucError> {
        if !(self.edge_window_fraction.is_finite()
            && self.edge_window_fraction > 0.0
            && self.edge_window_fraction <= 1.0)
        {
            return Err(TaucError::InvalidInput(format!(
                "edge_window_fraction must be in (0, 1], got {}",
                self.edge_window_fraction
            )));
        }
        if self.min_window_points < 3 {
            return Err(TaucError::InvalidInput(format!(
                "min_window_points must be at least 3, got {}",
                self.min_window_points
            )));
        }
        if !(self.tie_tolerance.is_finite() && (0.0..1.0).contains(&self.tie_tolerance)) {
            return Err(TaucError::InvalidInput(format!(
                "tie_tolerance must be in [0, 1), got {}",
                self.tie_tolerance
            )));
        }
        if !(self.min_slope_fraction.is_finite() && self.min_slope_fraction >= 0.0) {
            return Err(TaucError::InvalidInput(format!(
                "min_slope_fraction must be finite and >= 0, got {}",
                self.min_slope_fraction
            )));
        }
        Ok(())
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment and defaults).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub transition: TransitionType,
    pub edge: EdgeOptions,
    /// Treat out-of-range estimates as failures.
    pub strict: bool,

    pub plot: bool,
    pub plot_output: Option<PathBuf>,
    pub export_points: Option<PathBuf>,
    pub export_report: Option<PathBuf>,
}
