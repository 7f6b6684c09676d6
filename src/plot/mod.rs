//! Tauc plot rendering.
//!
//! The analysis core never draws. Renderers consume a finished run through
//! [`PlotRenderer`] and only read it:
//!
//! - `Interactive`: terminal viewer (`crate::tui`), or an ASCII plot on
//!   stdout when stdout is not a terminal
//! - `File`: SVG image via plotters (`file`)
//!
//! Series and bounds are computed once in [`TaucPlot`], so every backend
//! draws the same picture.

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::domain::{BandGapEstimate, FitResult, TaucPoint};
use crate::error::TaucError;

pub mod ascii;
pub mod file;

pub use ascii::*;
pub use file::*;

/// Where a plot goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotMode {
    Interactive,
    File(PathBuf),
}

/// Read-only consumer of a finished analysis.
pub trait PlotRenderer {
    fn render(
        &self,
        points: &[TaucPoint],
        fit: &FitResult,
        estimate: &BandGapEstimate,
        mode: &PlotMode,
    ) -> Result<(), TaucError>;
}

/// Renderer used by the `tauc` binary.
#[derive(Debug, Clone, Copy)]
pub struct StandardRenderer {
    /// ASCII fallback size (columns, rows).
    pub ascii_size: (usize, usize),
    /// Image size in pixels for file output.
    pub image_size: (u32, u32),
}

impl Default for StandardRenderer {
    fn default() -> Self {
        Self {
            ascii_size: (72, 20),
            image_size: (900, 640),
        }
    }
}

impl PlotRenderer for StandardRenderer {
    fn render(
        &self,
        points: &[TaucPoint],
        fit: &FitResult,
        estimate: &BandGapEstimate,
        mode: &PlotMode,
    ) -> Result<(), TaucError> {
        let plot = TaucPlot::new(points, fit, estimate);
        match mode {
            PlotMode::Interactive if std::io::stdout().is_terminal() => crate::tui::show(&plot),
            PlotMode::Interactive => {
                let (w, h) = self.ascii_size;
                println!("{}", render_ascii_plot(&plot, w, h));
                Ok(())
            }
            PlotMode::File(path) => {
                save_plot(&plot, path, self.image_size)?;
                log::info!("plot written to {}", path.display());
                Ok(())
            }
        }
    }
}

/// Backend-independent description of a Tauc plot.
#[derive(Debug, Clone, PartialEq)]
pub struct TaucPlot {
    pub title: String,
    /// Fit statistics line.
    pub subtitle: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// All Tauc points outside the fitted range.
    pub points: Vec<(f64, f64)>,
    /// Tauc points inside the fitted range.
    pub edge: Vec<(f64, f64)>,
    /// Fitted line, from the intercept (when plotted) to the top of the fit range.
    pub fit_line: Vec<(f64, f64)>,
    /// `(Eg, 0)` when the estimate lies in the measured range.
    pub intercept: Option<(f64, f64)>,
    pub band_gap_ev: f64,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl TaucPlot {
    pub fn new(points: &[TaucPoint], fit: &FitResult, estimate: &BandGapEstimate) -> Self {
        let [fit_lo, fit_hi] = fit.x_range;
        let in_fit = |e: f64| e >= fit_lo && e <= fit_hi;

        let (edge, rest): (Vec<_>, Vec<_>) = points
            .iter()
            .map(|p| (p.energy_ev, p.tauc_y))
            .partition(|&(e, _)| in_fit(e));

        let intercept = estimate.is_in_range().then_some((estimate.energy_ev, 0.0));
        let line_start = intercept.map_or(fit_lo, |(eg, _)| eg.min(fit_lo));
        let line_end = intercept.map_or(fit_hi, |(eg, _)| eg.max(fit_hi));
        let fit_line = vec![(line_start, fit.predict(line_start)), (line_end, fit.predict(line_end))];

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = 0.0_f64;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in rest.iter().chain(&edge).chain(&fit_line) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !(x_min.is_finite() && x_max.is_finite() && x_max > x_min) {
            x_min = 0.0;
            x_max = 1.0;
        }
        if !(y_max.is_finite() && y_max > y_min) {
            y_max = y_min + 1.0;
        }
        let (x0, x1) = pad_range(x_min, x_max, 0.03);
        let (y0, y1) = pad_range(y_min, y_max, 0.05);

        Self {
            title: format!(
                "Tauc Plot ({} Band Gap, Eg ≈ {:.2} eV)",
                estimate.transition_type.display_name(),
                estimate.energy_ev
            ),
            subtitle: format!(
                "slope={:.4} intercept={:.4} r²={:.4} n={}",
                fit.slope, fit.intercept, fit.r_squared, fit.n_points
            ),
            x_label: "Photon energy (eV)",
            y_label: estimate.transition_type.y_label(),
            points: rest,
            edge,
            fit_line,
            intercept,
            band_gap_ev: estimate.energy_ev,
            x_bounds: [x0, x1],
            y_bounds: [y0, y1],
        }
    }
}

pub(crate) fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}
