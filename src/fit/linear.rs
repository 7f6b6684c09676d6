//! Linear fit of the selected edge.

use crate::domain::{EdgeWindow, FitResult, TaucPoint};
use crate::error::TaucError;
use crate::math::fit_line;

/// Ordinary least squares of `tauc_y` on `energy_ev`.
pub fn fit_edge(points: &[TaucPoint]) -> Result<FitResult, TaucError> {
    if points.len() < 2 {
        return Err(TaucError::InsufficientData {
            needed: 2,
            found: points.len(),
        });
    }

    let x: Vec<f64> = points.iter().map(|p| p.energy_ev).collect();
    let y: Vec<f64> = points.iter().map(|p| p.tauc_y).collect();

    let line = fit_line(&x, &y).ok_or_else(|| {
        TaucError::DegenerateFit(format!(
            "all {} fitted points share photon energy {:.6} eV",
            points.len(),
            x[0]
        ))
    })?;

    let lo = x.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let fit = FitResult {
        slope: line.slope,
        intercept: line.intercept,
        x_range: [lo, hi],
        r_squared: line.r_squared,
        n_points: points.len(),
    };
    log::debug!(
        "fit: slope={:.6} intercept={:.6} r2={:.6} n={}",
        fit.slope,
        fit.intercept,
        fit.r_squared,
        fit.n_points
    );
    Ok(fit)
}

/// Fit the points inside an edge window.
pub fn fit_window(points: &[TaucPoint], window: &EdgeWindow) -> Result<FitResult, TaucError> {
    if window.end >= points.len() || window.start > window.end {
        return Err(TaucError::InvalidInput(format!(
            "edge window [{}..={}] does not fit {} points",
            window.start,
            window.end,
            points.len()
        )));
    }
    fit_edge(window.slice(points))
}
