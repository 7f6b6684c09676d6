//! Formatted terminal output.

use crate::domain::{AnalysisConfig, Spectrum};
use crate::fit::{TaucAnalysis, energy_range};

use super::EdgeResidual;

/// The headline result line.
pub fn format_estimate_line(analysis: &TaucAnalysis) -> String {
    format!(
        "Estimated {} band gap energy: {:.2} eV",
        analysis.estimate.transition_type.display_name(),
        analysis.estimate.energy_ev
    )
}

/// Full run summary: result, data, edge window, fit and settings.
pub fn format_summary(spectrum: &Spectrum, analysis: &TaucAnalysis, config: &AnalysisConfig) -> String {
    let mut out = String::new();
    let [e_lo, e_hi] = energy_range(&analysis.points);
    let window = &analysis.window;
    let fit = &analysis.fit;
    let edge = &config.edge;

    out.push_str(&format_estimate_line(analysis));
    out.push('\n');
    if !analysis.estimate.is_in_range() {
        out.push_str(&format!(
            "Warning: estimate lies outside the measured energy range [{e_lo:.3}, {e_hi:.3}] eV\n"
        ));
    }

    let (wl_lo, wl_hi) = spectrum
        .points()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.wavelength_nm), hi.max(p.wavelength_nm))
        });
    out.push_str(&format!(
        "Input: {} | samples: {} | wavelength=[{wl_lo:.1}, {wl_hi:.1}] nm | energy=[{e_lo:.3}, {e_hi:.3}] eV\n",
        config.input_path.display(),
        spectrum.len()
    ));
    out.push_str(&format!(
        "Edge window: points {}..={} (n={}) | energy=[{:.3}, {:.3}] eV | mean slope={:.4}\n",
        window.start,
        window.end,
        window.point_count(),
        window.energy_lo,
        window.energy_hi,
        window.mean_slope
    ));
    out.push_str(&format!(
        "Linear fit: slope={:.6} intercept={:.6} r²={:.6}\n",
        fit.slope, fit.intercept, fit.r_squared
    ));
    out.push_str(&format!(
        "Settings: window fraction={} | min points={} | tie tolerance={} | min slope fraction={}\n",
        edge.edge_window_fraction, edge.min_window_points, edge.tie_tolerance, edge.min_slope_fraction
    ));

    out
}

/// Table of edge-window points against the fitted line.
pub fn format_edge_table(rows: &[EdgeResidual]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>12} {:>10} {:>14} {:>14} {:>12}",
            "lambda (nm)", "E (eV)", "tauc_y", "fit_y", "residual"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(&format!("{:-<12} {:-<10} {:-<14} {:-<14} {:-<12}\n", "", "", "", "", ""));

    for r in rows {
        out.push_str(&format!(
            "{:>12.2} {:>10.4} {:>14.6} {:>14.6} {:>12.3e}\n",
            r.wavelength_nm, r.energy_ev, r.tauc_y, r.fit_y, r.residual
        ));
    }

    out
}
