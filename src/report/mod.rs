//! Reporting: fit residuals over the edge window and formatted terminal output.

use crate::fit::TaucAnalysis;

pub mod format;

pub use format::*;

/// One edge-window point with its fitted value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeResidual {
    pub wavelength_nm: f64,
    pub energy_ev: f64,
    pub tauc_y: f64,
    pub fit_y: f64,
    pub residual: f64,
}

/// Fitted values and residuals for the points the line was fitted to.
pub fn edge_residuals(analysis: &TaucAnalysis) -> Vec<EdgeResidual> {
    analysis
        .window
        .slice(&analysis.points)
        .iter()
        .map(|p| {
            let fit_y = analysis.fit.predict(p.energy_ev);
            EdgeResidual {
                wavelength_nm: p.wavelength_nm,
                energy_ev: p.energy_ev,
                tauc_y: p.tauc_y,
                fit_y,
                residual: p.tauc_y - fit_y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::synth::{SynthSpec, generate_spectrum};
    use crate::domain::EdgeOptions;
    use crate::fit::analyze;

    #[test]
    fn noise_free_edge_has_zero_residuals() {
        let spec = SynthSpec::default();
        let spectrum = generate_spectrum(&spec).unwrap();
        let run = analyze(&spectrum, spec.transition, &EdgeOptions::default()).unwrap();

        let rows = edge_residuals(&run);
        assert_eq!(rows.len(), run.window.point_count());
        let scale = rows.iter().map(|r| r.tauc_y.abs()).fold(0.0, f64::max);
        for r in &rows {
            assert!(r.residual.abs() <= 1e-9 * scale, "{r:?}");
        }
    }
}
