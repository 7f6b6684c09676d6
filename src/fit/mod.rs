//! Tauc analysis core.
//!
//! Responsibilities:
//!
//! - transform a spectrum into Tauc points (`transform`)
//! - locate the absorption edge (`edge`)
//! - fit a line to it (`linear`)
//! - extrapolate the band gap (`extrapolate`)
//!
//! [`analyze`] chains the four steps. It is a pure function of its inputs.

pub mod edge;
pub mod extrapolate;
pub mod linear;
pub mod transform;

pub use edge::*;
pub use extrapolate::*;
pub use linear::*;
pub use transform::*;

use crate::domain::{BandGapEstimate, EdgeOptions, EdgeWindow, FitResult, Spectrum, TaucPoint, TransitionType};
use crate::error::{Stage, StageError};

/// Every intermediate of one analysis, for reporting and plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct TaucAnalysis {
    pub points: Vec<TaucPoint>,
    pub window: EdgeWindow,
    pub fit: FitResult,
    pub estimate: BandGapEstimate,
}

/// Run transform -> edge selection -> fit -> extrapolation.
pub fn analyze(
    spectrum: &Spectrum,
    transition: TransitionType,
    opts: &EdgeOptions,
) -> Result<TaucAnalysis, StageError> {
    opts.validate().map_err(|e| StageError::new(Stage::Config, e))?;

    let points = to_tauc_points(spectrum, transition).map_err(|e| StageError::new(Stage::Transform, e))?;
    let window = select_edge(&points, opts).map_err(|e| StageError::new(Stage::EdgeSelection, e))?;
    let fit = fit_window(&points, &window).map_err(|e| StageError::new(Stage::Fit, e))?;
    let estimate = extrapolate_band_gap(&fit, transition, energy_range(&points))
        .map_err(|e| StageError::new(Stage::Extrapolation, e))?;

    Ok(TaucAnalysis {
        points,
        window,
        fit,
        estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::synth::{SynthSpec, generate_spectrum};
    use crate::domain::Confidence;
    use crate::error::TaucError;

    const SCENARIO: [(f64, f64); 5] = [(300.0, 0.1), (350.0, 0.3), (400.0, 0.8), (450.0, 0.95), (500.0, 0.97)];

    /// Textbook (uncentred) OLS, independent of `math::ols`.
    fn reference_ols(xy: &[(f64, f64)]) -> (f64, f64) {
        let n = xy.len() as f64;
        let sx: f64 = xy.iter().map(|p| p.0).sum();
        let sy: f64 = xy.iter().map(|p| p.1).sum();
        let sxx: f64 = xy.iter().map(|p| p.0 * p.0).sum();
        let sxy: f64 = xy.iter().map(|p| p.0 * p.1).sum();
        let slope = (n * sxy - sx * sy) / (n * sxx - sx * sx);
        (slope, (sy - slope * sx) / n)
    }

    fn rel_err(got: f64, want: f64) -> f64 {
        (got - want).abs() / want.abs().max(1e-300)
    }

    #[test]
    fn reference_scenario_matches_hand_ols() {
        let spectrum = Spectrum::from_pairs(&SCENARIO);
        let run = analyze(&spectrum, TransitionType::Direct, &EdgeOptions::default()).unwrap();

        // 450, 400 and 350 nm in ascending-energy order.
        assert_eq!((run.window.start, run.window.end), (1, 3));
        let wl: Vec<f64> = run.window.slice(&run.points).iter().map(|p| p.wavelength_nm).collect();
        assert_eq!(wl, vec![450.0, 400.0, 350.0]);

        let xy: Vec<(f64, f64)> = [450.0_f64, 400.0, 350.0]
            .iter()
            .zip([0.95_f64, 0.8, 0.3])
            .map(|(&w, a)| {
                let e = 1239.84198 / w;
                (e, (a * e).powi(2))
            })
            .collect();
        let (slope, intercept) = reference_ols(&xy);
        let gap = -intercept / slope;

        assert!((run.fit.slope - slope).abs() < 1e-9);
        assert!((run.fit.intercept - intercept).abs() < 1e-9);
        assert!((run.estimate.energy_ev - gap).abs() < 1e-9);
        assert!(run.estimate.energy_ev > 2.4 && run.estimate.energy_ev < 4.1);
        assert_eq!(run.estimate.confidence, Confidence::InRange);
    }

    #[test]
    fn known_linear_edge_is_recovered_for_both_transitions() {
        for transition in [TransitionType::Direct, TransitionType::Indirect] {
            let spec = SynthSpec {
                band_gap_ev: 2.2,
                edge_slope: 3.0,
                saturation_ev: 3.6,
                transition,
                ..SynthSpec::default()
            };
            let spectrum = generate_spectrum(&spec).unwrap();
            let run = analyze(&spectrum, transition, &EdgeOptions::default()).unwrap();

            let m = 3.0;
            let b = -3.0 * 2.2;
            assert!(rel_err(run.fit.slope, m) < 1e-6, "{transition:?}: slope {}", run.fit.slope);
            assert!(rel_err(run.fit.intercept, b) < 1e-6, "{transition:?}: intercept {}", run.fit.intercept);
            assert!(rel_err(run.estimate.energy_ev, 2.2) < 1e-6, "{transition:?}: gap {}", run.estimate.energy_ev);
            assert_eq!(run.estimate.transition_type, transition);
        }
    }

    #[test]
    fn noisy_edge_stays_near_the_true_gap() {
        for transition in [TransitionType::Direct, TransitionType::Indirect] {
            let spec = SynthSpec {
                transition,
                noise_sd: 0.002,
                seed: 7,
                ..SynthSpec::default()
            };
            let spectrum = generate_spectrum(&spec).unwrap();
            let run = analyze(&spectrum, transition, &EdgeOptions::default()).unwrap();
            assert!((run.estimate.energy_ev - 2.2).abs() < 0.1, "{transition:?}: gap {}", run.estimate.energy_ev);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let spectrum = Spectrum::from_pairs(&SCENARIO);
        let a = analyze(&spectrum, TransitionType::Direct, &EdgeOptions::default()).unwrap();
        let b = analyze(&spectrum, TransitionType::Direct, &EdgeOptions::default()).unwrap();
        assert_eq!(a.estimate, b.estimate);
        assert_eq!(a, b);
    }

    #[test]
    fn failures_name_their_stage() {
        let two = Spectrum::from_pairs(&[(300.0, 0.5), (400.0, 0.2)]);
        let err = analyze(&two, TransitionType::Direct, &EdgeOptions::default()).unwrap_err();
        assert_eq!(err.stage, Stage::EdgeSelection);
        assert!(matches!(err.source, TaucError::InsufficientData { .. }));

        let flat: Vec<(f64, f64)> = (0..20).map(|i| (300.0 + 10.0 * i as f64, 0.4)).collect();
        let err = analyze(&Spectrum::from_pairs(&flat), TransitionType::Direct, &EdgeOptions::default()).unwrap_err();
        assert_eq!(err.stage, Stage::EdgeSelection);
        assert!(matches!(err.source, TaucError::NoEdgeFound(_)));

        let bad = Spectrum::from_pairs(&[(0.0, 0.5), (300.0, 0.5), (400.0, 0.2)]);
        let err = analyze(&bad, TransitionType::Direct, &EdgeOptions::default()).unwrap_err();
        assert_eq!(err.stage, Stage::Transform);
        assert!(matches!(err.source, TaucError::InvalidInput(_)));
    }

    #[test]
    fn invalid_options_fail_before_transform() {
        let spectrum = Spectrum::from_pairs(&SCENARIO);
        let opts = EdgeOptions {
            edge_window_fraction: 2.0,
            ..EdgeOptions::default()
        };
        let err = analyze(&spectrum, TransitionType::Direct, &opts).unwrap_err();
        assert_eq!(err.stage, Stage::Config);
    }
}
