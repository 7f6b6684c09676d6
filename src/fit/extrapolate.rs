//! Band gap extrapolation: where the fitted edge crosses `y = 0`.

use crate::domain::{BandGapEstimate, Confidence, FitResult, TaucPoint, TransitionType};
use crate::error::TaucError;

/// Solve `slope · E + intercept = 0` for `E`.
///
/// `energy_range` is the measured `[lo, hi]` span. An intercept that is
/// non-positive or falls outside it is still returned, flagged
/// `Confidence::OutOfRange` and logged as a warning.
pub fn extrapolate_band_gap(
    fit: &FitResult,
    transition: TransitionType,
    energy_range: [f64; 2],
) -> Result<BandGapEstimate, TaucError> {
    if fit.slope == 0.0 || !fit.slope.is_finite() {
        return Err(TaucError::DegenerateFit(format!(
            "fitted slope is {}; the line never crosses zero",
            fit.slope
        )));
    }

    let energy_ev = -fit.intercept / fit.slope;
    if !energy_ev.is_finite() {
        return Err(TaucError::DegenerateFit(format!(
            "x-intercept is not finite (slope={}, intercept={})",
            fit.slope, fit.intercept
        )));
    }

    let [lo, hi] = energy_range;
    let confidence = if energy_ev > 0.0 && energy_ev >= lo && energy_ev <= hi {
        Confidence::InRange
    } else {
        log::warn!(
            "extrapolated band gap {energy_ev:.4} eV is outside the measured range [{lo:.4}, {hi:.4}] eV; treat it as low confidence"
        );
        Confidence::OutOfRange
    };

    Ok(BandGapEstimate {
        energy_ev,
        transition_type: transition,
        fit: *fit,
        confidence,
    })
}

/// Measured energy span of a Tauc plot.
pub fn energy_range(points: &[TaucPoint]) -> [f64; 2] {
    points.iter().fold([f64::INFINITY, f64::NEG_INFINITY], |[lo, hi], p| {
        [lo.min(p.energy_ev), hi.max(p.energy_ev)]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(slope: f64, intercept: f64) -> FitResult {
        FitResult {
            slope,
            intercept,
            x_range: [2.0, 3.0],
            r_squared: 1.0,
            n_points: 5,
        }
    }

    #[test]
    fn intercept_of_known_line() {
        let est = extrapolate_band_gap(&fit(3.0, -6.6), TransitionType::Direct, [1.5, 4.0]).unwrap();
        assert!((est.energy_ev - 2.2).abs() < 1e-12);
        assert_eq!(est.confidence, Confidence::InRange);
        assert_eq!(est.transition_type, TransitionType::Direct);
    }

    #[test]
    fn zero_slope_is_degenerate() {
        let err = extrapolate_band_gap(&fit(0.0, 1.0), TransitionType::Indirect, [1.5, 4.0]).unwrap_err();
        assert!(matches!(err, TaucError::DegenerateFit(_)));
    }

    #[test]
    fn out_of_range_is_flagged_not_fatal() {
        let est = extrapolate_band_gap(&fit(1.0, 1.0), TransitionType::Direct, [1.5, 4.0]).unwrap();
        assert!((est.energy_ev + 1.0).abs() < 1e-12);
        assert_eq!(est.confidence, Confidence::OutOfRange);

        let est = extrapolate_band_gap(&fit(1.0, -5.0), TransitionType::Direct, [1.5, 4.0]).unwrap();
        assert_eq!(est.confidence, Confidence::OutOfRange);
    }

    #[test]
    fn energy_range_of_points() {
        let pts: Vec<TaucPoint> = [3.0, 2.0, 4.0]
            .iter()
            .map(|&e| TaucPoint {
                energy_ev: e,
                tauc_y: 0.0,
                wavelength_nm: 1239.84198 / e,
                absorbance: 0.0,
            })
            .collect();
        assert_eq!(energy_range(&pts), [2.0, 4.0]);
    }
}
