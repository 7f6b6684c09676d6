//! Absorption-edge selection.
//!
//! The edge is the steepest *sustained* stretch of the Tauc plot. We slide a
//! window over the energy-ordered points, score each window by the mean of
//! its forward-difference slopes, and keep the steepest one.
//!
//! Window shape:
//! - at least `min_window_points` points, capped at `max(3, ceil(n / 2))` so
//!   sparse spectra still produce candidates
//! - at least `edge_window_fraction` of the total energy span wide
//!
//! A window only qualifies when:
//! - `|mean slope|` exceeds `min_slope_fraction · (y span / energy span)`
//! - absorbance actually changes between its first and last point. The `E^n`
//!   factor alone tilts a Tauc plot even when nothing is absorbed, so a flat
//!   absorbance trace never counts as an edge.
//!
//! Windows within `tie_tolerance` of the steepest score are resolved by how
//! close their energy midpoint sits to the middle of the measured range,
//! then by lowest start index.
//!
//! Nothing here depends on the Tauc exponent; direct and indirect plots go
//! through the same arithmetic.

use crate::domain::{EdgeOptions, EdgeWindow, TaucPoint};
use crate::error::TaucError;
use crate::math::{forward_slopes, prefix_sums};

/// Smallest dataset (and window) an edge can be selected from.
pub const MIN_EDGE_POINTS: usize = 3;

/// Relative tolerance for "absorbance did not change".
const ABSORBANCE_REL_TOL: f64 = 1e-9;

/// Pick the absorption-edge window.
pub fn select_edge(points: &[TaucPoint], opts: &EdgeOptions) -> Result<EdgeWindow, TaucError> {
    let n = points.len();
    if n < MIN_EDGE_POINTS {
        return Err(TaucError::InsufficientData {
            needed: MIN_EDGE_POINTS,
            found: n,
        });
    }

    let energy: Vec<f64> = points.iter().map(|p| p.energy_ev).collect();
    let tauc_y: Vec<f64> = points.iter().map(|p| p.tauc_y).collect();

    let e_min = energy[0];
    let e_max = energy[n - 1];
    let span = e_max - e_min;
    if !(span.is_finite() && span > 0.0) {
        return Err(TaucError::NoEdgeFound(
            "all points share a single photon energy".to_string(),
        ));
    }

    let min_points = window_points(n, opts.min_window_points);
    let min_width = opts.edge_window_fraction * span;
    let threshold = opts.min_slope_fraction * value_span(&tauc_y) / span;
    let max_absorbance = points.iter().map(|p| p.absorbance).fold(0.0, f64::max);
    let absorbance_tol = ABSORBANCE_REL_TOL * max_absorbance;

    let slopes = forward_slopes(&energy, &tauc_y);
    let sums = prefix_sums(&slopes);

    // Each start gets the shortest window meeting both the point count and
    // the width requirement. Windows are not extended further: a longer
    // window averages in the flatter tails and dilutes the edge.
    let mut candidates = Vec::new();
    for start in 0..n {
        let mut end = start + min_points - 1;
        if end >= n {
            break;
        }
        while energy[end] - energy[start] < min_width && end < n - 1 {
            end += 1;
        }
        // `end` already reached the last point and the window is still too
        // narrow. Energies are ascending, so every later start is narrower
        // still and the scan can stop here.
        if energy[end] - energy[start] < min_width {
            break;
        }

        // Mean of the forward slopes over [start, end) via prefix sums, so
        // the whole scan stays linear in the number of points.
        let mean_slope = (sums[end] - sums[start]) / (end - start) as f64;
        let absorbance_change = points[end].absorbance - points[start].absorbance;
        if mean_slope.abs() > threshold && absorbance_change.abs() > absorbance_tol {
            candidates.push(EdgeWindow {
                start,
                end,
                energy_lo: energy[start],
                energy_hi: energy[end],
                mean_slope,
            });
        }
    }

    let Some(steepest) = candidates
        .iter()
        .map(|w| w.mean_slope.abs())
        .max_by(f64::total_cmp)
    else {
        return Err(TaucError::NoEdgeFound(format!(
            "no window of {min_points}+ points spanning {min_width:.4} eV has |slope| above {threshold:.4e} with changing absorbance"
        )));
    };

    // Tie-break.
    //
    // Noise makes slope scores within a few percent of each other
    // indistinguishable, and picking the raw maximum then jumps between
    // neighbouring windows from run to run of similar data. Every window
    // within `tie_tolerance` of the steepest score is treated as equally
    // steep. Among those, the edge proper sits between the flat baseline at
    // low energy and saturation at high energy, so the window nearest the
    // middle of the measured range wins.
    let cutoff = (1.0 - opts.tie_tolerance) * steepest;
    let center = 0.5 * (e_min + e_max);

    // Candidates are in start order and only a strictly closer midpoint
    // replaces the current best, so equal distances keep the lowest start.
    let mut best: Option<(&EdgeWindow, f64)> = None;
    for w in candidates.iter().filter(|w| w.mean_slope.abs() >= cutoff) {
        let dist = (w.midpoint() - center).abs();
        match best {
            Some((_, d)) if d <= dist => {}
            _ => best = Some((w, dist)),
        }
    }

    // The steepest window always passes its own cutoff.
    let chosen = best.map(|(w, _)| *w).ok_or_else(|| {
        TaucError::NoEdgeFound("no window survived the tie-break".to_string())
    })?;

    log::debug!(
        "edge window [{}..={}] E=[{:.4}, {:.4}] eV, mean slope {:.4} ({} candidates, steepest {:.4})",
        chosen.start,
        chosen.end,
        chosen.energy_lo,
        chosen.energy_hi,
        chosen.mean_slope,
        candidates.len(),
        steepest
    );
    Ok(chosen)
}

/// Effective minimum window size for a dataset of `n` points.
fn window_points(n: usize, requested: usize) -> usize {
    requested
        .max(MIN_EDGE_POINTS)
        .min(MIN_EDGE_POINTS.max(n.div_ceil(2)))
}

fn value_span(v: &[f64]) -> f64 {
    let (lo, hi) = v
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    if lo.is_finite() && hi.is_finite() { hi - lo } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Spectrum, TransitionType};
    use crate::fit::transform::to_tauc_points;

    fn line_points(energies: &[f64], f: impl Fn(f64) -> f64) -> Vec<TaucPoint> {
        energies
            .iter()
            .map(|&e| {
                let y = f(e);
                TaucPoint {
                    energy_ev: e,
                    tauc_y: y,
                    wavelength_nm: 1239.84198 / e,
                    // Any strictly increasing absorbance passes the change check.
                    absorbance: e,
                }
            })
            .collect()
    }

    #[test]
    fn window_size_caps_for_small_datasets() {
        assert_eq!(window_points(3, 5), 3);
        assert_eq!(window_points(5, 5), 3);
        assert_eq!(window_points(10, 5), 5);
        assert_eq!(window_points(100, 5), 5);
        assert_eq!(window_points(100, 8), 8);
    }

    #[test]
    fn fewer_than_three_points_is_insufficient() {
        let pts = line_points(&[2.0, 2.5], |e| e);
        let err = select_edge(&pts, &EdgeOptions::default()).unwrap_err();
        assert_eq!(err, TaucError::InsufficientData { needed: 3, found: 2 });
    }

    #[test]
    fn flat_absorbance_has_no_edge() {
        let pairs: Vec<(f64, f64)> = (0..40).map(|i| (300.0 + 10.0 * i as f64, 0.5)).collect();
        let pts = to_tauc_points(&Spectrum::from_pairs(&pairs), TransitionType::Direct).unwrap();
        let err = select_edge(&pts, &EdgeOptions::default()).unwrap_err();
        assert!(matches!(err, TaucError::NoEdgeFound(_)));
    }

    #[test]
    fn zero_absorbance_has_no_edge() {
        let pairs: Vec<(f64, f64)> = (0..10).map(|i| (300.0 + 20.0 * i as f64, 0.0)).collect();
        let pts = to_tauc_points(&Spectrum::from_pairs(&pairs), TransitionType::Indirect).unwrap();
        assert!(matches!(
            select_edge(&pts, &EdgeOptions::default()),
            Err(TaucError::NoEdgeFound(_))
        ));
    }

    #[test]
    fn picks_steep_segment_between_plateaus() {
        // Flat, then slope 4 between 2.0 and 3.0 eV, then flat again.
        let energies: Vec<f64> = (0..=40).map(|i| 1.5 + 0.05 * i as f64).collect();
        let pts = line_points(&energies, |e| 4.0 * (e.clamp(2.0, 3.0) - 2.0));
        let w = select_edge(&pts, &EdgeOptions::default()).unwrap();
        assert!(w.energy_lo >= 2.0 - 1e-9 && w.energy_hi <= 3.0 + 1e-9, "{w:?}");
        assert!((w.mean_slope - 4.0).abs() < 1e-9);
    }

    #[test]
    fn near_ties_prefer_the_center_of_the_range() {
        // Two equally steep ramps; the one nearer the middle must win.
        let energies: Vec<f64> = (0..=60).map(|i| 1.0 + 0.05 * i as f64).collect();
        let pts = line_points(&energies, |e| {
            if e < 1.5 {
                2.0 * (e - 1.0)
            } else if e < 2.0 {
                1.0
            } else if e < 2.6 {
                1.0 + 2.0 * (e - 2.0)
            } else {
                2.2
            }
        });
        let w = select_edge(&pts, &EdgeOptions::default()).unwrap();
        assert!(w.energy_lo >= 2.0 - 1e-9 && w.energy_hi <= 2.6 + 1e-9, "{w:?}");
    }

    #[test]
    fn selection_is_deterministic() {
        let energies: Vec<f64> = (0..=30).map(|i| 2.0 + 0.1 * i as f64).collect();
        let pts = line_points(&energies, |e| (e - 2.0).powi(2));
        let a = select_edge(&pts, &EdgeOptions::default()).unwrap();
        let b = select_edge(&pts, &EdgeOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
