//! Synthetic UV-Vis spectra with a known band gap.
//!
//! The Tauc ordinate is built piecewise and then inverted back to absorbance:
//!
//! ```text
//! y(E) = 0                      E <  Eg
//! y(E) = m · (E - Eg)           Eg <= E <= E_sat
//! y(E) = m · (E_sat - Eg)       E >  E_sat
//! A(E) = y(E)^(1/n) / E
//! ```
//!
//! so a noise-free spectrum transforms into an exactly linear edge whose
//! intercept is `Eg`. Optional Gaussian noise is added to the absorbance from a
//! seeded RNG, keeping runs reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{HC_EV_NM, Spectrum, SpectrumPoint, TransitionType};
use crate::error::TaucError;

/// Parameters of a synthetic spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthSpec {
    pub band_gap_ev: f64,
    /// Slope `m` of the Tauc edge.
    pub edge_slope: f64,
    /// Energy where the edge flattens into a plateau.
    pub saturation_ev: f64,
    pub transition: TransitionType,
    pub wavelength_min_nm: f64,
    pub wavelength_max_nm: f64,
    pub n_points: usize,
    /// Standard deviation of absorbance noise (0 disables noise).
    pub noise_sd: f64,
    pub seed: u64,
}

impl Default for SynthSpec {
    fn default() -> Self {
        Self {
            band_gap_ev: 2.2,
            edge_slope: 3.0,
            saturation_ev: 3.6,
            transition: TransitionType::Direct,
            wavelength_min_nm: 300.0,
            wavelength_max_nm: 700.0,
            n_points: 201,
            noise_sd: 0.0,
            seed: 42,
        }
    }
}

impl SynthSpec {
    fn validate(&self) -> Result<(), TaucError> {
        if self.n_points < 2 {
            return Err(TaucError::InvalidInput("synthetic spectrum needs at least 2 points".to_string()));
        }
        if !(self.wavelength_min_nm.is_finite()
            && self.wavelength_max_nm.is_finite()
            && self.wavelength_min_nm > 0.0
            && self.wavelength_max_nm > self.wavelength_min_nm)
        {
            return Err(TaucError::InvalidInput(format!(
                "invalid wavelength range [{}, {}] nm",
                self.wavelength_min_nm, self.wavelength_max_nm
            )));
        }
        if !(self.band_gap_ev.is_finite() && self.band_gap_ev > 0.0) {
            return Err(TaucError::InvalidInput(format!("band gap must be > 0, got {}", self.band_gap_ev)));
        }
        if !(self.saturation_ev.is_finite() && self.saturation_ev > self.band_gap_ev) {
            return Err(TaucError::InvalidInput(format!(
                "saturation energy {} must exceed the band gap {}",
                self.saturation_ev, self.band_gap_ev
            )));
        }
        if !(self.edge_slope.is_finite() && self.edge_slope > 0.0) {
            return Err(TaucError::InvalidInput(format!("edge slope must be > 0, got {}", self.edge_slope)));
        }
        if !(self.noise_sd.is_finite() && self.noise_sd >= 0.0) {
            return Err(TaucError::InvalidInput(format!("noise sd must be >= 0, got {}", self.noise_sd)));
        }
        Ok(())
    }

    /// Noise-free Tauc ordinate at `energy_ev`.
    pub fn tauc_y(&self, energy_ev: f64) -> f64 {
        let plateau = self.edge_slope * (self.saturation_ev - self.band_gap_ev);
        (self.edge_slope * (energy_ev - self.band_gap_ev)).clamp(0.0, plateau)
    }
}

/// Generate a spectrum on an evenly spaced wavelength grid.
pub fn generate_spectrum(spec: &SynthSpec) -> Result<Spectrum, TaucError> {
    spec.validate()?;

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let noise = if spec.noise_sd > 0.0 {
        Some(
            Normal::new(0.0, spec.noise_sd)
                .map_err(|e| TaucError::InvalidInput(format!("noise distribution error: {e}")))?,
        )
    } else {
        None
    };

    let inv_n = 1.0 / spec.transition.exponent();
    let step = (spec.wavelength_max_nm - spec.wavelength_min_nm) / (spec.n_points - 1) as f64;

    let points = (0..spec.n_points)
        .map(|i| {
            let wavelength_nm = spec.wavelength_min_nm + step * i as f64;
            let energy_ev = HC_EV_NM / wavelength_nm;
            let y = spec.tauc_y(energy_ev);
            let clean = if y > 0.0 { y.powf(inv_n) / energy_ev } else { 0.0 };
            let absorbance = match &noise {
                Some(dist) => (clean + dist.sample(&mut rng)).max(0.0),
                None => clean,
            };
            SpectrumPoint {
                wavelength_nm,
                absorbance,
            }
        })
        .collect();

    Ok(Spectrum::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_spans_requested_range() {
        let s = generate_spectrum(&SynthSpec::default()).unwrap();
        assert_eq!(s.len(), 201);
        assert_eq!(s.points()[0].wavelength_nm, 300.0);
        assert!((s.points()[200].wavelength_nm - 700.0).abs() < 1e-9);
    }

    #[test]
    fn absorbance_is_zero_below_the_gap() {
        let spec = SynthSpec::default();
        let s = generate_spectrum(&spec).unwrap();
        for p in s.points() {
            let e = HC_EV_NM / p.wavelength_nm;
            if e < spec.band_gap_ev {
                assert_eq!(p.absorbance, 0.0);
            } else {
                assert!(p.absorbance > 0.0);
            }
        }
    }

    #[test]
    fn same_seed_same_noise() {
        let spec = SynthSpec {
            noise_sd: 0.01,
            seed: 7,
            ..SynthSpec::default()
        };
        let a = generate_spectrum(&spec).unwrap();
        let b = generate_spectrum(&spec).unwrap();
        assert_eq!(a, b);
        assert!(a.points().iter().all(|p| p.absorbance >= 0.0));
    }

    #[test]
    fn rejects_saturation_below_gap() {
        let spec = SynthSpec {
            saturation_ev: 2.0,
            ..SynthSpec::default()
        };
        assert!(matches!(generate_spectrum(&spec), Err(TaucError::InvalidInput(_))));
    }
}
