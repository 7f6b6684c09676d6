//! Spectrum -> Tauc plot transform.
//!
//! `E = hc / λ` and `y = (A · E)^n`, with `n` set by the transition type.
//! Energy falls as wavelength rises, so the wavelength-sorted spectrum is
//! emitted in reverse to give ascending energy.

use crate::domain::{HC_EV_NM, Spectrum, SpectrumPoint, TaucPoint, TransitionType};
use crate::error::TaucError;

/// Photon energy (eV) of a wavelength (nm).
pub fn photon_energy_ev(wavelength_nm: f64) -> f64 {
    HC_EV_NM / wavelength_nm
}

/// Transform a spectrum into Tauc points ordered by ascending energy.
///
/// Every sample is validated before any arithmetic runs, so a bad row anywhere
/// in the spectrum fails the whole transform.
pub fn to_tauc_points(spectrum: &Spectrum, transition: TransitionType) -> Result<Vec<TaucPoint>, TaucError> {
    for (idx, p) in spectrum.points().iter().enumerate() {
        validate_point(idx, p)?;
    }

    let n = transition.exponent();
    let mut out: Vec<TaucPoint> = spectrum
        .points()
        .iter()
        .rev()
        .map(|p| {
            let energy_ev = photon_energy_ev(p.wavelength_nm);
            TaucPoint {
                energy_ev,
                tauc_y: (p.absorbance * energy_ev).powf(n),
                wavelength_nm: p.wavelength_nm,
                absorbance: p.absorbance,
            }
        })
        .collect();

    // Reversal already orders by energy; a stable sort keeps ties in input order.
    out.sort_by(|a, b| a.energy_ev.total_cmp(&b.energy_ev));

    log::debug!(
        "transformed {} points ({}, n={n})",
        out.len(),
        transition.display_name()
    );
    Ok(out)
}

fn validate_point(idx: usize, p: &SpectrumPoint) -> Result<(), TaucError> {
    if !(p.wavelength_nm.is_finite() && p.wavelength_nm > 0.0) {
        return Err(TaucError::InvalidInput(format!(
            "point {} has non-physical wavelength {} nm (must be finite and > 0)",
            idx + 1,
            p.wavelength_nm
        )));
    }
    if !(p.absorbance.is_finite() && p.absorbance >= 0.0) {
        return Err(TaucError::InvalidInput(format!(
            "point {} ({} nm) has non-physical absorbance {} (must be finite and >= 0)",
            idx + 1,
            p.wavelength_nm,
            p.absorbance
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_per_sample_and_energy_wavelength_product_is_hc() {
        let s = Spectrum::from_pairs(&[(300.0, 0.1), (350.0, 0.3), (400.0, 0.8), (450.0, 0.95), (500.0, 0.97)]);
        let pts = to_tauc_points(&s, TransitionType::Direct).unwrap();
        assert_eq!(pts.len(), 5);
        for p in &pts {
            assert!((p.energy_ev * p.wavelength_nm - HC_EV_NM).abs() < 1e-9);
        }
        // Ascending energy means descending wavelength.
        for w in pts.windows(2) {
            assert!(w[1].energy_ev > w[0].energy_ev);
            assert!(w[1].wavelength_nm < w[0].wavelength_nm);
        }
    }

    #[test]
    fn reference_energies_and_direct_exponent() {
        let s = Spectrum::from_pairs(&[(300.0, 0.1), (350.0, 0.3), (400.0, 0.8), (450.0, 0.95), (500.0, 0.97)]);
        let pts = to_tauc_points(&s, TransitionType::Direct).unwrap();
        let energies: Vec<f64> = pts.iter().map(|p| p.energy_ev).collect();
        let expected = [2.480, 2.755, 3.100, 3.543, 4.133];
        for (got, want) in energies.iter().zip(expected) {
            assert!((got - want).abs() < 1e-3, "energy {got} vs {want}");
        }
        for p in &pts {
            let want = (p.absorbance * p.energy_ev).powi(2);
            assert!((p.tauc_y - want).abs() < 1e-12);
        }
    }

    #[test]
    fn indirect_uses_square_root() {
        let s = Spectrum::from_pairs(&[(400.0, 0.5)]);
        let pts = to_tauc_points(&s, TransitionType::Indirect).unwrap();
        let e = HC_EV_NM / 400.0;
        assert!((pts[0].tauc_y - (0.5 * e).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_wavelength_is_invalid() {
        let s = Spectrum::from_pairs(&[(0.0, 0.5), (400.0, 0.5)]);
        let err = to_tauc_points(&s, TransitionType::Direct).unwrap_err();
        assert!(matches!(err, TaucError::InvalidInput(_)));
    }

    #[test]
    fn negative_absorbance_is_invalid() {
        let s = Spectrum::from_pairs(&[(300.0, 0.5), (400.0, -0.01)]);
        let err = to_tauc_points(&s, TransitionType::Indirect).unwrap_err();
        assert!(matches!(err, TaucError::InvalidInput(_)));
    }

    #[test]
    fn empty_spectrum_transforms_to_nothing() {
        let pts = to_tauc_points(&Spectrum::default(), TransitionType::Direct).unwrap();
        assert!(pts.is_empty());
    }
}
