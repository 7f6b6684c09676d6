//! Text exports: Tauc points as CSV, spectra in the input format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Spectrum;
use crate::error::TaucError;
use crate::fit::TaucAnalysis;

/// Write every Tauc point with its edge membership and fitted value.
pub fn write_tauc_csv(path: &Path, analysis: &TaucAnalysis) -> Result<(), TaucError> {
    let file = File::create(path).map_err(|e| TaucError::file(path, format!("cannot create CSV: {e}")))?;
    let mut out = BufWriter::new(file);
    let write_err = |e: std::io::Error| TaucError::file(path, format!("write failed: {e}"));

    writeln!(out, "wavelength_nm,absorbance,energy_ev,tauc_y,in_edge_window,fit_y").map_err(write_err)?;

    for (idx, p) in analysis.points.iter().enumerate() {
        let in_window = analysis.window.contains(idx);
        let fit_y = if in_window {
            format!("{:.10}", analysis.fit.predict(p.energy_ev))
        } else {
            String::new()
        };
        writeln!(
            out,
            "{},{},{:.10},{:.10},{},{}",
            p.wavelength_nm, p.absorbance, p.energy_ev, p.tauc_y, in_window, fit_y
        )
        .map_err(write_err)?;
    }

    out.flush().map_err(write_err)
}

/// Write a spectrum in the whitespace format `load_spectrum` reads.
///
/// Each `header` line is emitted as a `#` comment.
pub fn write_spectrum(path: &Path, spectrum: &Spectrum, header: &[String]) -> Result<(), TaucError> {
    let file = File::create(path).map_err(|e| TaucError::file(path, format!("cannot create spectrum file: {e}")))?;
    let mut out = BufWriter::new(file);
    let write_err = |e: std::io::Error| TaucError::file(path, format!("write failed: {e}"));

    for line in header {
        writeln!(out, "# {line}").map_err(write_err)?;
    }
    for p in spectrum.points() {
        writeln!(out, "{} {}", p.wavelength_nm, p.absorbance).map_err(write_err)?;
    }

    out.flush().map_err(write_err)
}
