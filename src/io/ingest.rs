//! UV-Vis text ingest.
//!
//! Accepted format:
//! - one sample per line: `wavelength_nm absorbance [extra columns...]`
//! - columns separated by any whitespace
//! - blank lines and lines starting with `#` are skipped; a `#` later in a
//!   line starts a trailing comment
//! - no header row
//!
//! Rows are parsed strictly: a malformed row fails the whole load with its
//! 1-based line number instead of being silently dropped. Physical checks
//! (positive wavelength, non-negative absorbance) belong to the transform.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::domain::{Spectrum, SpectrumPoint};
use crate::error::TaucError;

/// Load a spectrum from a file.
pub fn load_spectrum(path: &Path) -> Result<Spectrum, TaucError> {
    let file = File::open(path).map_err(|e| TaucError::file(path, format!("cannot open input: {e}")))?;
    let spectrum = parse_spectrum(BufReader::new(file), path)?;
    log::debug!("loaded {} samples from {}", spectrum.len(), path.display());
    Ok(spectrum)
}

/// Parse spectrum text from any buffered reader.
///
/// `source` only labels I/O errors. A line that is not valid UTF-8 is a
/// malformed row, not an I/O failure.
pub fn parse_spectrum<R: BufRead>(reader: R, source: &Path) -> Result<Spectrum, TaucError> {
    let mut points = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => TaucError::InvalidInput(format!("line {line_no}: not valid UTF-8 text")),
            _ => TaucError::file(source, format!("read error at line {line_no}: {e}")),
        })?;

        let content = strip_comment(&line).trim();
        if content.is_empty() {
            continue;
        }

        points.push(parse_row(content, line_no)?);
    }

    Ok(Spectrum::new(points))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_row(content: &str, line_no: usize) -> Result<SpectrumPoint, TaucError> {
    let mut cols = content.split_whitespace();
    let (Some(wl), Some(abs)) = (cols.next(), cols.next()) else {
        return Err(TaucError::InvalidInput(format!(
            "line {line_no}: expected `wavelength absorbance`, found '{content}'"
        )));
    };

    Ok(SpectrumPoint {
        wavelength_nm: parse_number(wl, "wavelength", line_no)?,
        absorbance: parse_number(abs, "absorbance", line_no)?,
    })
}

fn parse_number(token: &str, what: &str, line_no: usize) -> Result<f64, TaucError> {
    token
        .parse::<f64>()
        .map_err(|_| TaucError::InvalidInput(format!("line {line_no}: {what} '{token}' is not a number")))
}
