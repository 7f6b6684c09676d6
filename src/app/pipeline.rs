//! Shared analysis pipeline used by the `tauc` binary and tests.
//!
//! load -> transform -> edge selection -> fit -> extrapolation
//!
//! Presentation (printing, plotting, exports) lives in `app`.

use crate::domain::{AnalysisConfig, Spectrum};
use crate::error::{AppError, Stage};
use crate::fit::TaucAnalysis;

/// All computed outputs of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub spectrum: Spectrum,
    pub analysis: TaucAnalysis,
}

/// Load the input file named by `config` and analyse it.
pub fn run_analysis(config: &AnalysisConfig) -> Result<RunOutput, AppError> {
    let spectrum = crate::io::load_spectrum(&config.input_path).map_err(|e| AppError::at(Stage::Load, e))?;
    run_with_spectrum(config, spectrum)
}

/// Analyse an already loaded spectrum.
///
/// Out-of-range estimates are returned as-is unless `config.strict` is set.
pub fn run_with_spectrum(config: &AnalysisConfig, spectrum: Spectrum) -> Result<RunOutput, AppError> {
    let analysis = crate::fit::analyze(&spectrum, config.transition, &config.edge)?;

    if config.strict {
        analysis
            .estimate
            .ensure_in_range()
            .map_err(|e| AppError::at(Stage::Extrapolation, e))?;
    }

    Ok(RunOutput { spectrum, analysis })
}
