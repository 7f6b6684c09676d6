//! JSON run report.
//!
//! The report is the portable record of a run:
//! - the estimate and the fit it came from
//! - the selected edge window
//! - the settings that produced it
//!
//! The schema is [`ReportFile`].

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BandGapEstimate, EdgeOptions, EdgeWindow};
use crate::error::TaucError;
use crate::fit::TaucAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub version: String,
    pub input: String,
    pub n_points: usize,
    pub estimate: BandGapEstimate,
    pub window: EdgeWindow,
    pub edge_options: EdgeOptions,
}

impl ReportFile {
    pub fn new(input: &Path, analysis: &TaucAnalysis, edge_options: &EdgeOptions) -> Self {
        Self {
            tool: "tauc".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input: input.display().to_string(),
            n_points: analysis.points.len(),
            estimate: analysis.estimate,
            window: analysis.window,
            edge_options: *edge_options,
        }
    }
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, report: &ReportFile) -> Result<(), TaucError> {
    let file = File::create(path).map_err(|e| TaucError::file(path, format!("cannot create report: {e}")))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .map_err(|e| TaucError::file(path, format!("cannot write report JSON: {e}")))
}
