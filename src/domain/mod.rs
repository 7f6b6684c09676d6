//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the measured input (`Spectrum`, `SpectrumPoint`)
//! - the Tauc-plot representation (`TaucPoint`, `TransitionType`)
//! - fit outputs (`EdgeWindow`, `FitResult`, `BandGapEstimate`)
//! - run configuration (`EdgeOptions`, `AnalysisConfig`)

pub mod types;

pub use types::*;
