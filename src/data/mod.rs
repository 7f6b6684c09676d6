//! Data sources.
//!
//! - `synth`: reproducible synthetic spectra with a known band gap

pub mod synth;

pub use synth::*;
