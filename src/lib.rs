//! `tauc-gap` library crate.
//!
//! Optical band gap estimation from UV-Vis absorbance with the Tauc method.
//! The binaries (`tauc`, `tauc-synth`) are thin wrappers around this library
//! so the analysis is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod tui;
