//! Input/output helpers.
//!
//! - spectrum text ingest (`ingest`)
//! - CSV / spectrum exports (`export`)
//! - JSON run report (`report`)

pub mod export;
pub mod ingest;
pub mod report;

pub use export::*;
pub use ingest::*;
pub use report::*;
