//! Error types.
//!
//! Two layers:
//!
//! - [`TaucError`]: what the analysis core can fail with. Library callers match
//!   on it.
//! - [`AppError`]: what the `tauc` binary reports. Carries the process exit
//!   code and a single human-readable line that names the failing stage.

use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the analysis core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaucError {
    /// A data row is malformed or physically meaningless.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Too few usable points for the requested step.
    #[error("insufficient data: {needed} points required, {found} available")]
    InsufficientData { needed: usize, found: usize },

    /// No window of the Tauc plot looks like an absorption edge.
    #[error("no absorption edge found: {0}")]
    NoEdgeFound(String),

    /// The linear fit or its intercept is mathematically undefined.
    #[error("degenerate fit: {0}")]
    DegenerateFit(String),

    /// The input could not be read or an output could not be written.
    #[error("file error ({}): {message}", .path.display())]
    File { path: PathBuf, message: String },
}

impl TaucError {
    pub fn file(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::File {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Process exit code used when this error terminates the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            TaucError::InvalidInput(_) | TaucError::File { .. } => 2,
            TaucError::InsufficientData { .. } | TaucError::NoEdgeFound(_) => 3,
            TaucError::DegenerateFit(_) => 4,
        }
    }
}

/// Pipeline stage an error is attributed to in user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Load,
    Transform,
    EdgeSelection,
    Fit,
    Extrapolation,
    Plot,
    Export,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Config => "configuration",
            Stage::Load => "loading",
            Stage::Transform => "tauc transform",
            Stage::EdgeSelection => "edge selection",
            Stage::Fit => "linear fit",
            Stage::Extrapolation => "extrapolation",
            Stage::Plot => "plot rendering",
            Stage::Export => "export",
        }
    }
}

/// A core error together with the stage that raised it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} failed: {source}", .stage.label())]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: TaucError,
}

impl StageError {
    pub fn new(stage: Stage, source: TaucError) -> Self {
        Self { stage, source }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Wrap a core error with the stage it surfaced in.
    pub fn at(stage: Stage, err: TaucError) -> Self {
        Self::new(err.exit_code(), format!("{} failed: {err}", stage.label()))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<StageError> for AppError {
    fn from(err: StageError) -> Self {
        Self::new(err.source.exit_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_prefix_and_exit_code() {
        let err = AppError::at(Stage::EdgeSelection, TaucError::NoEdgeFound("flat data".to_string()));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.message(), "edge selection failed: no absorption edge found: flat data");
    }

    #[test]
    fn stage_error_converts_with_same_message() {
        let err = StageError::new(Stage::Fit, TaucError::DegenerateFit("zero variance".to_string()));
        let app: AppError = err.into();
        assert_eq!(app.exit_code(), 4);
        assert_eq!(app.message(), "linear fit failed: degenerate fit: zero variance");
    }

    #[test]
    fn exit_codes_by_kind() {
        assert_eq!(TaucError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(TaucError::file("a.txt", "missing").exit_code(), 2);
        assert_eq!(TaucError::InsufficientData { needed: 3, found: 1 }.exit_code(), 3);
        assert_eq!(TaucError::DegenerateFit("x".into()).exit_code(), 4);
    }
}
