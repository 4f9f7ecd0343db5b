//! Errors surfaced to callers of the ranking engine.

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use thiserror::Error;

/// Structural failures. Per-task data problems never produce one of these;
/// they are defaulted during normalization instead.
#[derive(Error, Debug)]
pub enum RankError {
    #[error("Expected a sequence of tasks, got {0}")]
    NotASequence(&'static str),
    #[error("Malformed task payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("No tasks analyzed yet. Please analyze tasks first.")]
    NothingAnalyzed,
}

impl From<RankError> for PyErr {
    fn from(err: RankError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}
