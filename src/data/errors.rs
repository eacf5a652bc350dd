//! Errors for reaction-time datasets, empirical CDFs and trial-table loading.
//!
//! ## Conventions
//! - **Indices are 0-based**; `line` numbers in parse errors are 1-based, as
//!   shown by a text editor.
//! - Reaction times must be **strictly positive and finite** seconds.
//! - I/O failures carry the offending path and the OS message as text so the
//!   error stays `Clone + PartialEq`.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for the data layer.
pub type DataResult<T> = Result<T, DataError>;

/// Unified error type for datasets and loaders.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    // ---- Dataset validation ----
    /// A dataset was constructed with no observations.
    EmptyDataset { name: String },

    /// A reaction time is NaN, ±inf, or ≤ 0.
    InvalidReactionTime { name: String, index: usize, value: f64 },

    // ---- Empirical CDF ----
    /// An empirical CDF needs at least one sample.
    EmptySample,

    /// An empirical CDF sample contains NaN.
    NanSample { index: usize },

    // ---- Loading ----
    /// The file could not be opened or read.
    Io { path: String, reason: String },

    /// The header row lacks a required column.
    MissingColumn { column: &'static str },

    /// A data row could not be interpreted.
    Parse { line: usize, reason: String },
}

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Dataset validation ----
            DataError::EmptyDataset { name } => {
                write!(f, "Dataset '{name}' has no observations.")
            }
            DataError::InvalidReactionTime { name, index, value } => {
                write!(
                    f,
                    "Dataset '{name}': reaction time at index {index} must be finite and > 0; got {value}"
                )
            }
            // ---- Empirical CDF ----
            DataError::EmptySample => write!(f, "Empirical CDF requires a non-empty sample."),
            DataError::NanSample { index } => {
                write!(f, "Empirical CDF sample is NaN at index {index}.")
            }
            // ---- Loading ----
            DataError::Io { path, reason } => write!(f, "Failed to read '{path}': {reason}"),
            DataError::MissingColumn { column } => {
                write!(f, "Header row is missing required column '{column}'.")
            }
            DataError::Parse { line, reason } => write!(f, "Line {line}: {reason}"),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<DataError> for PyErr {
    fn from(err: DataError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
