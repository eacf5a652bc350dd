//! Errors for pointwise log-likelihood tables and their combination.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for the comparison layer.
pub type CompareResult<T> = Result<T, CompareError>;

/// Unified error type for log-likelihood combination.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareError {
    /// The set holds no tables, or the selection to combine is empty.
    NoLogLikelihood,

    /// The target variable exists and overwriting was not requested.
    AlreadyExists { name: String },

    /// A requested variable is not in the set.
    UnknownVariable { name: String },

    /// A table's draw count differs from the first selected table.
    SampleCountMismatch { name: String, expected: usize, actual: usize },
}

impl std::error::Error for CompareError {}

impl std::fmt::Display for CompareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareError::NoLogLikelihood => write!(f, "No log-likelihood values found."),
            CompareError::AlreadyExists { name } => {
                write!(f, "Variable '{name}' already exists; either remove it or enable overwrite.")
            }
            CompareError::UnknownVariable { name } => {
                write!(f, "No log-likelihood variable named '{name}'.")
            }
            CompareError::SampleCountMismatch { name, expected, actual } => {
                write!(f, "Variable '{name}' has {actual} draws; expected {expected}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<CompareError> for PyErr {
    fn from(err: CompareError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
