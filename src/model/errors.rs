//! Errors for assembling and evaluating joint LATER models.
//!
//! Covers structural problems (no datasets, ambiguous sharing), parameter
//! vectors of the wrong length, and likelihood-engine failures, which are
//! wrapped unchanged so their payloads survive.
use crate::distribution::errors::LaterError;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for model assembly and evaluation.
pub type ModelResult<T> = Result<T, ModelError>;

/// Unified error type for the model layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    // ---- Structure ----
    /// A model needs at least one dataset.
    NoDatasets,

    /// More than one dataset was supplied without a share type.
    MissingShareType { n_datasets: usize },

    /// A share type string was neither `"shift"` nor `"swivel"`.
    InvalidShareType { value: String },

    /// Two datasets share a name, so their log-likelihood variables collide.
    DuplicateDataset { name: String },

    /// A dataset index past the end of the model.
    DatasetIndex { index: usize, n_datasets: usize },

    // ---- Parameters ----
    /// A parameter block has the wrong number of entries for the layout.
    ParamLength { name: &'static str, expected: usize, actual: usize },

    // ---- Likelihood engine ----
    /// Failure reported by the likelihood engine.
    Later(LaterError),
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Later(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Structure ----
            ModelError::NoDatasets => write!(f, "A LATER model needs at least one dataset."),
            ModelError::MissingShareType { n_datasets } => {
                write!(
                    f,
                    "With multiple datasets ({n_datasets}), a share type ('shift' or 'swivel') must be provided."
                )
            }
            ModelError::InvalidShareType { value } => {
                write!(f, "Unknown share type '{value}'; valid options are 'shift' or 'swivel'.")
            }
            ModelError::DuplicateDataset { name } => {
                write!(f, "Dataset name '{name}' appears more than once; names must be unique.")
            }
            ModelError::DatasetIndex { index, n_datasets } => {
                write!(f, "Dataset index {index} is out of range for {n_datasets} datasets.")
            }
            // ---- Parameters ----
            ModelError::ParamLength { name, expected, actual } => {
                write!(f, "Parameter '{name}' must have {expected} entries; got {actual}.")
            }
            // ---- Likelihood engine ----
            ModelError::Later(err) => write!(f, "{err}"),
        }
    }
}

impl From<LaterError> for ModelError {
    fn from(err: LaterError) -> ModelError {
        ModelError::Later(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<ModelError> for PyErr {
    fn from(err: ModelError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    // Purpose
    // -------
    // Wrapped engine errors keep their message and are exposed as `source`.
    fn wrapped_later_error_is_transparent() {
        let inner = LaterError::InvalidLocation { index: 0, value: f64::INFINITY };
        let err = ModelError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.source().is_some());
        assert!(ModelError::NoDatasets.source().is_none());
    }
}
