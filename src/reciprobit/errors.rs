//! Errors for reciprobit coordinates and curves.
use crate::{data::errors::DataError, distribution::errors::LaterError};
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for the reciprobit layer.
pub type ReciprobitResult<T> = Result<T, ReciprobitError>;

/// Unified error type for reciprobit computations.
#[derive(Debug, Clone, PartialEq)]
pub enum ReciprobitError {
    // ---- Options ----
    /// Grid bounds must satisfy `0 < min_rt_s < max_rt_s < ∞`.
    InvalidRtRange { min_rt_s: f64, max_rt_s: f64 },

    /// The grid needs at least two points.
    InvalidPointCount { n_points: usize },

    /// Clipping must satisfy `0 ≤ clip < 0.5`.
    InvalidClip { clip: f64 },

    /// Band quantiles must lie in `[0, 1]`.
    InvalidQuantile { value: f64 },

    // ---- Inputs ----
    /// A probability handed to the probit transform is outside `[0, 1]`.
    InvalidProbability { index: usize, value: f64 },

    /// A predictive band needs at least one draw with at least one
    /// observation.
    NoDraws,

    // ---- Wrapped ----
    /// Failure reported by the likelihood engine.
    Later(LaterError),

    /// Failure building an empirical CDF.
    Data(DataError),
}

impl std::error::Error for ReciprobitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReciprobitError::Later(err) => Some(err),
            ReciprobitError::Data(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReciprobitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Options ----
            ReciprobitError::InvalidRtRange { min_rt_s, max_rt_s } => {
                write!(
                    f,
                    "Reaction-time range must satisfy 0 < min < max < inf; got [{min_rt_s}, {max_rt_s}]"
                )
            }
            ReciprobitError::InvalidPointCount { n_points } => {
                write!(f, "Reaction-time grid needs at least 2 points; got {n_points}")
            }
            ReciprobitError::InvalidClip { clip } => {
                write!(f, "Probability clip must satisfy 0 <= clip < 0.5; got {clip}")
            }
            ReciprobitError::InvalidQuantile { value } => {
                write!(f, "Band quantile must lie in [0, 1]; got {value}")
            }
            // ---- Inputs ----
            ReciprobitError::InvalidProbability { index, value } => {
                write!(f, "Probability at index {index} must lie in [0, 1]; got {value}")
            }
            ReciprobitError::NoDraws => {
                write!(f, "Predictive band requires at least one non-empty draw.")
            }
            // ---- Wrapped ----
            ReciprobitError::Later(err) => write!(f, "{err}"),
            ReciprobitError::Data(err) => write!(f, "{err}"),
        }
    }
}

impl From<LaterError> for ReciprobitError {
    fn from(err: LaterError) -> ReciprobitError {
        ReciprobitError::Later(err)
    }
}

impl From<DataError> for ReciprobitError {
    fn from(err: DataError) -> ReciprobitError {
        ReciprobitError::Data(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<ReciprobitError> for PyErr {
    fn from(err: ReciprobitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
