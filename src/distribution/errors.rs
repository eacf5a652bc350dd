//! distribution::errors — error type for the LATER likelihood engine.
//!
//! Purpose
//! -------
//! Provide the single error enum, [`LaterError`], and result alias,
//! [`LaterResult`], returned by every operation of the likelihood engine
//! (`logp`, `logcdf`, `random`) and by the time-domain wrapper. Errors are
//! immediate and deterministic: the engine performs no I/O and never
//! retries.
//!
//! Key behaviors
//! -------------
//! - Invalid parameters (non-finite location, non-positive or non-finite
//!   scale) are reported before any evaluation; the same policy applies to
//!   the density, the log-CDF, and the sampler.
//! - Inputs whose shapes cannot be broadcast together are reported with both
//!   offending shapes instead of producing a silently truncated result.
//! - Numerical tail values are *not* errors; they evaluate to ±∞ in log
//!   space.
//!
//! Conventions
//! -----------
//! - `index` payloads are flat, row-major positions inside the offending
//!   array as supplied by the caller (before broadcasting).
//! - Messages state the violated domain constraint and embed the offending
//!   value.
//! - At the Python boundary every variant maps to `ValueError` with the
//!   `Display` text preserved.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages embed their payloads.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for likelihood-engine operations.
pub type LaterResult<T> = Result<T, LaterError>;

/// Unified error type for the LATER likelihood engine.
///
/// Variants
/// --------
/// - `InvalidScale { name, index, value }`
///   `sigma` or `sigma_e` is NaN, ±∞, or ≤ 0 at flat position `index`.
/// - `InvalidLocation { index, value }`
///   `mu` is NaN or ±∞ at flat position `index`.
/// - `NanObservation { index }`
///   A promptness observation is NaN.
/// - `InvalidReactionTime { index, value }`
///   A reaction time supplied to the time-domain boundary is non-finite or
///   ≤ 0, so its promptness would not be finite and positive.
/// - `ShapeMismatch { lhs, rhs }`
///   Two shapes cannot be broadcast together.
/// - `InvalidSampleShape { requested, params }`
///   The parameter shape does not broadcast to the requested sample shape.
#[derive(Debug, Clone, PartialEq)]
pub enum LaterError {
    // ---- Parameter validation ----
    InvalidScale { name: &'static str, index: usize, value: f64 },
    InvalidLocation { index: usize, value: f64 },

    // ---- Observation validation ----
    NanObservation { index: usize },
    InvalidReactionTime { index: usize, value: f64 },

    // ---- Shapes ----
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },
    InvalidSampleShape { requested: Vec<usize>, params: Vec<usize> },
}

impl std::error::Error for LaterError {}

impl std::fmt::Display for LaterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameter validation ----
            LaterError::InvalidScale { name, index, value } => {
                write!(f, "{name} must be finite and > 0; got {value} at index {index}")
            }
            LaterError::InvalidLocation { index, value } => {
                write!(f, "mu must be finite; got {value} at index {index}")
            }
            // ---- Observation validation ----
            LaterError::NanObservation { index } => {
                write!(f, "Promptness observation at index {index} is NaN")
            }
            LaterError::InvalidReactionTime { index, value } => {
                write!(
                    f,
                    "Reaction time at index {index} must be finite and > 0 seconds; got {value}"
                )
            }
            // ---- Shapes ----
            LaterError::ShapeMismatch { lhs, rhs } => {
                write!(f, "Shapes {lhs:?} and {rhs:?} cannot be broadcast together")
            }
            LaterError::InvalidSampleShape { requested, params } => {
                write!(
                    f,
                    "Parameter shape {params:?} cannot be broadcast to requested sample shape {requested:?}"
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LaterError> for PyErr {
    fn from(err: LaterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
