//! later_rt — LATER race-model likelihoods for saccadic reaction times, with
//! Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the LATER likelihood engine to Python via the `_later_rt`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing functions and the `dist` submodule used
//! by a thin `later_rt` Python package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`distribution`, `data`, `model`,
//!   `compare`, `reciprobit`, `numerical_stability`) as the public crate
//!   surface.
//! - Define `#[pyfunction]` wrappers for `logp`, `logcdf` and `random` and
//!   the `#[pymodule]` initializer for `_later_rt`.
//! - Register the `dist` submodule under `later_rt` in `sys.modules` so
//!   that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Every Rust error type converts into `ValueError` with its `Display`
//!   text at the PyO3 boundary.
//!
//! Conventions
//! -----------
//! - Python functions accept NumPy arrays of any dimension, Python floats,
//!   or sequences of floats, and return `float64` NumPy arrays with the
//!   broadcast shape (0-d for all-scalar inputs).
//! - `logp` / `logcdf` take promptness (1/s); `random` returns reaction
//!   times (s).
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends directly on the inner modules and can ignore
//!   the items guarded by the `python-bindings` feature.
//! - A pure-Python package imports `_later_rt.dist` to build its
//!   probabilistic-programming distribution on top of these kernels.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_later_pipeline.rs`.
//! - The bindings themselves are exercised from Python.

pub mod compare;
pub mod data;
pub mod distribution;
pub mod model;
pub mod numerical_stability;
pub mod reciprobit;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayDyn};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    distribution::{core::options::SampleOpts, later},
    utils::{extract_f64_arrayd, extract_size},
};

/// Log-density of the LATER race model at promptness `value`.
///
/// Parameters
/// ----------
/// - `value`: array-like
///   Promptness observations (1/s); NaN is rejected.
/// - `mu`, `sigma`, `sigma_e`: array-like
///   Model parameters; `mu` finite, scales finite and `> 0`.
///
/// Returns
/// -------
/// `numpy.ndarray`
///   Natural-log density with the broadcast shape of the inputs.
///
/// Errors
/// ------
/// - `ValueError` for invalid parameters, NaN observations, or shapes that
///   do not broadcast.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(value, mu, sigma, sigma_e, /)")]
pub fn logp<'py>(
    py: Python<'py>, value: &Bound<'py, PyAny>, mu: &Bound<'py, PyAny>,
    sigma: &Bound<'py, PyAny>, sigma_e: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    let out = later::logp(
        &extract_f64_arrayd(value)?,
        &extract_f64_arrayd(mu)?,
        &extract_f64_arrayd(sigma)?,
        &extract_f64_arrayd(sigma_e)?,
    )?;
    Ok(out.into_pyarray(py))
}

/// Log-CDF of the LATER race model at promptness `value`.
///
/// Same parameters, return shape and errors as `logp`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(value, mu, sigma, sigma_e, /)")]
pub fn logcdf<'py>(
    py: Python<'py>, value: &Bound<'py, PyAny>, mu: &Bound<'py, PyAny>,
    sigma: &Bound<'py, PyAny>, sigma_e: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    let out = later::logcdf(
        &extract_f64_arrayd(value)?,
        &extract_f64_arrayd(mu)?,
        &extract_f64_arrayd(sigma)?,
        &extract_f64_arrayd(sigma_e)?,
    )?;
    Ok(out.into_pyarray(py))
}

/// Draw reaction times (s) from the LATER race model.
///
/// Parameters
/// ----------
/// - `mu`, `sigma`, `sigma_e`: array-like
///   Model parameters, validated as in `logp`.
/// - `size`: `None | int | tuple[int, ...]`
///   Output shape; parameters must broadcast to it. `None` uses the
///   broadcast parameter shape.
/// - `seed`: `None | int`
///   Seed for reproducible draws; `None` uses system entropy.
///
/// Errors
/// ------
/// - `ValueError` for invalid parameters or an incompatible `size`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (mu, sigma, sigma_e, size = None, seed = None),
    text_signature = "(mu, sigma, sigma_e, /, size=None, seed=None)"
)]
pub fn random<'py>(
    py: Python<'py>, mu: &Bound<'py, PyAny>, sigma: &Bound<'py, PyAny>,
    sigma_e: &Bound<'py, PyAny>, size: Option<&Bound<'py, PyAny>>, seed: Option<u64>,
) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    let opts = SampleOpts::new(seed, size.map(extract_size).transpose()?);
    let out = later::random_with_opts(
        &extract_f64_arrayd(mu)?,
        &extract_f64_arrayd(sigma)?,
        &extract_f64_arrayd(sigma_e)?,
        &opts,
    )?;
    Ok(out.into_pyarray(py))
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _later_rt<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let dist_mod = PyModule::new(_py, "dist")?;
    dist(_py, m, &dist_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("later_rt.dist", dist_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn dist<'py>(
    _py: Python, later_rt: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(logp, m)?)?;
    m.add_function(wrap_pyfunction!(logcdf, m)?)?;
    m.add_function(wrap_pyfunction!(random, m)?)?;
    later_rt.add_submodule(m)?;
    Ok(())
}
