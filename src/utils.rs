//! utils — conversion helpers for the Python bindings.
//!
//! Everything here is compiled only with the `python-bindings` feature and
//! only converts Python objects into the array and shape types the Rust
//! core expects; no numerical work happens in this module.
#[cfg(feature = "python-bindings")]
use ndarray::{ArrayD, arr0};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArrayDyn;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Convert an array-like Python object into an owned `ArrayD<f64>`.
///
/// Accepts, in order of preference:
/// - a `float64` NumPy array of any dimension (copied, any memory layout);
/// - an object with `to_numpy()` (e.g. a pandas Series) returning one;
/// - a Python float or int, giving a 0-d array;
/// - a flat sequence of floats, giving a 1-d array.
///
/// # Errors
/// - `TypeError` if none of the above applies.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_arrayd<'py>(raw: &Bound<'py, PyAny>) -> PyResult<ArrayD<f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArrayDyn<f64>>() {
        return Ok(arr.as_array().to_owned());
    }

    if let Ok(obj) = raw.call_method0("to_numpy") {
        if let Ok(arr) = obj.extract::<PyReadonlyArrayDyn<f64>>() {
            return Ok(arr.as_array().to_owned());
        }
    }

    if let Ok(value) = raw.extract::<f64>() {
        return Ok(arr0(value).into_dyn());
    }

    let vec: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a float64 numpy.ndarray, pandas.Series, float, or sequence of float",
        )
    })?;
    Ok(ndarray::Array1::from(vec).into_dyn())
}

/// Convert a NumPy-style `size` argument (`int` or tuple of `int`) into a
/// shape vector.
///
/// # Errors
/// - `TypeError` if `raw` is neither an integer nor a sequence of integers.
#[cfg(feature = "python-bindings")]
pub fn extract_size<'py>(raw: &Bound<'py, PyAny>) -> PyResult<Vec<usize>> {
    if let Ok(n) = raw.extract::<usize>() {
        return Ok(vec![n]);
    }
    raw.extract::<Vec<usize>>()
        .map_err(|_| PyTypeError::new_err("size must be a non-negative int or a tuple of ints"))
}
