//! LATER model parameters.
//!
//! Purpose
//! -------
//! Hold the three parameter arrays of the LATER race model in validated
//! form, together with their common broadcast shape:
//!
//! - `mu`: location of the primary ("later") Gaussian in promptness units;
//! - `sigma`: scale of the primary Gaussian;
//! - `sigma_e`: scale of the zero-mean "early" Gaussian.
//!
//! Invariants
//! ----------
//! - Every `mu` is finite; every `sigma` and `sigma_e` is finite and `> 0`.
//! - The three arrays broadcast together; `shape` is the broadcast shape.
//! - Values are immutable after construction, so these invariants hold for
//!   the lifetime of the value.
use crate::distribution::{
    core::{
        shape::broadcast_shapes,
        validation::{validate_location, validate_scale},
    },
    errors::LaterResult,
};
use ndarray::{ArrayD, arr0};

/// `LaterParams` — validated `(mu, sigma, sigma_e)` arrays.
///
/// Scalars are stored as 0-dimensional arrays, so scalar and array-valued
/// parameterizations go through the same broadcasting code path.
///
/// Fields
/// ------
/// - `mu`, `sigma`, `sigma_e`: `ArrayD<f64>`
///   Parameter arrays as supplied (not yet broadcast).
/// - `shape`: `Vec<usize>`
///   Their common broadcast shape.
#[derive(Debug, Clone, PartialEq)]
pub struct LaterParams {
    mu: ArrayD<f64>,
    sigma: ArrayD<f64>,
    sigma_e: ArrayD<f64>,
    shape: Vec<usize>,
}

impl LaterParams {
    /// Validate and bundle array-valued parameters.
    ///
    /// # Errors
    /// - [`LaterError::InvalidLocation`](crate::distribution::errors::LaterError::InvalidLocation)
    ///   if any `mu` is non-finite.
    /// - [`LaterError::InvalidScale`](crate::distribution::errors::LaterError::InvalidScale)
    ///   if any `sigma` / `sigma_e` is non-finite or `≤ 0`.
    /// - [`LaterError::ShapeMismatch`](crate::distribution::errors::LaterError::ShapeMismatch)
    ///   if the three shapes do not broadcast together.
    ///
    /// # Examples
    /// ```rust
    /// # use later_rt::distribution::core::params::LaterParams;
    /// # use ndarray::{arr0, array};
    /// let params = LaterParams::new(
    ///     array![3.0, 4.0].into_dyn(),
    ///     arr0(1.0).into_dyn(),
    ///     arr0(5.0).into_dyn(),
    /// )
    /// .unwrap();
    /// assert_eq!(params.shape(), &[2]);
    /// ```
    pub fn new(mu: ArrayD<f64>, sigma: ArrayD<f64>, sigma_e: ArrayD<f64>) -> LaterResult<Self> {
        validate_location(&mu)?;
        validate_scale("sigma", &sigma)?;
        validate_scale("sigma_e", &sigma_e)?;
        let shape = broadcast_shapes(&[mu.shape(), sigma.shape(), sigma_e.shape()])?;
        Ok(LaterParams { mu, sigma, sigma_e, shape })
    }

    /// Validate and bundle scalar parameters.
    ///
    /// # Errors
    /// Same parameter errors as [`LaterParams::new`].
    pub fn scalar(mu: f64, sigma: f64, sigma_e: f64) -> LaterResult<Self> {
        LaterParams::new(arr0(mu).into_dyn(), arr0(sigma).into_dyn(), arr0(sigma_e).into_dyn())
    }

    /// Location of the primary component.
    pub fn mu(&self) -> &ArrayD<f64> {
        &self.mu
    }

    /// Scale of the primary component.
    pub fn sigma(&self) -> &ArrayD<f64> {
        &self.sigma
    }

    /// Scale of the early component.
    pub fn sigma_e(&self) -> &ArrayD<f64> {
        &self.sigma_e
    }

    /// Broadcast shape of the three parameter arrays.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}
