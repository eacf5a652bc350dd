//! Reciprobit coordinate transforms.
//!
//! A reciprobit plot draws the cumulative distribution of reaction times
//! with
//!
//! - the horizontal axis in **reciprocal time**, `x = -1/t`, so that later
//!   times sit further right while the axis stays linear in promptness;
//! - the vertical axis in **probit** units, `y = Φ⁻¹(p)`.
//!
//! Under the LATER model without early responses the reaction-time CDF is a
//! straight line in these coordinates, which is why they are used.
//!
//! Both transforms are their own bookkeeping: `-1/(-1/t) = t`, and
//! [`inverse_probit`] undoes [`probit`] on unclipped values.
use crate::{
    numerical_stability::gaussian::{inverse_probit, probit},
    reciprobit::errors::{ReciprobitError, ReciprobitResult},
};
use ndarray::Array1;

/// Reaction time (s) to reciprocal-time coordinate, `-1/t`.
///
/// `t = 0` maps to `-∞` and `t = ±∞` to `∓0`; no value is an error.
#[inline]
pub fn reciprocal_time(t: f64) -> f64 {
    -1.0 / t
}

/// Reciprocal-time coordinate back to reaction time. The map `x ↦ -1/x` is
/// an involution, so this is the same function as [`reciprocal_time`].
#[inline]
pub fn reciprocal_time_inverse(x: f64) -> f64 {
    -1.0 / x
}

/// [`reciprocal_time`] over an array.
pub fn reciprocal_time_array(t: &Array1<f64>) -> Array1<f64> {
    t.mapv(reciprocal_time)
}

/// [`probit`] over an array of probabilities, with saturated values clamped
/// to `±PROBIT_CLAMP`.
///
/// # Errors
/// - [`ReciprobitError::InvalidProbability`] for the first entry outside
///   `[0, 1]` (including NaN).
pub fn probit_array(p: &Array1<f64>) -> ReciprobitResult<Array1<f64>> {
    for (index, &value) in p.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(ReciprobitError::InvalidProbability { index, value });
        }
    }
    Ok(p.mapv(probit))
}

/// [`inverse_probit`] over an array.
pub fn inverse_probit_array(z: &Array1<f64>) -> Array1<f64> {
    z.mapv(inverse_probit)
}
