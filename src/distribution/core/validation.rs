//! distribution::core::validation — parameter and observation guards.
//!
//! Purpose
//! -------
//! Centralize the checks that stand between caller-supplied arrays and the
//! element-wise likelihood kernels, so that `logp`, `logcdf` and `random`
//! apply one consistent invalid-parameter policy: reject up front with a
//! [`LaterError`], never coerce.
//!
//! Key behaviors
//! -------------
//! - [`validate_location`]: every `mu` must be finite.
//! - [`validate_scale`]: every `sigma` / `sigma_e` must be finite and `> 0`.
//! - [`validate_promptness`]: observations may be any extended real except
//!   NaN; ±∞ are legitimate tail points.
//! - [`validate_reaction_times`]: reaction times must be finite and `> 0`,
//!   so that their reciprocals are finite positive promptness values.
//!
//! Conventions
//! -----------
//! - Scans stop at the first offending element; the reported index is its
//!   flat position in logical (row-major) order.
//! - No allocation besides error construction.
use crate::distribution::errors::{LaterError, LaterResult};
use ndarray::{ArrayBase, Data, Dimension};

/// Check that every location parameter is finite.
///
/// # Errors
/// - [`LaterError::InvalidLocation`] for the first NaN or ±∞ entry.
pub fn validate_location<S, D>(mu: &ArrayBase<S, D>) -> LaterResult<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    for (index, &value) in mu.iter().enumerate() {
        if !value.is_finite() {
            return Err(LaterError::InvalidLocation { index, value });
        }
    }
    Ok(())
}

/// Check that every scale parameter is finite and strictly positive.
///
/// # Arguments
/// - `name`: parameter name reported in the error (`"sigma"` or
///   `"sigma_e"`).
/// - `scale`: the scale array.
///
/// # Errors
/// - [`LaterError::InvalidScale`] for the first NaN, ±∞ or `≤ 0` entry.
pub fn validate_scale<S, D>(name: &'static str, scale: &ArrayBase<S, D>) -> LaterResult<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    for (index, &value) in scale.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(LaterError::InvalidScale { name, index, value });
        }
    }
    Ok(())
}

/// Check that no promptness observation is NaN.
///
/// # Errors
/// - [`LaterError::NanObservation`] for the first NaN entry.
pub fn validate_promptness<S, D>(value: &ArrayBase<S, D>) -> LaterResult<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    match value.iter().position(|v| v.is_nan()) {
        Some(index) => Err(LaterError::NanObservation { index }),
        None => Ok(()),
    }
}

/// Check that every reaction time is finite and strictly positive.
///
/// # Errors
/// - [`LaterError::InvalidReactionTime`] for the first offending entry.
pub fn validate_reaction_times<S, D>(rt_s: &ArrayBase<S, D>) -> LaterResult<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    for (index, &value) in rt_s.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(LaterError::InvalidReactionTime { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each guard's success path.
    // - Each guard's failure path, including the reported flat index.
    // - Acceptance of ±∞ promptness values.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure well-formed parameters pass every guard.
    //
    // Given
    // -----
    // - mu = [3, -1], sigma = 1, sigma_e = [[5], [0.1]].
    //
    // Expect
    // ------
    // - All guards return Ok(()).
    fn guards_accept_valid_parameters() {
        assert!(validate_location(&array![3.0, -1.0]).is_ok());
        assert!(validate_scale("sigma", &arr0(1.0)).is_ok());
        assert!(validate_scale("sigma_e", &array![[5.0], [0.1]]).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-positive and non-finite scales are rejected with the
    // flat index of the first offender.
    //
    // Given
    // -----
    // - A 2×2 sigma array with 0.0 at position (1, 0) and NaN after it.
    //
    // Expect
    // ------
    // - `InvalidScale { name: "sigma", index: 2, value: 0.0 }`.
    fn validate_scale_reports_first_offending_flat_index() {
        // Arrange
        let sigma = array![[1.0, 2.0], [0.0, f64::NAN]];

        // Act
        let result = validate_scale("sigma", &sigma);

        // Assert
        assert_eq!(result, Err(LaterError::InvalidScale { name: "sigma", index: 2, value: 0.0 }));
    }

    #[test]
    // Purpose
    // -------
    // Infinite scales and locations are invalid.
    //
    // Expect
    // ------
    // - `InvalidScale` for sigma_e = +∞; `InvalidLocation` for mu = -∞.
    fn guards_reject_infinite_parameters() {
        assert!(matches!(
            validate_scale("sigma_e", &arr0(f64::INFINITY)),
            Err(LaterError::InvalidScale { name: "sigma_e", .. })
        ));
        assert!(matches!(
            validate_location(&array![0.0, f64::NEG_INFINITY]),
            Err(LaterError::InvalidLocation { index: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Promptness observations may sit at ±∞ but not be NaN.
    //
    // Expect
    // ------
    // - [-∞, 0, +∞] passes; [1, NaN] fails at index 1.
    fn validate_promptness_allows_infinities_but_not_nan() {
        assert!(validate_promptness(&array![f64::NEG_INFINITY, 0.0, f64::INFINITY]).is_ok());
        assert_eq!(
            validate_promptness(&array![1.0, f64::NAN]),
            Err(LaterError::NanObservation { index: 1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Reaction times must be strictly positive and finite.
    //
    // Expect
    // ------
    // - [0.2, 0.35] passes; [0.2, 0.0] and [f64::INFINITY] fail.
    fn validate_reaction_times_requires_positive_finite_values() {
        assert!(validate_reaction_times(&array![0.2, 0.35]).is_ok());
        assert_eq!(
            validate_reaction_times(&array![0.2, 0.0]),
            Err(LaterError::InvalidReactionTime { index: 1, value: 0.0 })
        );
        assert!(validate_reaction_times(&array![f64::INFINITY]).is_err());
    }
}
