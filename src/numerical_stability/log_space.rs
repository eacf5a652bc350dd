//! Log-space accumulation helpers.
//!
//! Probabilities in this crate are carried as natural logarithms. Adding two
//! of them naïvely (`ln(exp(a) + exp(b))`) overflows for large `a` and
//! underflows to `ln(0) = -∞` for very negative `a`, even when the true
//! result is representable. The helpers here shift by the running maximum
//! first so that every exponentiated term lies in `(0, 1]`.
//!
//! # Provided items
//! - [`log_add_exp(a, b)`]: `ln(exp(a) + exp(b))` for two terms.
//! - [`log_sum_exp(xs)`]: `ln(Σ exp(xᵢ))` over a slice.

/// Numerically stable `ln(exp(a) + exp(b))`.
///
/// Uses `max(a, b) + ln1p(exp(-|a - b|))`, so the exponent is never
/// positive.
///
/// # Behavior
/// - If both inputs are `-∞` the result is `-∞` (sum of two zeros).
/// - If either input is `+∞` the result is `+∞`.
/// - If either input is `NaN` the result is `NaN`.
///
/// # Parameters
/// - `a`, `b`: log-domain terms.
///
/// # Returns
/// - `ln(exp(a) + exp(b))` as `f64`.
#[inline]
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    let hi = a.max(b);
    if hi == f64::NEG_INFINITY || hi == f64::INFINITY {
        return hi;
    }
    let lo = a.min(b);
    hi + (lo - hi).exp().ln_1p()
}

/// Numerically stable `ln(Σᵢ exp(xᵢ))`.
///
/// An empty slice is the log of an empty sum, `-∞`.
///
/// # Parameters
/// - `xs`: log-domain terms.
///
/// # Returns
/// - The log of the sum of the exponentiated terms; `NaN` if any term is
///   `NaN`, `+∞` if any term is `+∞`.
pub fn log_sum_exp(xs: &[f64]) -> f64 {
    if xs.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi == f64::NEG_INFINITY || hi == f64::INFINITY {
        return hi;
    }
    let scaled: f64 = xs.iter().map(|&x| (x - hi).exp()).sum();
    hi + scaled.ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of `log_add_exp` / `log_sum_exp` with the naïve formula on
    //   moderate inputs.
    // - Extreme magnitudes where the naïve formula overflows or underflows.
    // - The `-∞` / `+∞` / NaN conventions.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check agreement with `ln(exp(a) + exp(b))` where that is safe.
    //
    // Given
    // -----
    // - A handful of moderate (a, b) pairs.
    //
    // Expect
    // ------
    // - Relative error below 1e-14.
    fn log_add_exp_matches_naive_formula_on_moderate_inputs() {
        // Arrange
        let pairs = [(0.0, 0.0), (-1.5, 2.0), (3.0, -7.25), (-20.0, -21.0)];

        for (a, b) in pairs {
            // Act
            let stable = log_add_exp(a, b);
            let naive = (f64::exp(a) + f64::exp(b)).ln();

            // Assert
            assert_relative_eq!(stable, naive, max_relative = 1e-14);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure terms far outside the exponent range still combine exactly.
    //
    // Given
    // -----
    // - a = b = -2000 (naïve exp underflows to 0).
    // - a = b = 2000 (naïve exp overflows to ∞).
    //
    // Expect
    // ------
    // - Both results equal `a + ln 2`.
    fn log_add_exp_handles_overflow_and_underflow_regimes() {
        // Act
        let low = log_add_exp(-2000.0, -2000.0);
        let high = log_add_exp(2000.0, 2000.0);

        // Assert
        assert_relative_eq!(low, -2000.0 + std::f64::consts::LN_2, max_relative = 1e-15);
        assert_relative_eq!(high, 2000.0 + std::f64::consts::LN_2, max_relative = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify the extended-real conventions.
    //
    // Given
    // -----
    // - Pairs involving -∞, +∞ and NaN.
    //
    // Expect
    // ------
    // - -∞ acts as a zero term; +∞ dominates; NaN propagates.
    fn log_add_exp_respects_infinite_and_nan_conventions() {
        assert_eq!(log_add_exp(f64::NEG_INFINITY, f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(log_add_exp(f64::NEG_INFINITY, -3.0), -3.0);
        assert_eq!(log_add_exp(f64::INFINITY, -3.0), f64::INFINITY);
        assert!(log_add_exp(f64::NAN, 0.0).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Check the slice reduction against the pairwise helper and the empty
    // convention.
    //
    // Given
    // -----
    // - A slice of three terms and an empty slice.
    //
    // Expect
    // ------
    // - `log_sum_exp` equals a fold of `log_add_exp`; empty gives -∞.
    fn log_sum_exp_agrees_with_pairwise_fold() {
        // Arrange
        let xs = [-1000.0, -1001.0, -999.5];

        // Act
        let reduced = log_sum_exp(&xs);
        let folded = xs.iter().copied().fold(f64::NEG_INFINITY, log_add_exp);

        // Assert
        assert_relative_eq!(reduced, folded, max_relative = 1e-14);
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
    }
}
