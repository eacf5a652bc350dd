//! Empirical cumulative distribution function.
//!
//! Purpose
//! -------
//! Summarize a sample by its step-function CDF so that observed reaction
//! times and simulated predictive draws can be compared with model CDFs on a
//! common grid.
//!
//! Key behaviors
//! -------------
//! - [`Ecdf::from_sample`] sorts the sample and records each distinct value
//!   (`quantiles`) together with the fraction of the sample `≤` that value
//!   (`probabilities`).
//! - [`Ecdf::evaluate`] returns `#{xᵢ ≤ x} / n`, right-continuous, `0` below
//!   the smallest value and `1` at or above the largest.
//!
//! Invariants & assumptions
//! ------------------------
//! - `quantiles` is strictly increasing, `probabilities` strictly increasing
//!   in `(0, 1]`, both of equal length, and the last probability is exactly 1.
//! - Samples may contain ±∞ (and negative values, e.g. reaction times of
//!   draws whose winning promptness was negative) but never NaN.
use crate::data::errors::{DataError, DataResult};
use ndarray::Array1;

/// `Ecdf` — right-continuous empirical CDF of a finite sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Ecdf {
    quantiles: Array1<f64>,
    probabilities: Array1<f64>,
    n: usize,
}

impl Ecdf {
    /// Build the empirical CDF of `sample`.
    ///
    /// # Errors
    /// - [`DataError::EmptySample`] if `sample` is empty.
    /// - [`DataError::NanSample`] for the first NaN entry.
    pub fn from_sample(sample: &[f64]) -> DataResult<Ecdf> {
        if sample.is_empty() {
            return Err(DataError::EmptySample);
        }
        if let Some(index) = sample.iter().position(|v| v.is_nan()) {
            return Err(DataError::NanSample { index });
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mut quantiles = Vec::new();
        let mut probabilities = Vec::new();
        for (i, &x) in sorted.iter().enumerate() {
            // Emit at the last occurrence of each distinct value.
            if i + 1 == n || sorted[i + 1] != x {
                quantiles.push(x);
                probabilities.push((i + 1) as f64 / n as f64);
            }
        }

        Ok(Ecdf {
            quantiles: Array1::from_vec(quantiles),
            probabilities: Array1::from_vec(probabilities),
            n,
        })
    }

    /// Distinct sample values in increasing order.
    pub fn quantiles(&self) -> &Array1<f64> {
        &self.quantiles
    }

    /// `P(X ≤ q)` for each entry `q` of [`Ecdf::quantiles`].
    pub fn probabilities(&self) -> &Array1<f64> {
        &self.probabilities
    }

    /// Number of observations the CDF was built from.
    pub fn n_obs(&self) -> usize {
        self.n
    }

    /// Fraction of the sample `≤ x`. NaN input returns NaN.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let quantiles = self.quantiles.as_slice().unwrap_or(&[]);
        match quantiles.partition_point(|&q| q <= x) {
            0 => 0.0,
            k => self.probabilities[k - 1],
        }
    }

    /// [`Ecdf::evaluate`] over every entry of `xs`.
    pub fn evaluate_many(&self, xs: &Array1<f64>) -> Array1<f64> {
        xs.mapv(|x| self.evaluate(x))
    }
}
