//! Named reaction-time datasets.
//!
//! Purpose
//! -------
//! Provide a small, validated container for one condition's observed
//! reaction times, together with the derived quantities every downstream
//! consumer needs: promptness values for the likelihood engine and an
//! empirical CDF for reciprobit comparison.
//!
//! Key behaviors
//! -------------
//! - [`Dataset::new`] checks that the series is non-empty and that every
//!   reaction time is finite and strictly positive, then derives
//!   `promptness = 1 / rt_s` and the [`Ecdf`] of `rt_s`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Reaction times are in **seconds**; loaders convert before construction.
//! - Values are immutable after construction, so `promptness` and `ecdf`
//!   always describe `rt_s`.
//!
//! Downstream usage
//! ----------------
//! - `model::joint` evaluates one time-domain likelihood per dataset.
//! - `reciprobit::curves::ecdf_curve` plots [`Dataset::ecdf`] on an RT grid.
use crate::{
    data::{
        ecdf::Ecdf,
        errors::{DataError, DataResult},
    },
    distribution::core::units::rt_to_promptness,
};
use ndarray::{Array1, ArrayD};

/// `Dataset` — a named, validated series of reaction times.
///
/// Fields
/// ------
/// - `name`: identifier, conventionally `participant_condition`.
/// - `rt_s`: observed reaction times in seconds.
/// - `promptness`: `1 / rt_s`, element-wise.
/// - `ecdf`: empirical CDF of `rt_s`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    rt_s: Array1<f64>,
    promptness: Array1<f64>,
    ecdf: Ecdf,
}

impl Dataset {
    /// Validate `rt_s` and build the dataset.
    ///
    /// # Errors
    /// - [`DataError::EmptyDataset`] if `rt_s` is empty.
    /// - [`DataError::InvalidReactionTime`] for the first non-finite or
    ///   non-positive reaction time.
    ///
    /// # Examples
    /// ```rust
    /// # use later_rt::data::dataset::Dataset;
    /// # use ndarray::array;
    /// let ds = Dataset::new("AS_p95", array![0.2, 0.25, 0.5]).unwrap();
    /// assert_eq!(ds.promptness()[0], 5.0);
    /// ```
    pub fn new(name: impl Into<String>, rt_s: Array1<f64>) -> DataResult<Dataset> {
        let name = name.into();
        if rt_s.is_empty() {
            return Err(DataError::EmptyDataset { name });
        }
        for (index, &value) in rt_s.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(DataError::InvalidReactionTime { name, index, value });
            }
        }

        let promptness = rt_to_promptness(&rt_s);
        let ecdf = Ecdf::from_sample(&rt_s.to_vec())?;
        Ok(Dataset { name, rt_s, promptness, ecdf })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rt_s(&self) -> &Array1<f64> {
        &self.rt_s
    }

    pub fn promptness(&self) -> &Array1<f64> {
        &self.promptness
    }

    pub fn ecdf(&self) -> &Ecdf {
        &self.ecdf
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rt_s.len()
    }

    /// Always `false` for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.rt_s.is_empty()
    }

    /// Reaction times as a dynamic-dimension array, the input form of the
    /// likelihood engine.
    pub fn rt_s_dyn(&self) -> ArrayD<f64> {
        self.rt_s.clone().into_dyn()
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dataset named '{}' with {} data points", self.name, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Construction derives promptness and the ECDF from the reaction times.
    //
    // Given
    // -----
    // - rt_s = [0.25, 0.2, 0.5].
    //
    // Expect
    // ------
    // - promptness = [4, 5, 2]; ECDF quantiles sorted; Display mentions the
    //   name and size.
    fn new_derives_promptness_and_ecdf() {
        // Arrange / Act
        let ds = Dataset::new("AS_p50", array![0.25, 0.2, 0.5]).unwrap();

        // Assert
        assert_relative_eq!(ds.promptness()[0], 4.0);
        assert_relative_eq!(ds.promptness()[1], 5.0);
        assert_relative_eq!(ds.promptness()[2], 2.0);
        assert_eq!(ds.ecdf().quantiles(), &array![0.2, 0.25, 0.5]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.to_string(), "Dataset named 'AS_p50' with 3 data points");
        assert_eq!(ds.rt_s_dyn().shape(), &[3]);
    }

    #[test]
    // Purpose
    // -------
    // Empty series and invalid reaction times are rejected.
    //
    // Expect
    // ------
    // - EmptyDataset for []; InvalidReactionTime at index 1 for [0.2, 0.0]
    //   and at index 0 for [inf].
    fn new_rejects_empty_and_invalid_reaction_times() {
        assert_eq!(
            Dataset::new("x", Array1::zeros(0)),
            Err(DataError::EmptyDataset { name: "x".to_string() })
        );
        assert_eq!(
            Dataset::new("x", array![0.2, 0.0]),
            Err(DataError::InvalidReactionTime { name: "x".to_string(), index: 1, value: 0.0 })
        );
        assert!(matches!(
            Dataset::new("x", array![f64::INFINITY]),
            Err(DataError::InvalidReactionTime { index: 0, .. })
        ));
    }
}
