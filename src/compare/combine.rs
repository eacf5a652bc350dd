//! Pointwise log-likelihood tables and their combination.
//!
//! Purpose
//! -------
//! Model-comparison criteria (PSIS-LOO, WAIC) need one pointwise
//! log-likelihood table covering every observation. A joint LATER model
//! produces one table per dataset; this module stores those tables by name
//! and concatenates a selection of them into a single combined variable.
//!
//! Key behaviors
//! -------------
//! - [`LogLikelihoodSet`] holds named `(draw × observation)` tables in
//!   insertion order.
//! - [`LogLikelihoodSet::combine`] appends a new table formed by
//!   concatenating the selected tables along the observation axis.
//! - [`LogLikelihoodSet::combined`] does the same on a copy, leaving the
//!   original untouched.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every selected table must have the same number of draws (rows).
//! - Observation order in the combined table follows the selection order,
//!   and within each table its original column order.
//! - When no selection is given, every existing table except the target name
//!   itself is combined.
use crate::compare::errors::{CompareError, CompareResult};
use ndarray::{Array2, ArrayView2, Axis, concatenate};

/// Default name of the combined variable.
pub const DEFAULT_COMBINED_NAME: &str = "obs";

/// `CombineOpts` — what to combine and under which name.
///
/// Fields
/// ------
/// - `combined_name`: name of the new variable (default `"obs"`).
/// - `var_names`: variables to include, in order; `None` means all.
/// - `overwrite`: replace `combined_name` if it already exists.
#[derive(Debug, Clone, PartialEq)]
pub struct CombineOpts {
    pub combined_name: String,
    pub var_names: Option<Vec<String>>,
    pub overwrite: bool,
}

impl CombineOpts {
    pub fn new(
        combined_name: impl Into<String>, var_names: Option<Vec<String>>, overwrite: bool,
    ) -> CombineOpts {
        CombineOpts { combined_name: combined_name.into(), var_names, overwrite }
    }
}

impl Default for CombineOpts {
    fn default() -> Self {
        CombineOpts::new(DEFAULT_COMBINED_NAME, None, false)
    }
}

/// `LogLikelihoodSet` — named pointwise log-likelihood tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogLikelihoodSet {
    tables: Vec<(String, Array2<f64>)>,
}

impl LogLikelihoodSet {
    pub fn new() -> LogLikelihoodSet {
        LogLikelihoodSet { tables: Vec::new() }
    }

    /// Insert or replace the table `name`, returning the previous table.
    pub fn insert(&mut self, name: impl Into<String>, table: Array2<f64>) -> Option<Array2<f64>> {
        let name = name.into();
        match self.tables.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, table)),
            None => {
                self.tables.push((name, table));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Array2<f64>> {
        self.tables.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Concatenate the selected tables into `opts.combined_name`, in place.
    ///
    /// # Errors
    /// - [`CompareError::NoLogLikelihood`] if the set is empty or the
    ///   selection resolves to no tables.
    /// - [`CompareError::AlreadyExists`] if the target exists and
    ///   `opts.overwrite` is `false`.
    /// - [`CompareError::UnknownVariable`] for a selected name not in the set.
    /// - [`CompareError::SampleCountMismatch`] if draw counts differ.
    pub fn combine(&mut self, opts: &CombineOpts) -> CompareResult<()> {
        let table = self.concatenate_selection(opts)?;
        if self.insert(opts.combined_name.clone(), table).is_some() {
            tracing::warn!(variable = %opts.combined_name, "overwrote combined log-likelihood");
        }
        tracing::debug!(variable = %opts.combined_name, "combined log-likelihoods");
        Ok(())
    }

    /// [`LogLikelihoodSet::combine`] applied to a copy of `self`.
    ///
    /// # Errors
    /// Same as [`LogLikelihoodSet::combine`].
    pub fn combined(&self, opts: &CombineOpts) -> CompareResult<LogLikelihoodSet> {
        let mut copy = self.clone();
        copy.combine(opts)?;
        Ok(copy)
    }

    fn concatenate_selection(&self, opts: &CombineOpts) -> CompareResult<Array2<f64>> {
        if self.is_empty() {
            return Err(CompareError::NoLogLikelihood);
        }
        if self.contains(&opts.combined_name) && !opts.overwrite {
            return Err(CompareError::AlreadyExists { name: opts.combined_name.clone() });
        }

        let selected: Vec<&str> = match &opts.var_names {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => self.names().into_iter().filter(|n| *n != opts.combined_name).collect(),
        };

        let mut views: Vec<ArrayView2<f64>> = Vec::with_capacity(selected.len());
        for name in selected {
            let table = self
                .get(name)
                .ok_or_else(|| CompareError::UnknownVariable { name: name.to_string() })?;
            if let Some(first) = views.first() {
                if first.nrows() != table.nrows() {
                    return Err(CompareError::SampleCountMismatch {
                        name: name.to_string(),
                        expected: first.nrows(),
                        actual: table.nrows(),
                    });
                }
            }
            views.push(table.view());
        }

        if views.is_empty() {
            return Err(CompareError::NoLogLikelihood);
        }
        // Row counts agree, so concatenation along the column axis cannot fail.
        concatenate(Axis(1), &views).map_err(|_| CompareError::NoLogLikelihood)
    }
}
