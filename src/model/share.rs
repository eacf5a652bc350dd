//! Parameter sharing across datasets.
//!
//! Purpose
//! -------
//! Describe how the LATER parameters of several conditions are tied
//! together, and map between the compact shared representation and the
//! per-dataset `(mu, sigma, sigma_e)` triples the likelihood engine needs.
//!
//! Parameterization
//! ----------------
//! Each dataset `i` is described by three positive quantities:
//!
//! - `sigma[i]`: scale of the later component,
//! - `k[i]`: location in units of scale, so `mu[i] = sigma[i] * k[i]`,
//! - `sigma_e_mod[i]`: early scale relative to `sigma`, so
//!   `sigma_e[i] = sigma[i] * sigma_e_mod[i]`.
//!
//! Sharing
//! -------
//! - [`ShareType::Shift`]: one `sigma` for all datasets, one `k` per dataset.
//!   On a reciprobit plot the lines shift in parallel.
//! - [`ShareType::Swivel`]: one `k` for all datasets, one `sigma` per dataset.
//!   The lines swivel about a common intercept.
//! - No share type: every dataset has its own `sigma` and `k`; only allowed
//!   with a single dataset.
//! - `sigma_e_mod` is always per dataset.
//!
//! Conventions
//! -----------
//! - The flat parameter vector layout is `[sigma.., k.., sigma_e_mod..]` with
//!   block lengths from [`SharedLayout`].
use crate::{
    distribution::core::params::LaterParams,
    model::errors::{ModelError, ModelResult},
};
use std::str::FromStr;

/// How parameters are shared between datasets.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive `"shift"` and
/// `"swivel"`. Unknown names return `ModelError::InvalidShareType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareType {
    Shift,
    Swivel,
}

impl ShareType {
    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ShareType::Shift => "shift",
            ShareType::Swivel => "swivel",
        }
    }
}

impl FromStr for ShareType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shift" => Ok(ShareType::Shift),
            "swivel" => Ok(ShareType::Swivel),
            _ => Err(ModelError::InvalidShareType { value: s.to_string() }),
        }
    }
}

impl std::fmt::Display for ShareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `SharedLayout` — block sizes of the shared parameterization.
///
/// Fields
/// ------
/// - `n_datasets`: number of datasets (≥ 1).
/// - `share`: sharing rule, `None` only when `n_datasets == 1`.
/// - `n_sigma`, `n_k`: length of the `sigma` and `k` blocks (1 or
///   `n_datasets`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedLayout {
    n_datasets: usize,
    share: Option<ShareType>,
    n_sigma: usize,
    n_k: usize,
}

impl SharedLayout {
    /// Derive the layout for `n_datasets` under `share`.
    ///
    /// # Errors
    /// - [`ModelError::NoDatasets`] if `n_datasets == 0`.
    /// - [`ModelError::MissingShareType`] if `n_datasets > 1` and `share` is
    ///   `None`.
    pub fn new(n_datasets: usize, share: Option<ShareType>) -> ModelResult<SharedLayout> {
        if n_datasets == 0 {
            return Err(ModelError::NoDatasets);
        }
        let (n_sigma, n_k) = match share {
            None if n_datasets > 1 => return Err(ModelError::MissingShareType { n_datasets }),
            None => (n_datasets, n_datasets),
            Some(ShareType::Shift) => (1, n_datasets),
            Some(ShareType::Swivel) => (n_datasets, 1),
        };
        Ok(SharedLayout { n_datasets, share, n_sigma, n_k })
    }

    pub fn n_datasets(&self) -> usize {
        self.n_datasets
    }

    pub fn share(&self) -> Option<ShareType> {
        self.share
    }

    pub fn n_sigma(&self) -> usize {
        self.n_sigma
    }

    pub fn n_k(&self) -> usize {
        self.n_k
    }

    /// Length of the `sigma_e_mod` block (always one per dataset).
    pub fn n_sigma_e_mod(&self) -> usize {
        self.n_datasets
    }

    /// Total length of the flat parameter vector.
    pub fn n_params(&self) -> usize {
        self.n_sigma + self.n_k + self.n_datasets
    }

    /// Split a flat `[sigma.., k.., sigma_e_mod..]` vector into blocks.
    ///
    /// # Errors
    /// - [`ModelError::ParamLength`] with name `"theta"` if `flat` does not
    ///   have [`SharedLayout::n_params`] entries.
    pub fn unpack(&self, flat: &[f64]) -> ModelResult<SharedParams> {
        if flat.len() != self.n_params() {
            return Err(ModelError::ParamLength {
                name: "theta",
                expected: self.n_params(),
                actual: flat.len(),
            });
        }
        let (sigma, rest) = flat.split_at(self.n_sigma);
        let (k, sigma_e_mod) = rest.split_at(self.n_k);
        Ok(SharedParams::new(sigma.to_vec(), k.to_vec(), sigma_e_mod.to_vec()))
    }

    /// Check that `params` has the block lengths of this layout.
    ///
    /// # Errors
    /// - [`ModelError::ParamLength`] naming the first mismatched block.
    pub fn check(&self, params: &SharedParams) -> ModelResult<()> {
        let blocks = [
            ("sigma", self.n_sigma, params.sigma.len()),
            ("k", self.n_k, params.k.len()),
            ("sigma_e_mod", self.n_datasets, params.sigma_e_mod.len()),
        ];
        for (name, expected, actual) in blocks {
            if expected != actual {
                return Err(ModelError::ParamLength { name, expected, actual });
            }
        }
        Ok(())
    }

    /// Engine parameters for dataset `i`.
    ///
    /// Shared blocks (length 1) are broadcast to every dataset.
    ///
    /// # Errors
    /// - [`ModelError::ParamLength`] if `params` does not match the layout.
    /// - [`ModelError::Later`] if the derived `(mu, sigma, sigma_e)` is
    ///   invalid (e.g. a non-positive `sigma`).
    /// - [`ModelError::DatasetIndex`] if `i >= n_datasets`.
    pub fn dataset_params(&self, params: &SharedParams, i: usize) -> ModelResult<LaterParams> {
        if i >= self.n_datasets {
            return Err(ModelError::DatasetIndex { index: i, n_datasets: self.n_datasets });
        }
        self.check(params)?;
        let sigma = params.sigma[if self.n_sigma == 1 { 0 } else { i }];
        let k = params.k[if self.n_k == 1 { 0 } else { i }];
        let sigma_e = sigma * params.sigma_e_mod[i];
        Ok(LaterParams::scalar(sigma * k, sigma, sigma_e)?)
    }
}

/// `SharedParams` — one point in the shared parameter space.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedParams {
    pub sigma: Vec<f64>,
    pub k: Vec<f64>,
    pub sigma_e_mod: Vec<f64>,
}

impl SharedParams {
    pub fn new(sigma: Vec<f64>, k: Vec<f64>, sigma_e_mod: Vec<f64>) -> SharedParams {
        SharedParams { sigma, k, sigma_e_mod }
    }

    /// Flatten to `[sigma.., k.., sigma_e_mod..]`.
    pub fn to_flat(&self) -> Vec<f64> {
        self.sigma.iter().chain(&self.k).chain(&self.sigma_e_mod).copied().collect()
    }
}
