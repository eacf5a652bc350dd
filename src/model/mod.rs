//! model — assembly of joint LATER models over several datasets.
//!
//! Purpose
//! -------
//! Describe how the LATER parameters of several experimental conditions are
//! shared and evaluate the resulting joint log-likelihood. This is the
//! deterministic part of a hierarchical LATER analysis; priors and
//! posterior sampling belong to the caller.
//!
//! Key behaviors
//! -------------
//! - [`share`]: [`ShareType`] (shift / swivel), [`SharedLayout`] block sizes
//!   and the mapping to per-dataset parameters, [`SharedParams`].
//! - [`joint`]: [`JointModel`], joint and pointwise log-likelihoods.
//! - [`errors`]: [`ModelError`] / [`ModelResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Per dataset, `mu = sigma * k` and `sigma_e = sigma * sigma_e_mod`.
//! - More than one dataset requires an explicit share type.
//!
//! Conventions
//! -----------
//! - Assembly emits a `tracing` debug event describing the layout.
//!
//! Downstream usage
//! ----------------
//! - [`JointModel::log_likelihood_table`] feeds
//!   [`crate::compare::LogLikelihoodSet`] for model comparison.

pub mod errors;
pub mod joint;
pub mod share;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ModelError, ModelResult};
pub use self::joint::{JointModel, OBS_PREFIX};
pub use self::share::{ShareType, SharedLayout, SharedParams};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{JointModel, ModelError, ModelResult, ShareType, SharedLayout, SharedParams};
}
