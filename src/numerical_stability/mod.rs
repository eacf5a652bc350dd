//! numerical_stability — log-space arithmetic and Gaussian primitives.
//!
//! Purpose
//! -------
//! Collect the numerically stable scalar building blocks used by the LATER
//! likelihood engine: log-sum-exp reductions, the Gaussian log-density, a
//! tail-accurate Gaussian log-CDF, and probit transforms. Everything above
//! this module works in log space and relies on these helpers never
//! exponentiating quantities that can overflow or underflow.
//!
//! Key behaviors
//! -------------
//! - Provide `log_add_exp` / `log_sum_exp` for adding probabilities that are
//!   stored as logarithms, with `-∞` treated as an exact zero.
//! - Provide `norm_logpdf` and `norm_logcdf` for a Gaussian with arbitrary
//!   location and scale, and the standard-normal `log_ndtr`, which stays
//!   accurate for |z| far beyond the range where `Φ(z)` underflows.
//! - Provide `probit` / `inverse_probit` for reciprobit coordinates.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scale arguments are assumed finite and strictly positive; validation
//!   lives in `distribution::core::validation`, not here.
//! - ±∞ inputs map to their extended-real limits; `NaN` propagates.
//!
//! Conventions
//! -----------
//! - All routines are pure `f64 -> f64` functions with no allocation,
//!   logging, or global state, suitable for tight element-wise loops.
//!
//! Downstream usage
//! ----------------
//! - `distribution::later` composes `norm_logpdf`, `norm_logcdf` and
//!   `log_add_exp` into the max-of-two-Gaussians density.
//! - `reciprobit` uses `probit` / `inverse_probit` for its probability axis.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`log_space`] compare against naïve formulas on safe
//!   inputs and check the `-∞` / overflow regimes.
//! - Unit tests in [`gaussian`] check `log_ndtr` against `ln(Φ(z))` where
//!   the latter is representable, continuity across branch cutoffs, and
//!   monotonicity deep into the lower tail.

pub mod gaussian;
pub mod log_space;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::gaussian::{
    inverse_probit, log_ndtr, norm_logcdf, norm_logpdf, probit, PROBIT_CLAMP,
};
pub use self::log_space::{log_add_exp, log_sum_exp};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use later_rt::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::gaussian::{log_ndtr, norm_logcdf, norm_logpdf, probit};
    pub use super::log_space::{log_add_exp, log_sum_exp};
}
