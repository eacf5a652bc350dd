//! compare — pointwise log-likelihood bookkeeping for model comparison.
//!
//! Purpose
//! -------
//! Collect per-observation log-likelihood tables produced by a joint model
//! and combine them into the single variable that leave-one-out style
//! comparison criteria expect.
//!
//! Key behaviors
//! -------------
//! - [`combine`]: [`LogLikelihoodSet`] and [`CombineOpts`].
//! - [`errors`]: [`CompareError`] / [`CompareResult`].
//!
//! Conventions
//! -----------
//! - Tables are `(draw × observation)`; combination concatenates along the
//!   observation axis.
//! - Combining emits a `tracing` debug event, and a warning when an existing
//!   variable is overwritten.

pub mod combine;
pub mod errors;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::combine::{CombineOpts, DEFAULT_COMBINED_NAME, LogLikelihoodSet};
pub use self::errors::{CompareError, CompareResult};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{CombineOpts, CompareError, CompareResult, LogLikelihoodSet};
}
