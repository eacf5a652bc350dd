//! reciprobit — numeric reciprobit coordinates and curves.
//!
//! Purpose
//! -------
//! Compute everything a reciprobit figure shows, reaction-time CDFs on a
//! reciprocal-time × probit plane, as plain arrays. Rendering is left to
//! the caller.
//!
//! Key behaviors
//! -------------
//! - [`transforms`]: `-1/t` reciprocal time, clamped probit and its inverse.
//! - [`curves`]: log-spaced RT grid, model CDF curve, observed ECDF curve,
//!   predictive sampling and quantile bands.
//! - [`options`]: [`ReciprobitOpts`] (window, resolution, clipping,
//!   quantiles).
//! - [`errors`]: [`ReciprobitError`] / [`ReciprobitResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Curves are clipped to `[clip, 1 - clip]` so probit values stay finite.
//! - Nothing in this subtree logs.

pub mod curves;
pub mod errors;
pub mod options;
pub mod transforms;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::curves::{
    CdfCurve, PredictiveBand, ecdf_curve, model_cdf_curve, predictive_band, rt_grid,
    sample_predictive,
};
pub use self::errors::{ReciprobitError, ReciprobitResult};
pub use self::options::ReciprobitOpts;
pub use self::transforms::{
    inverse_probit_array, probit_array, reciprocal_time, reciprocal_time_array,
    reciprocal_time_inverse,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{
        CdfCurve, PredictiveBand, ReciprobitError, ReciprobitOpts, ReciprobitResult, ecdf_curve,
        model_cdf_curve, predictive_band, rt_grid, sample_predictive,
    };
}
