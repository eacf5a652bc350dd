//! Reaction-time ↔ promptness conversion.
//!
//! The LATER engine is defined on **promptness** (1/s): both race components
//! are Gaussian on that scale. Callers observe **reaction times** (s). This
//! module is the only place where the two are exchanged:
//!
//! - observed reaction times → promptness, before `logp` / `logcdf`;
//! - sampled promptness → reaction times, after `random`.
//!
//! Notes
//! -----
//! - Both directions are the same reciprocal map; they are kept as two
//!   named functions so call sites state which way they convert.
//! - No validation happens here; see `validation::validate_reaction_times`.
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Convert reaction times in seconds to promptness (1/s).
pub fn rt_to_promptness<S, D>(rt_s: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    rt_s.mapv(f64::recip)
}

/// Convert promptness (1/s) to reaction times in seconds.
pub fn promptness_to_rt<S, D>(promptness: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    promptness.mapv(f64::recip)
}
