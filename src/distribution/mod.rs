//! distribution — LATER race-model likelihood engine.
//!
//! Purpose
//! -------
//! Provide the numerical contract of the LATER model as a self-contained
//! layer: a log-density, a log-CDF, and a sampler for the maximum of two
//! independent Gaussians in promptness space, plus a reaction-time wrapper
//! for callers that observe times rather than rates. Everything else in the
//! crate (data loading, model assembly, comparison, reciprobit plots) sits on
//! top of this subtree.
//!
//! Key behaviors
//! -------------
//! - [`later`] implements [`logp`], [`logcdf`] and [`random`] over
//!   broadcastable `ArrayD<f64>` inputs, and the [`Later`] time-domain
//!   wrapper.
//! - [`core`] holds the building blocks: validated [`LaterParams`],
//!   broadcasting, input guards, unit conversion and [`SampleOpts`].
//! - [`errors`] defines [`LaterError`] / [`LaterResult`], the only error
//!   surface of the engine.
//!
//! Invariants & assumptions
//! ------------------------
//! - Density and CDF are evaluated in log space end to end; no intermediate
//!   probability is exponentiated, so tails far beyond `f64` underflow stay
//!   finite.
//! - Parameters are validated identically by all three operations before any
//!   work is done.
//! - The engine is stateless apart from the caller-owned random source.
//!
//! Conventions
//! -----------
//! - `logp` / `logcdf` take promptness (1/s); samplers return reaction times
//!   (s). [`core::units`] is the single conversion point.
//! - Shapes follow numpy broadcasting; scalars are 0-d arrays.
//! - Nothing in this subtree logs or performs I/O.
//!
//! Downstream usage
//! ----------------
//! - `model::joint` builds one [`Later`] per dataset from shared parameters.
//! - `reciprobit::curves` evaluates [`Later::rt_cdf`] and draws predictive
//!   samples through [`Later::sample_with`].
//! - The Python bindings call [`logp`], [`logcdf`] and [`random_with_opts`]
//!   directly.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule; `tests/integration_later_pipeline.rs`
//!   exercises the engine through the data and model layers.

pub mod core;
pub mod errors;
pub mod later;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{LaterParams, SampleOpts};

pub use self::errors::{LaterError, LaterResult};

pub use self::later::{Later, logcdf, logp, random, random_with_opts};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use later_rt::distribution::prelude::*;
//
// to import the engine surface in a single line.

pub mod prelude {
    pub use super::{
        Later, LaterError, LaterParams, LaterResult, SampleOpts, logcdf, logp, random,
        random_with_opts,
    };
}
