//! distribution::core — parameters, shapes, guards, units and options.
//!
//! Purpose
//! -------
//! Hold the building blocks the LATER likelihood engine is assembled from,
//! kept separate from the density / CDF / sampler so that each piece can be
//! validated and tested in isolation.
//!
//! Key behaviors
//! -------------
//! - [`shape`]: broadcasting of parameter and observation shapes.
//! - [`params`]: [`LaterParams`], the validated `(mu, sigma, sigma_e)` bundle.
//! - [`validation`]: the guards that implement the invalid-input policy.
//! - [`units`]: the reaction-time ↔ promptness boundary.
//! - [`options`]: [`SampleOpts`] for seeding and sizing draws.
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything in this subtree is pure and synchronous; the only stateful
//!   object is the caller-owned random source built from [`SampleOpts`].

pub mod options;
pub mod params;
pub mod shape;
pub mod units;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::options::SampleOpts;
pub use self::params::LaterParams;
pub use self::shape::{broadcast_pair, broadcast_shapes, broadcast_to};
pub use self::units::{promptness_to_rt, rt_to_promptness};
pub use self::validation::{
    validate_location, validate_promptness, validate_reaction_times, validate_scale,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::options::SampleOpts;
    pub use super::params::LaterParams;
    pub use super::units::{promptness_to_rt, rt_to_promptness};
}
