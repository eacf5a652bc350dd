//! data — observed reaction-time datasets and their empirical CDFs.
//!
//! Purpose
//! -------
//! Bring observed reaction times into the crate in validated form. This is
//! the boundary where raw trial tables become [`Dataset`] values that the
//! model and reciprobit layers can rely on.
//!
//! Key behaviors
//! -------------
//! - [`dataset`]: [`Dataset`], a named series of reaction times (seconds)
//!   with derived promptness and empirical CDF.
//! - [`ecdf`]: [`Ecdf`], the right-continuous empirical CDF.
//! - [`csv`]: [`load_trials_csv`] / [`parse_trials`] for long trial tables
//!   with `participant`, `condition` and `time` (ms) columns.
//! - [`errors`]: [`DataError`] / [`DataResult`].
//!
//! Conventions
//! -----------
//! - All reaction times inside the crate are in seconds; loaders convert.
//! - Loading emits `tracing` debug events; nothing here installs a
//!   subscriber.

pub mod csv;
pub mod dataset;
pub mod ecdf;
pub mod errors;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::csv::{load_trials_csv, parse_trials};
pub use self::dataset::Dataset;
pub use self::ecdf::Ecdf;
pub use self::errors::{DataError, DataResult};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{DataError, DataResult, Dataset, Ecdf, load_trials_csv, parse_trials};
}
