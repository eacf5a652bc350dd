//! Reciprobit plotting options.
//!
//! Purpose
//! -------
//! Bundle the knobs shared by every reciprobit curve: the reaction-time
//! window and its resolution, how far probabilities are kept away from 0 and
//! 1 before the probit transform, and which quantiles summarize a predictive
//! band.
//!
//! Defaults
//! --------
//! - `min_rt_s = 0.05`, `max_rt_s = 2.0`: 50 ms to 2 s, the usual saccadic
//!   latency window.
//! - `n_points = 1001` log-spaced grid points.
//! - `clip = 1e-4`: probabilities are clipped to `[1e-4, 1 - 1e-4]`.
//! - `quantiles = [0.025, 0.5, 0.975]`: median and 95% band.
use crate::reciprobit::errors::{ReciprobitError, ReciprobitResult};

/// Default lower edge of the reaction-time grid (s).
pub const DEFAULT_MIN_RT_S: f64 = 0.05;
/// Default upper edge of the reaction-time grid (s).
pub const DEFAULT_MAX_RT_S: f64 = 2.0;
/// Default number of grid points.
pub const DEFAULT_N_POINTS: usize = 1001;
/// Default probability clip.
pub const DEFAULT_CLIP: f64 = 1e-4;
/// Default band quantiles.
pub const DEFAULT_QUANTILES: [f64; 3] = [0.025, 0.5, 0.975];

/// `ReciprobitOpts` — grid, clipping and band configuration.
///
/// Fields
/// ------
/// - `min_rt_s`, `max_rt_s`: grid bounds in seconds, `0 < min < max < ∞`.
/// - `n_points`: number of log-spaced grid points, `≥ 2`.
/// - `clip`: probabilities are clipped to `[clip, 1 - clip]`, `0 ≤ clip < 0.5`.
/// - `quantiles`: band quantiles in `[0, 1]`, reported in the given order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReciprobitOpts {
    pub min_rt_s: f64,
    pub max_rt_s: f64,
    pub n_points: usize,
    pub clip: f64,
    pub quantiles: Vec<f64>,
}

impl ReciprobitOpts {
    /// Build and validate options.
    ///
    /// # Errors
    /// See [`ReciprobitOpts::validate`].
    pub fn new(
        min_rt_s: f64, max_rt_s: f64, n_points: usize, clip: f64, quantiles: Vec<f64>,
    ) -> ReciprobitResult<ReciprobitOpts> {
        let opts = ReciprobitOpts { min_rt_s, max_rt_s, n_points, clip, quantiles };
        opts.validate()?;
        Ok(opts)
    }

    /// Builder-style override of the grid window.
    pub fn with_range(mut self, min_rt_s: f64, max_rt_s: f64) -> ReciprobitOpts {
        self.min_rt_s = min_rt_s;
        self.max_rt_s = max_rt_s;
        self
    }

    /// Check every field.
    ///
    /// # Errors
    /// - [`ReciprobitError::InvalidRtRange`], [`ReciprobitError::InvalidPointCount`],
    ///   [`ReciprobitError::InvalidClip`] or [`ReciprobitError::InvalidQuantile`].
    pub fn validate(&self) -> ReciprobitResult<()> {
        let range_ok = self.min_rt_s > 0.0
            && self.max_rt_s.is_finite()
            && self.min_rt_s < self.max_rt_s;
        if !range_ok {
            return Err(ReciprobitError::InvalidRtRange {
                min_rt_s: self.min_rt_s,
                max_rt_s: self.max_rt_s,
            });
        }
        if self.n_points < 2 {
            return Err(ReciprobitError::InvalidPointCount { n_points: self.n_points });
        }
        if !(0.0..0.5).contains(&self.clip) {
            return Err(ReciprobitError::InvalidClip { clip: self.clip });
        }
        if let Some(&value) = self.quantiles.iter().find(|q| !(0.0..=1.0).contains(*q)) {
            return Err(ReciprobitError::InvalidQuantile { value });
        }
        Ok(())
    }

    /// Clip `p` to `[clip, 1 - clip]`.
    pub fn clip_probability(&self, p: f64) -> f64 {
        p.clamp(self.clip, 1.0 - self.clip)
    }
}

impl Default for ReciprobitOpts {
    fn default() -> Self {
        ReciprobitOpts {
            min_rt_s: DEFAULT_MIN_RT_S,
            max_rt_s: DEFAULT_MAX_RT_S,
            n_points: DEFAULT_N_POINTS,
            clip: DEFAULT_CLIP,
            quantiles: DEFAULT_QUANTILES.to_vec(),
        }
    }
}
