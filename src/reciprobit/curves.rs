//! Reciprobit curves: model CDFs, observed ECDFs and predictive bands.
//!
//! Purpose
//! -------
//! Produce the numbers behind a reciprobit figure without drawing anything:
//! probability curves evaluated on a common log-spaced reaction-time grid,
//! clipped away from 0 and 1 so that they can be probit-transformed.
//!
//! Key behaviors
//! -------------
//! - [`rt_grid`]: `n_points` log-spaced reaction times on
//!   `[min_rt_s, max_rt_s]`.
//! - [`model_cdf_curve`]: the model's `P(0 < RT ≤ t)` on the grid, from the
//!   log-CDF of the likelihood engine.
//! - [`ecdf_curve`]: an empirical CDF on the grid.
//! - [`sample_predictive`]: one row of simulated reaction times per model
//!   (typically one model per posterior draw).
//! - [`predictive_band`]: per-draw empirical response fractions on the grid
//!   summarized by quantiles across draws.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every returned probability lies in `[clip, 1 - clip]`.
//! - Band quantiles use linear interpolation between order statistics.
//! - Options are validated on entry to every function.
use crate::{
    data::ecdf::Ecdf,
    distribution::later::Later,
    reciprobit::{
        errors::{ReciprobitError, ReciprobitResult},
        options::ReciprobitOpts,
        transforms::probit_array,
    },
};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::Rng;

/// `CdfCurve` — probabilities on a reaction-time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CdfCurve {
    /// Grid of reaction times (s).
    pub rt_s: Array1<f64>,
    /// Clipped cumulative probabilities at `rt_s`.
    pub p: Array1<f64>,
}

impl CdfCurve {
    /// Probabilities in probit units.
    ///
    /// # Errors
    /// Never fails for curves built in this module; the `Result` mirrors
    /// [`probit_array`].
    pub fn probit(&self) -> ReciprobitResult<Array1<f64>> {
        probit_array(&self.p)
    }
}

/// `PredictiveBand` — quantiles of per-draw ECDFs on a reaction-time grid.
///
/// Fields
/// ------
/// - `rt_s`: grid of reaction times (s).
/// - `quantiles`: the quantile levels, in option order.
/// - `bands`: `(quantiles.len() × rt_s.len())`; row `j` is the clipped
///   `quantiles[j]` curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictiveBand {
    pub rt_s: Array1<f64>,
    pub quantiles: Vec<f64>,
    pub bands: Array2<f64>,
}

impl PredictiveBand {
    /// Curve for quantile level `q`, if it was requested.
    pub fn band(&self, q: f64) -> Option<ArrayView1<'_, f64>> {
        self.quantiles.iter().position(|&level| level == q).map(|j| self.bands.row(j))
    }
}

/// Log-spaced reaction-time grid described by `opts`.
///
/// # Errors
/// Option errors from [`ReciprobitOpts::validate`].
pub fn rt_grid(opts: &ReciprobitOpts) -> ReciprobitResult<Array1<f64>> {
    opts.validate()?;
    let mut grid =
        Array1::logspace(10.0, opts.min_rt_s.log10(), opts.max_rt_s.log10(), opts.n_points);
    // Pin the endpoints against rounding in 10^log10(x).
    grid[0] = opts.min_rt_s;
    grid[opts.n_points - 1] = opts.max_rt_s;
    Ok(grid)
}

/// Model reaction-time CDF on the grid.
///
/// # Errors
/// - Option errors from [`ReciprobitOpts::validate`].
/// - [`ReciprobitError::Later`] if the model's parameters are array-valued
///   and do not broadcast against the grid.
pub fn model_cdf_curve(later: &Later, opts: &ReciprobitOpts) -> ReciprobitResult<CdfCurve> {
    let rt_s = rt_grid(opts)?;
    let cdf = later.rt_cdf(&rt_s.clone().into_dyn())?;
    let p = cdf.iter().map(|&p| opts.clip_probability(p)).collect();
    Ok(CdfCurve { rt_s, p })
}

/// Empirical CDF on the grid.
///
/// # Errors
/// Option errors from [`ReciprobitOpts::validate`].
pub fn ecdf_curve(ecdf: &Ecdf, opts: &ReciprobitOpts) -> ReciprobitResult<CdfCurve> {
    let rt_s = rt_grid(opts)?;
    let p = rt_s.mapv(|t| opts.clip_probability(ecdf.evaluate(t)));
    Ok(CdfCurve { rt_s, p })
}

/// Simulate `n_obs` reaction times from each model.
///
/// # Returns
/// A `(models.len() × n_obs)` array; row `d` holds draws from `models[d]`.
///
/// # Errors
/// - [`ReciprobitError::Later`] if a model has array-valued parameters that
///   do not broadcast to `(n_obs,)`.
pub fn sample_predictive<R: Rng + ?Sized>(
    models: &[Later], n_obs: usize, rng: &mut R,
) -> ReciprobitResult<Array2<f64>> {
    let mut draws: Array2<f64> = Array2::zeros((models.len(), n_obs));
    for (mut row, model) in draws.axis_iter_mut(Axis(0)).zip(models) {
        let sample = model.sample_with(&mut *rng, Some(&[n_obs]))?;
        row.iter_mut().zip(sample.iter()).for_each(|(dst, &src)| *dst = src);
    }
    Ok(draws)
}

/// Quantile band of per-draw ECDFs.
///
/// For each row of `draws` (one simulated data set per draw, reaction times
/// in seconds) the fraction of trials with `0 < RT ≤ t` is evaluated on the
/// grid; at each grid point the requested quantiles are then taken across
/// draws and clipped. Negative reaction times (negative winning promptness)
/// never count as responses, matching [`Later::rt_cdf`].
///
/// # Errors
/// - Option errors from [`ReciprobitOpts::validate`].
/// - [`ReciprobitError::NoDraws`] if `draws` has no rows or no columns.
/// - [`ReciprobitError::Data`] if a row contains NaN.
pub fn predictive_band(
    draws: &Array2<f64>, opts: &ReciprobitOpts,
) -> ReciprobitResult<PredictiveBand> {
    let rt_s = rt_grid(opts)?;
    if draws.nrows() == 0 || draws.ncols() == 0 {
        return Err(ReciprobitError::NoDraws);
    }

    // (draw × grid) matrix of response fractions.
    let mut per_draw: Array2<f64> = Array2::zeros((draws.nrows(), rt_s.len()));
    for (mut out, row) in per_draw.axis_iter_mut(Axis(0)).zip(draws.axis_iter(Axis(0))) {
        let ecdf = Ecdf::from_sample(&row.to_vec())?;
        let no_response = ecdf.evaluate(0.0);
        out.assign(&rt_s.mapv(|t| ecdf.evaluate(t) - no_response));
    }

    let mut bands: Array2<f64> = Array2::zeros((opts.quantiles.len(), rt_s.len()));
    for (k, column) in per_draw.axis_iter(Axis(1)).enumerate() {
        let mut sorted = column.to_vec();
        sorted.sort_by(f64::total_cmp);
        for (j, &q) in opts.quantiles.iter().enumerate() {
            bands[[j, k]] = opts.clip_probability(quantile_sorted(&sorted, q));
        }
    }

    Ok(PredictiveBand { rt_s, quantiles: opts.quantiles.clone(), bands })
}

//
// ---------- Private helpers ----------
//

/// Linearly interpolated quantile of a sorted, non-empty slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
