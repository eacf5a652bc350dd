//! distribution::later — LATER race-model density, log-CDF and sampler.
//!
//! Purpose
//! -------
//! Implement the numerical contract of the LATER ("Linear Approach to
//! Threshold with Ergodic Rate") race model. An observed promptness is the
//! winner of two independent Gaussian races,
//!
//! `P = max(A, B)`, `A ~ Normal(mu, sigma)` (later), `B ~ Normal(0, sigma_e)` (early),
//!
//! and reaction time is its reciprocal, `RT = 1 / P`.
//!
//! Key behaviors
//! -------------
//! - [`logp`]: log-density of `P`, using
//!   `f(x) = f_A(x) F_B(x) + f_B(x) F_A(x)` evaluated entirely in log space:
//!   `ln f = logaddexp(ln f_A + ln F_B, ln f_B + ln F_A)`.
//! - [`logcdf`]: `ln F(x) = ln F_A(x) + ln F_B(x)`, exact by independence.
//! - [`random`]: draws `A` and `B` element-wise, keeps the larger, and
//!   returns the reciprocal (a reaction time).
//! - [`Later`]: time-domain wrapper that converts observed reaction times to
//!   promptness before evaluating, and exposes the reaction-time CDF.
//!
//! Invariants & assumptions
//! ------------------------
//! - `logp` / `logcdf` take **promptness** values; `random` and
//!   [`Later::sample`] return **reaction times**.
//! - Invalid parameters (non-finite `mu`, non-finite or non-positive
//!   `sigma` / `sigma_e`) and NaN observations are rejected with a
//!   [`LaterError`] before any evaluation; this applies identically to all
//!   three operations.
//! - Promptness at ±∞ is a valid tail point: `logp → -∞`,
//!   `logcdf(-∞) = -∞`, `logcdf(+∞) = 0`.
//!
//! Conventions
//! -----------
//! - Inputs are `ArrayD<f64>` (use `arr0(x).into_dyn()` for scalars) and are
//!   broadcast together; the result has the broadcast shape.
//! - All evaluation is closed-form and O(n) in the broadcast size; nothing
//!   here logs, allocates beyond the output, or touches global state.
//!
//! Downstream usage
//! ----------------
//! - `model::joint` evaluates [`Later::log_likelihood`] per dataset.
//! - `reciprobit::curves` calls [`Later::rt_cdf`] on reaction-time grids and
//!   [`Later::sample`] for posterior-predictive draws.
//!
//! Testing notes
//! -------------
//! - Unit tests cover finiteness, shape propagation, CDF monotonicity,
//!   density / CDF consistency by numerical integration, agreement with the
//!   direct `erf` formula in benign regimes, tail behavior where that formula
//!   underflows, seeded reproducibility, sample shapes, and the direction of
//!   the reaction-time ↔ promptness conversion.
use crate::{
    distribution::{
        core::{
            options::SampleOpts,
            params::LaterParams,
            shape::{broadcast_pair, broadcast_shapes, broadcast_to},
            units::{promptness_to_rt, rt_to_promptness},
            validation::{
                validate_location, validate_promptness, validate_reaction_times, validate_scale,
            },
        },
        errors::{LaterError, LaterResult},
    },
    numerical_stability::{log_add_exp, norm_logcdf, norm_logpdf},
};
use ndarray::{ArrayD, Zip};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Location of the early component; fixed by the model.
pub const EARLY_MU: f64 = 0.0;

/// Log-density of the LATER race model at promptness `value`.
///
/// Parameters
/// ----------
/// - `value`: `&ArrayD<f64>`
///   Promptness observations (1/s). Any extended real except NaN.
/// - `mu`: `&ArrayD<f64>`
///   Location of the later component; finite.
/// - `sigma`: `&ArrayD<f64>`
///   Scale of the later component; finite and `> 0`.
/// - `sigma_e`: `&ArrayD<f64>`
///   Scale of the early component; finite and `> 0`.
///
/// Returns
/// -------
/// `LaterResult<ArrayD<f64>>`
///   Natural log of the density, with the broadcast shape of the inputs.
///
/// Errors
/// ------
/// - `LaterError::InvalidLocation` / `LaterError::InvalidScale` for invalid
///   parameters.
/// - `LaterError::NanObservation` for NaN observations.
/// - `LaterError::ShapeMismatch` if the inputs do not broadcast together.
///
/// Examples
/// --------
/// ```rust
/// # use later_rt::distribution::later::logp;
/// # use ndarray::arr0;
/// let lp = logp(
///     &arr0(1.0).into_dyn(),
///     &arr0(3.0).into_dyn(),
///     &arr0(1.0).into_dyn(),
///     &arr0(5.0).into_dyn(),
/// )
/// .unwrap();
/// assert!(lp.iter().all(|v| v.is_finite()));
/// ```
pub fn logp(
    value: &ArrayD<f64>, mu: &ArrayD<f64>, sigma: &ArrayD<f64>, sigma_e: &ArrayD<f64>,
) -> LaterResult<ArrayD<f64>> {
    validate_inputs(value, mu, sigma, sigma_e)?;
    map_broadcast(value, mu, sigma, sigma_e, logp_kernel)
}

/// Log-CDF of the LATER race model at promptness `value`.
///
/// Returns `ln P(max(A, B) < value) = ln Φ((value - mu)/sigma) + ln Φ(value/sigma_e)`
/// with the broadcast shape of the inputs. Both terms use a log-CDF that
/// remains finite far into the lower tail.
///
/// Errors
/// ------
/// Same as [`logp`].
pub fn logcdf(
    value: &ArrayD<f64>, mu: &ArrayD<f64>, sigma: &ArrayD<f64>, sigma_e: &ArrayD<f64>,
) -> LaterResult<ArrayD<f64>> {
    validate_inputs(value, mu, sigma, sigma_e)?;
    map_broadcast(value, mu, sigma, sigma_e, logcdf_kernel)
}

/// Draw reaction times from the LATER race model.
///
/// Parameters
/// ----------
/// - `mu`, `sigma`, `sigma_e`: parameter arrays, validated as in [`logp`].
/// - `rng`: caller-owned random source. All later-component draws are made
///   first, then all early-component draws, each pass in a fixed element
///   order.
/// - `size`: optional output shape. The parameters must broadcast to it;
///   `None` uses the broadcast shape of the parameters.
///
/// Returns
/// -------
/// `LaterResult<ArrayD<f64>>`
///   Reaction times `1 / max(later, early)`. Draws whose winning promptness
///   is negative yield negative reaction times; those are kept as drawn.
///
/// Errors
/// ------
/// - Parameter errors as in [`logp`].
/// - `LaterError::ShapeMismatch` if the parameters do not broadcast together.
/// - `LaterError::InvalidSampleShape` if they do not broadcast to `size`.
pub fn random<R: Rng + ?Sized>(
    mu: &ArrayD<f64>, sigma: &ArrayD<f64>, sigma_e: &ArrayD<f64>, rng: &mut R,
    size: Option<&[usize]>,
) -> LaterResult<ArrayD<f64>> {
    validate_location(mu)?;
    validate_scale("sigma", sigma)?;
    validate_scale("sigma_e", sigma_e)?;
    let param_shape = broadcast_shapes(&[mu.shape(), sigma.shape(), sigma_e.shape()])?;
    let shape = resolve_sample_shape(&param_shape, size)?;

    let mu_b = broadcast_to(mu, &shape)?;
    let sigma_b = broadcast_to(sigma, &shape)?;
    let sigma_e_b = broadcast_to(sigma_e, &shape)?;

    let later = Zip::from(&mu_b)
        .and(&sigma_b)
        .map_collect(|&m, &s| m + s * standard_normal(&mut *rng));
    let early = sigma_e_b.map(|&s_e| EARLY_MU + s_e * standard_normal(&mut *rng));

    let promptness = Zip::from(&later).and(&early).map_collect(|&l, &e| if l > e { l } else { e });
    Ok(promptness_to_rt(&promptness))
}

/// Draw reaction times with seeding and shape taken from [`SampleOpts`].
///
/// Errors
/// ------
/// Same as [`random`].
pub fn random_with_opts(
    mu: &ArrayD<f64>, sigma: &ArrayD<f64>, sigma_e: &ArrayD<f64>, opts: &SampleOpts,
) -> LaterResult<ArrayD<f64>> {
    let mut rng = opts.rng();
    random(mu, sigma, sigma_e, &mut rng, opts.size.as_deref())
}

impl LaterParams {
    /// [`logp`] at promptness `value` under these parameters.
    pub fn logp(&self, value: &ArrayD<f64>) -> LaterResult<ArrayD<f64>> {
        validate_promptness(value)?;
        map_broadcast(value, self.mu(), self.sigma(), self.sigma_e(), logp_kernel)
    }

    /// [`logcdf`] at promptness `value` under these parameters.
    pub fn logcdf(&self, value: &ArrayD<f64>) -> LaterResult<ArrayD<f64>> {
        validate_promptness(value)?;
        map_broadcast(value, self.mu(), self.sigma(), self.sigma_e(), logcdf_kernel)
    }

    /// [`random`] under these parameters.
    pub fn random<R: Rng + ?Sized>(
        &self, rng: &mut R, size: Option<&[usize]>,
    ) -> LaterResult<ArrayD<f64>> {
        random(self.mu(), self.sigma(), self.sigma_e(), rng, size)
    }
}

/// `Later` — the LATER model observed in reaction-time units.
///
/// Purpose
/// -------
/// Present the promptness-domain engine to callers that hold reaction times
/// in seconds, applying the unit conversion in exactly one direction per
/// operation:
///
/// - evaluation: reaction time → promptness, then [`logp`] / [`logcdf`];
/// - sampling: [`random`] already returns reaction times.
///
/// Notes
/// -----
/// - [`Later::log_likelihood`] is the promptness log-density evaluated at
///   `1 / rt`; no change-of-variables Jacobian is added, so values are
///   comparable with likelihoods computed on promptness data directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Later {
    params: LaterParams,
}

impl Later {
    /// Wrap validated parameters.
    pub fn new(params: LaterParams) -> Later {
        Later { params }
    }

    /// Build from scalar parameters.
    ///
    /// # Errors
    /// Parameter errors from [`LaterParams::scalar`].
    pub fn from_scalars(mu: f64, sigma: f64, sigma_e: f64) -> LaterResult<Later> {
        Ok(Later { params: LaterParams::scalar(mu, sigma, sigma_e)? })
    }

    /// Underlying promptness-domain parameters.
    pub fn params(&self) -> &LaterParams {
        &self.params
    }

    /// Per-observation log-likelihood of reaction times `rt_s` (seconds).
    ///
    /// # Errors
    /// - `LaterError::InvalidReactionTime` if any `rt_s` is non-finite or `≤ 0`.
    /// - `LaterError::ShapeMismatch` if `rt_s` does not broadcast against the
    ///   parameters.
    pub fn log_likelihood(&self, rt_s: &ArrayD<f64>) -> LaterResult<ArrayD<f64>> {
        validate_reaction_times(rt_s)?;
        self.params.logp(&rt_to_promptness(rt_s))
    }

    /// Sum of [`Later::log_likelihood`] over all observations.
    ///
    /// # Errors
    /// Same as [`Later::log_likelihood`].
    pub fn total_log_likelihood(&self, rt_s: &ArrayD<f64>) -> LaterResult<f64> {
        Ok(self.log_likelihood(rt_s)?.sum())
    }

    /// Log-CDF of promptness evaluated at `1 / rt_s`.
    ///
    /// This is `ln P(promptness < 1/t)`, i.e. the log-probability that the
    /// response is *slower* than `t` (or never arrives).
    ///
    /// # Errors
    /// Same as [`Later::log_likelihood`].
    pub fn promptness_logcdf_at(&self, rt_s: &ArrayD<f64>) -> LaterResult<ArrayD<f64>> {
        validate_reaction_times(rt_s)?;
        self.params.logcdf(&rt_to_promptness(rt_s))
    }

    /// Reaction-time CDF, `P(0 < RT ≤ t)`, for `t` in `rt_s`.
    ///
    /// Because `RT ≤ t ⇔ promptness ≥ 1/t` for positive promptness, this is
    /// `1 - exp(logcdf(1/t))`, computed as `-expm1(logcdf(1/t))` so that
    /// small probabilities keep their precision. As `t → ∞` it approaches
    /// `P(promptness > 0)`, which is below 1 when the model allows
    /// non-responses.
    ///
    /// # Errors
    /// Same as [`Later::log_likelihood`].
    pub fn rt_cdf(&self, rt_s: &ArrayD<f64>) -> LaterResult<ArrayD<f64>> {
        Ok(self.promptness_logcdf_at(rt_s)?.mapv(|lc| -lc.exp_m1()))
    }

    /// Draw reaction times according to `opts`.
    ///
    /// # Errors
    /// Shape errors from [`random`].
    pub fn sample(&self, opts: &SampleOpts) -> LaterResult<ArrayD<f64>> {
        let mut rng = opts.rng();
        self.params.random(&mut rng, opts.size.as_deref())
    }

    /// Draw reaction times from a caller-owned random source.
    ///
    /// # Errors
    /// Shape errors from [`random`].
    pub fn sample_with<R: Rng + ?Sized>(
        &self, rng: &mut R, size: Option<&[usize]>,
    ) -> LaterResult<ArrayD<f64>> {
        self.params.random(rng, size)
    }
}

//
// ---------- Private helpers ----------
//

/// `ln(f_A(x) F_B(x) + f_B(x) F_A(x))` for one element.
#[inline]
fn logp_kernel(x: f64, mu: f64, sigma: f64, sigma_e: f64) -> f64 {
    let later_wins = norm_logpdf(x, mu, sigma) + norm_logcdf(x, EARLY_MU, sigma_e);
    let early_wins = norm_logpdf(x, EARLY_MU, sigma_e) + norm_logcdf(x, mu, sigma);
    log_add_exp(later_wins, early_wins)
}

/// `ln F_A(x) + ln F_B(x)` for one element.
#[inline]
fn logcdf_kernel(x: f64, mu: f64, sigma: f64, sigma_e: f64) -> f64 {
    norm_logcdf(x, mu, sigma) + norm_logcdf(x, EARLY_MU, sigma_e)
}

#[inline]
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

fn validate_inputs(
    value: &ArrayD<f64>, mu: &ArrayD<f64>, sigma: &ArrayD<f64>, sigma_e: &ArrayD<f64>,
) -> LaterResult<()> {
    validate_location(mu)?;
    validate_scale("sigma", sigma)?;
    validate_scale("sigma_e", sigma_e)?;
    validate_promptness(value)
}

/// Broadcast the four operands together and apply `kernel` element-wise.
fn map_broadcast<F>(
    value: &ArrayD<f64>, mu: &ArrayD<f64>, sigma: &ArrayD<f64>, sigma_e: &ArrayD<f64>,
    kernel: F,
) -> LaterResult<ArrayD<f64>>
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    let shape = broadcast_shapes(&[value.shape(), mu.shape(), sigma.shape(), sigma_e.shape()])?;
    let value_b = broadcast_to(value, &shape)?;
    let mu_b = broadcast_to(mu, &shape)?;
    let sigma_b = broadcast_to(sigma, &shape)?;
    let sigma_e_b = broadcast_to(sigma_e, &shape)?;

    Ok(Zip::from(&value_b)
        .and(&mu_b)
        .and(&sigma_b)
        .and(&sigma_e_b)
        .map_collect(|&x, &m, &s, &s_e| kernel(x, m, s, s_e)))
}

/// Output shape of a draw: `size` if the parameters broadcast to it,
/// otherwise the parameter shape itself.
fn resolve_sample_shape(param_shape: &[usize], size: Option<&[usize]>) -> LaterResult<Vec<usize>> {
    match size {
        None => Ok(param_shape.to_vec()),
        Some(requested) => {
            let invalid = || LaterError::InvalidSampleShape {
                requested: requested.to_vec(),
                params: param_shape.to_vec(),
            };
            let joined = broadcast_pair(param_shape, requested).map_err(|_| invalid())?;
            if joined == requested { Ok(joined) } else { Err(invalid()) }
        }
    }
}
