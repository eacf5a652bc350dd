//! Integration tests for the LATER pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end flow: simulated trials written as a trial
//!   table, loaded into datasets, assembled into a joint shift model,
//!   evaluated, tabulated into pointwise log-likelihoods, combined, and
//!   summarized as reciprobit curves.
//! - Exercise realistic saccadic regimes (median latencies of 200–300 ms,
//!   a small early component) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `distribution`: `Later` sampling and time-domain likelihoods.
//! - `data`: `load_trials_csv`, `Dataset`, `Ecdf`.
//! - `model`: `JointModel` with shift sharing, joint and pointwise
//!   log-likelihoods, log-likelihood tables.
//! - `compare`: combining per-dataset tables into one variable.
//! - `reciprobit`: model CDF curve, observed ECDF curve, predictive band.
//!
//! Exclusions
//! ----------
//! - Fine-grained numerical checks of `logp` / `logcdf` / `log_ndtr`:
//!   covered by unit tests.
//! - Python bindings, which are exercised from Python.
use later_rt::{
    compare::{CombineOpts, LogLikelihoodSet},
    data::{Dataset, load_trials_csv},
    distribution::{Later, SampleOpts},
    model::{JointModel, ShareType, SharedParams},
    reciprobit::{
        ReciprobitOpts, ecdf_curve, model_cdf_curve, predictive_band, sample_predictive,
    },
};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Purpose
/// -------
/// Parameters used to simulate the two conditions: one shared `sigma`, a
/// per-condition `k`, and a common early-scale ratio.
///
/// Returns
/// -------
/// - `SharedParams` with sigma = [1.0], k = [5.0, 3.5],
///   sigma_e_mod = [3.0, 3.0], i.e. median latencies of 200 ms and ≈ 286 ms.
fn true_params() -> SharedParams {
    SharedParams::new(vec![1.0], vec![5.0, 3.5], vec![3.0, 3.0])
}

/// Purpose
/// -------
/// Simulate a trial table for participant `S1` in conditions `fast`
/// (mu = 5) and `slow` (mu = 3.5), write it to a temporary CSV in
/// milliseconds, and load it back through the public loader.
///
/// Invariants
/// ----------
/// - Only positive reaction times are written, mirroring a recorded data
///   set in which non-responses are absent.
/// - The file is removed before returning.
fn simulate_and_load(n_trials: usize, seed: u64) -> BTreeMap<String, Dataset> {
    let mut table = String::from("participant,condition,time\n");
    for (condition, mu, offset) in [("fast", 5.0, 0), ("slow", 3.5, 1)] {
        let later = Later::from_scalars(mu, 1.0, 3.0).expect("valid parameters");
        let rt = later
            .sample(&SampleOpts::seeded(seed + offset).with_size(&[n_trials]))
            .expect("sampling with a 1-d size succeeds");
        for t in rt.iter().filter(|&&t| t > 0.0) {
            table.push_str(&format!("S1,{condition},{:.4}\n", t * 1000.0));
        }
    }

    let path: PathBuf = std::env::temp_dir()
        .join(format!("later_rt_pipeline_{}_{seed}.csv", std::process::id()));
    std::fs::write(&path, table).expect("temporary file is writable");
    let datasets = load_trials_csv(&path).expect("simulated table loads");
    std::fs::remove_file(&path).expect("temporary file is removable");
    datasets
}

fn shift_model(datasets: BTreeMap<String, Dataset>) -> JointModel {
    // BTreeMap order: S1_fast, S1_slow.
    JointModel::new(datasets.into_values().collect(), Some(ShareType::Shift))
        .expect("two datasets with shift sharing assemble")
}

#[test]
// Purpose
// -------
// Trial tables round-trip into named datasets in seconds.
//
// Given
// -----
// - 1500 simulated trials per condition written in milliseconds.
//
// Expect
// ------
// - Datasets `S1_fast`, `S1_slow`; (almost) every trial kept; median of
//   the fast condition near 0.2 s.
fn loader_recovers_simulated_conditions() {
    // Arrange / Act
    let datasets = simulate_and_load(1500, 7);

    // Assert
    let names: Vec<&str> = datasets.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["S1_fast", "S1_slow"]);

    let fast = &datasets["S1_fast"];
    assert!(fast.len() > 1490 && fast.len() <= 1500);
    let median = fast.ecdf().quantiles()[fast.ecdf().quantiles().len() / 2];
    assert!((median - 0.2).abs() < 0.01, "median = {median}");
}

#[test]
// Purpose
// -------
// The joint likelihood prefers the generating parameters and decomposes
// into pointwise contributions.
//
// Given
// -----
// - 1500 trials per condition from `true_params()`.
// - A perturbed point with both k values scaled by 1.5.
//
// Expect
// ------
// - log_likelihood(true) > log_likelihood(perturbed).
// - Σ pointwise == joint.
fn joint_likelihood_prefers_generating_parameters() {
    // Arrange
    let model = shift_model(simulate_and_load(1500, 21));
    let truth = true_params();
    let perturbed = SharedParams::new(vec![1.0], vec![7.5, 5.25], vec![3.0, 3.0]);

    // Act
    let ll_true = model.log_likelihood(&truth).unwrap();
    let ll_perturbed = model.log_likelihood(&perturbed).unwrap();
    let pointwise = model.pointwise_log_likelihood(&truth).unwrap();

    // Assert
    assert!(ll_true.is_finite());
    assert!(ll_true > ll_perturbed, "{ll_true} <= {ll_perturbed}");
    let summed: f64 = pointwise.iter().map(|(_, ll)| ll.sum()).sum();
    assert!((summed - ll_true).abs() <= 1e-9 * ll_true.abs());
}

#[test]
// Purpose
// -------
// Per-dataset tables over several draws combine into one variable that
// covers every observation.
//
// Given
// -----
// - 300 trials per condition; 4 parameter draws around the truth.
//
// Expect
// ------
// - Combined "obs" table is (4 × n_fast + n_slow), with the fast block
//   first; the source set is untouched by `combined`.
fn log_likelihood_tables_combine_across_datasets() {
    // Arrange
    let model = shift_model(simulate_and_load(300, 5));
    let draws: Vec<SharedParams> = [0.9, 1.0, 1.1, 1.05]
        .iter()
        .map(|&s| SharedParams::new(vec![s], vec![5.0, 3.5], vec![3.0, 2.5]))
        .collect();
    let n_fast = model.datasets()[0].len();
    let n_slow = model.datasets()[1].len();

    // Act
    let set: LogLikelihoodSet = model.log_likelihood_table(&draws).unwrap();
    let combined = set.combined(&CombineOpts::default()).unwrap();

    // Assert
    assert!(!set.contains("obs"));
    let obs = combined.get("obs").unwrap();
    assert_eq!(obs.dim(), (4, n_fast + n_slow));
    let fast = combined.get("obs_S1_fast").unwrap();
    assert_eq!(obs[[2, 0]], fast[[2, 0]]);
    assert_eq!(obs[[3, n_fast]], combined.get("obs_S1_slow").unwrap()[[3, 0]]);
}

#[test]
// Purpose
// -------
// Reciprobit curves of model, data, and predictive simulation agree.
//
// Given
// -----
// - 2000 trials in the fast condition and the generating model.
// - 100 predictive data sets of 2000 trials from the same model.
//
// Expect
// ------
// - Observed ECDF within 0.05 of the model CDF on the whole grid.
// - Model CDF inside the widened predictive band [2.5%, 97.5%] ± 0.01.
fn reciprobit_curves_agree_with_data() {
    // Arrange
    let datasets = simulate_and_load(2000, 99);
    let model = shift_model(datasets);
    let later = model.later_for(&true_params(), 0).unwrap();
    let opts = ReciprobitOpts::new(0.05, 2.0, 201, 1e-4, vec![0.025, 0.5, 0.975]).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);

    // Act
    let model_curve = model_cdf_curve(&later, &opts).unwrap();
    let data_curve = ecdf_curve(model.datasets()[0].ecdf(), &opts).unwrap();
    let draws = sample_predictive(&vec![later; 100], 2000, &mut rng).unwrap();
    let band = predictive_band(&draws, &opts).unwrap();

    // Assert
    let lower = band.band(0.025).unwrap();
    let upper = band.band(0.975).unwrap();
    for k in 0..model_curve.rt_s.len() {
        let gap = (model_curve.p[k] - data_curve.p[k]).abs();
        assert!(gap < 0.05, "gap {gap} at t = {}", model_curve.rt_s[k]);
        assert!(lower[k] - 0.01 <= model_curve.p[k] && model_curve.p[k] <= upper[k] + 0.01);
    }
    assert!(model_curve.probit().unwrap().iter().all(|z| z.is_finite()));
}
