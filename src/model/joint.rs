//! Joint LATER model over several datasets.
//!
//! Purpose
//! -------
//! Tie a set of [`Dataset`]s to a [`SharedLayout`] and evaluate the joint
//! log-likelihood of all observed reaction times at a point in the shared
//! parameter space. Priors are not part of this type: it is the likelihood
//! term a sampler or optimizer would combine with whatever prior it uses.
//!
//! Key behaviors
//! -------------
//! - [`JointModel::new`] fixes the dataset order and validates sharing.
//! - [`JointModel::log_likelihood`] sums the time-domain LATER
//!   log-likelihoods of every dataset.
//! - [`JointModel::pointwise_log_likelihood`] returns one array per dataset.
//! - [`JointModel::log_likelihood_table`] evaluates a sequence of parameter
//!   draws and returns one `(draw × observation)` table per dataset, named
//!   `obs_<dataset>`, ready for [`LogLikelihoodSet::combine`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Dataset `i` is evaluated with [`SharedLayout::dataset_params`] at `i`.
//! - Datasets are validated on construction, so their reaction times are
//!   always acceptable to the time-domain wrapper.
use crate::{
    compare::combine::LogLikelihoodSet,
    data::dataset::Dataset,
    distribution::later::Later,
    model::{
        errors::{ModelError, ModelResult},
        share::{ShareType, SharedLayout, SharedParams},
    },
};
use ndarray::{Array1, Array2};
use std::collections::HashSet;

/// Prefix of per-dataset variable names in log-likelihood tables.
pub const OBS_PREFIX: &str = "obs_";

/// `JointModel` — datasets plus their parameter-sharing layout.
#[derive(Debug, Clone, PartialEq)]
pub struct JointModel {
    datasets: Vec<Dataset>,
    layout: SharedLayout,
}

impl JointModel {
    /// Assemble a joint model.
    ///
    /// # Errors
    /// - [`crate::model::errors::ModelError::NoDatasets`] if `datasets` is empty.
    /// - [`crate::model::errors::ModelError::MissingShareType`] if there is
    ///   more than one dataset and `share` is `None`.
    /// - [`crate::model::errors::ModelError::DuplicateDataset`] if two
    ///   datasets have the same name.
    pub fn new(datasets: Vec<Dataset>, share: Option<ShareType>) -> ModelResult<JointModel> {
        let layout = SharedLayout::new(datasets.len(), share)?;
        let mut seen = HashSet::with_capacity(datasets.len());
        if let Some(dup) = datasets.iter().map(Dataset::name).find(|&name| !seen.insert(name)) {
            return Err(ModelError::DuplicateDataset { name: dup.to_string() });
        }
        tracing::debug!(
            n_datasets = layout.n_datasets(),
            share = ?layout.share(),
            n_params = layout.n_params(),
            "assembled joint LATER model"
        );
        Ok(JointModel { datasets, layout })
    }

    /// [`JointModel::new`] with the share type given by name.
    ///
    /// # Errors
    /// - [`crate::model::errors::ModelError::InvalidShareType`] for an unknown name.
    /// - Errors of [`JointModel::new`].
    pub fn with_share_name(datasets: Vec<Dataset>, share: Option<&str>) -> ModelResult<JointModel> {
        let share = share.map(str::parse::<ShareType>).transpose()?;
        JointModel::new(datasets, share)
    }

    pub fn layout(&self) -> &SharedLayout {
        &self.layout
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Dataset names in model order.
    pub fn dataset_names(&self) -> Vec<&str> {
        self.datasets.iter().map(Dataset::name).collect()
    }

    /// Time-domain model of dataset `i` at `params`.
    ///
    /// # Errors
    /// Errors of [`SharedLayout::dataset_params`], including
    /// [`crate::model::errors::ModelError::DatasetIndex`] for a bad `i`.
    pub fn later_for(&self, params: &SharedParams, i: usize) -> ModelResult<Later> {
        Ok(Later::new(self.layout.dataset_params(params, i)?))
    }

    /// Joint log-likelihood of every observation at `params`.
    ///
    /// # Errors
    /// - [`crate::model::errors::ModelError::ParamLength`] if `params` does
    ///   not match the layout.
    /// - [`crate::model::errors::ModelError::Later`] if derived parameters
    ///   are invalid.
    pub fn log_likelihood(&self, params: &SharedParams) -> ModelResult<f64> {
        let mut total = 0.0;
        for (i, dataset) in self.datasets.iter().enumerate() {
            total += self.later_for(params, i)?.total_log_likelihood(&dataset.rt_s_dyn())?;
        }
        Ok(total)
    }

    /// Per-observation log-likelihoods, one `(name, values)` pair per
    /// dataset in model order.
    ///
    /// # Errors
    /// Same as [`JointModel::log_likelihood`].
    pub fn pointwise_log_likelihood(
        &self, params: &SharedParams,
    ) -> ModelResult<Vec<(String, Array1<f64>)>> {
        self.datasets
            .iter()
            .enumerate()
            .map(|(i, dataset)| {
                let ll = self.later_for(params, i)?.log_likelihood(&dataset.rt_s_dyn())?;
                Ok((dataset.name().to_string(), ll.iter().copied().collect::<Array1<f64>>()))
            })
            .collect()
    }

    /// Pointwise log-likelihood tables over a sequence of parameter draws.
    ///
    /// # Returns
    /// A set with one `(draws.len() × n_obs)` table per dataset, named
    /// `obs_<dataset name>`, in model order.
    ///
    /// # Errors
    /// Same as [`JointModel::log_likelihood`], for the first failing draw.
    pub fn log_likelihood_table(&self, draws: &[SharedParams]) -> ModelResult<LogLikelihoodSet> {
        let mut tables: Vec<Array2<f64>> =
            self.datasets.iter().map(|d| Array2::zeros((draws.len(), d.len()))).collect();

        for (row, params) in draws.iter().enumerate() {
            for (table, (_, ll)) in tables.iter_mut().zip(self.pointwise_log_likelihood(params)?) {
                table.row_mut(row).assign(&ll);
            }
        }

        let mut set = LogLikelihoodSet::new();
        for (dataset, table) in self.datasets.iter().zip(tables) {
            set.insert(format!("{OBS_PREFIX}{}", dataset.name()), table);
        }
        tracing::debug!(n_draws = draws.len(), n_tables = set.len(), "tabulated log-likelihoods");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::core::params::LaterParams;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Assembly errors for missing / unknown share types and duplicate names.
    // - Agreement of the joint log-likelihood with per-dataset `Later`
    //   evaluations under the derived parameters.
    // - Shape and naming of pointwise tables over several draws.
    // -------------------------------------------------------------------------

    fn datasets() -> Vec<Dataset> {
        vec![
            Dataset::new("AS_p95", array![0.18, 0.2, 0.22, 0.3]).unwrap(),
            Dataset::new("AS_p05", array![0.25, 0.28, 0.4]).unwrap(),
        ]
    }

    #[test]
    // Purpose
    // -------
    // Several datasets require an explicit, valid share type.
    fn assembly_requires_valid_share_type() {
        assert_eq!(
            JointModel::new(datasets(), None),
            Err(ModelError::MissingShareType { n_datasets: 2 })
        );
        assert!(matches!(
            JointModel::with_share_name(datasets(), Some("tilt")),
            Err(ModelError::InvalidShareType { .. })
        ));
        assert_eq!(JointModel::new(Vec::new(), None), Err(ModelError::NoDatasets));

        let model = JointModel::with_share_name(datasets(), Some("shift")).unwrap();
        assert_eq!(model.dataset_names(), vec!["AS_p95", "AS_p05"]);
        assert_eq!(model.layout().n_params(), 5);
    }

    #[test]
    // Purpose
    // -------
    // The joint log-likelihood equals the sum of per-dataset time-domain
    // log-likelihoods under mu = sigma k and sigma_e = sigma sigma_e_mod.
    //
    // Given
    // -----
    // - Swivel sharing: sigma = [1.0, 1.2], k = [5], sigma_e_mod = [3, 4].
    //
    // Expect
    // ------
    // - log_likelihood == Σᵢ Later(mu_i, sigma_i, sigma_e_i).total_log_likelihood(rt_i).
    fn joint_log_likelihood_sums_datasets() {
        // Arrange
        let model = JointModel::new(datasets(), Some(ShareType::Swivel)).unwrap();
        let params = SharedParams::new(vec![1.0, 1.2], vec![5.0], vec![3.0, 4.0]);

        // Act
        let joint = model.log_likelihood(&params).unwrap();

        // Assert
        let expected: f64 = [(5.0, 1.0, 3.0), (6.0, 1.2, 4.8)]
            .iter()
            .zip(model.datasets())
            .map(|(&(mu, sigma, sigma_e), ds)| {
                Later::new(LaterParams::scalar(mu, sigma, sigma_e).unwrap())
                    .total_log_likelihood(&ds.rt_s_dyn())
                    .unwrap()
            })
            .sum();
        assert_relative_eq!(joint, expected, max_relative = 1e-12);

        let pointwise = model.pointwise_log_likelihood(&params).unwrap();
        let summed: f64 = pointwise.iter().map(|(_, ll)| ll.sum()).sum();
        assert_relative_eq!(summed, joint, max_relative = 1e-12);
        assert_eq!(pointwise[1].1.len(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Tables have one row per draw and are named after their datasets.
    fn log_likelihood_table_has_draw_rows() {
        // Arrange
        let model = JointModel::new(datasets(), Some(ShareType::Shift)).unwrap();
        let draws = vec![
            SharedParams::new(vec![1.0], vec![5.0, 4.0], vec![3.0, 3.0]),
            SharedParams::new(vec![0.8], vec![6.0, 4.5], vec![2.0, 4.0]),
            SharedParams::new(vec![1.1], vec![5.5, 3.5], vec![3.5, 2.5]),
        ];

        // Act
        let set = model.log_likelihood_table(&draws).unwrap();

        // Assert
        assert_eq!(set.names(), vec!["obs_AS_p95", "obs_AS_p05"]);
        assert_eq!(set.get("obs_AS_p95").unwrap().dim(), (3, 4));
        assert_eq!(set.get("obs_AS_p05").unwrap().dim(), (3, 3));
        let row1 = model.pointwise_log_likelihood(&draws[1]).unwrap();
        assert_eq!(set.get("obs_AS_p05").unwrap().row(1).to_owned(), row1[1].1);
    }

    #[test]
    // Purpose
    // -------
    // Parameter vectors of the wrong shape are rejected before evaluation.
    fn log_likelihood_rejects_wrong_param_lengths() {
        let model = JointModel::new(datasets(), Some(ShareType::Shift)).unwrap();
        let params = SharedParams::new(vec![1.0], vec![5.0], vec![3.0, 3.0]);
        assert_eq!(
            model.log_likelihood(&params),
            Err(ModelError::ParamLength { name: "k", expected: 2, actual: 1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Two datasets with one name would write the same `obs_<name>` table,
    // so assembly refuses them.
    //
    // Given
    // -----
    // - Datasets "A" (3 observations) and "A" (2 observations).
    //
    // Expect
    // ------
    // - `DuplicateDataset { name: "A" }`.
    fn assembly_rejects_duplicate_dataset_names() {
        let datasets = vec![
            Dataset::new("A", array![0.2, 0.25, 0.3]).unwrap(),
            Dataset::new("A", array![0.22, 0.4]).unwrap(),
        ];
        assert_eq!(
            JointModel::new(datasets, Some(ShareType::Shift)),
            Err(ModelError::DuplicateDataset { name: "A".to_string() })
        );
    }

    #[test]
    // Purpose
    // -------
    // A dataset index past the end is reported as an error.
    //
    // Given
    // -----
    // - A two-dataset shift model and index 3.
    //
    // Expect
    // ------
    // - `DatasetIndex { index: 3, n_datasets: 2 }`.
    fn later_for_rejects_out_of_range_index() {
        let model = JointModel::new(datasets(), Some(ShareType::Shift)).unwrap();
        let params = SharedParams::new(vec![1.0], vec![5.0, 4.0], vec![3.0, 3.0]);
        assert_eq!(
            model.later_for(&params, 3),
            Err(ModelError::DatasetIndex { index: 3, n_datasets: 2 })
        );
        assert!(model.later_for(&params, 1).is_ok());
    }
}
