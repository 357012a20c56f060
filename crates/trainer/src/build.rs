//! The estimator build: split, fit scaler, standardize, fit forest.
//!
//! Runs once per process (see [`crate::cache`]) and produces the
//! immutable (scaler, model) pair the prediction service consumes. The
//! scaler statistics come from the training split only, and the forest
//! sees exactly the rows that scaler standardized, which is why the two
//! artifacts are only ever handed out together.

use tracing::info;

use calhome_core::{Estimator, StandardScaler, FEATURE_COUNT};

use crate::dataset::Dataset;
use crate::errors::BuildError;
use crate::forest::{ForestParams, ForestTrainer};
use crate::split::train_test_split;

/// Full build parameters. Defaults reproduce the published demo: 80/20
/// split and 100 trees, both seeded with 42.
#[derive(Clone, Debug)]
pub struct TrainerParams {
    pub test_fraction: f64,
    pub split_seed: u64,
    pub forest: ForestParams,
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            split_seed: 42,
            forest: ForestParams::default(),
        }
    }
}

/// Fit standardization statistics over training rows (population std;
/// zero-spread features keep std 1.0).
pub fn fit_scaler(rows: &[[f64; FEATURE_COUNT]]) -> Result<StandardScaler, BuildError> {
    let n = rows.len();
    if n == 0 {
        return Err(BuildError::Training(
            "cannot fit scaler on an empty training split".into(),
        ));
    }

    let mut mean = vec![0.0; FEATURE_COUNT];
    for row in rows {
        for (m, &v) in mean.iter_mut().zip(row.iter()) {
            *m += v;
        }
    }
    for m in &mut mean {
        *m /= n as f64;
    }

    let mut var = vec![0.0; FEATURE_COUNT];
    for row in rows {
        for ((s, &m), &v) in var.iter_mut().zip(mean.iter()).zip(row.iter()) {
            let d = v - m;
            *s += d * d;
        }
    }
    let std = var
        .into_iter()
        .map(|s| {
            let sd = (s / n as f64).sqrt();
            if sd > 0.0 {
                sd
            } else {
                1.0
            }
        })
        .collect();

    Ok(StandardScaler { mean, std })
}

/// Build the fitted (scaler, model) pair from a loaded dataset.
pub fn build_estimator(dataset: &Dataset, params: &TrainerParams) -> Result<Estimator, BuildError> {
    let split = train_test_split(dataset, params.test_fraction, params.split_seed)?;
    info!(
        train_rows = split.train.len(),
        test_rows = split.test.len(),
        seed = params.split_seed,
        "partitioned dataset"
    );

    let scaler = fit_scaler(&split.train.features)?;

    let standardized: Vec<Vec<f64>> = split
        .train
        .features
        .iter()
        .map(|row| scaler.transform(row))
        .collect::<Result<_, _>>()
        .map_err(|err| BuildError::Training(err.to_string()))?;

    let model =
        ForestTrainer::new(params.forest.clone()).fit(&standardized, &split.train.targets)?;

    Ok(Estimator { scaler, model })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_dataset(n: usize) -> Dataset {
        let mut d = Dataset::default();
        for i in 0..n {
            let income = 0.5 + (i % 30) as f64 * 0.5;
            let age = 1.0 + (i % 52) as f64;
            let rooms = 2.0 + (i % 12) as f64 * 0.5;
            d.features.push([
                income,
                age,
                rooms,
                1.0 + (i % 4) as f64 * 0.5,
                100.0 + (i * 37 % 3000) as f64,
                1.5 + (i % 7) as f64 * 0.5,
                32.5 + (i % 90) as f64 * 0.1,
                -123.5 + (i % 90) as f64 * 0.1,
            ]);
            // value tracks income and rooms with a mild age discount
            d.targets.push(0.4 * income + 0.1 * rooms - 0.002 * age);
        }
        d
    }

    fn small_params() -> TrainerParams {
        TrainerParams {
            test_fraction: 0.2,
            split_seed: 42,
            forest: ForestParams {
                num_trees: 8,
                max_depth: 6,
                min_samples_leaf: 2,
                seed: 42,
            },
        }
    }

    #[test]
    fn scaler_stats_come_from_known_values() {
        let rows = vec![[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], [3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]];
        let scaler = fit_scaler(&rows).unwrap();
        assert_eq!(scaler.mean[0], 2.0);
        assert_eq!(scaler.std[0], 1.0); // population std of [1, 3]
        assert_eq!(scaler.std[1], 1.0); // constant feature keeps unit std
    }

    #[test]
    fn build_produces_a_working_estimator() {
        let dataset = synthetic_dataset(200);
        let estimator = build_estimator(&dataset, &small_params()).unwrap();

        assert_eq!(estimator.scaler.width(), FEATURE_COUNT);
        assert_eq!(estimator.model.metadata.training_rows, 160);

        let estimate = estimator
            .estimate_slice(&[5.0, 20.0, 5.0, 1.0, 1000.0, 3.0, 34.0, -118.0])
            .unwrap();
        assert!(estimate.dollars.is_finite());
        assert!(estimate.dollars >= 0.0);
    }

    #[test]
    fn rebuild_is_bit_identical() {
        let dataset = synthetic_dataset(200);
        let params = small_params();
        let a = build_estimator(&dataset, &params).unwrap();
        let b = build_estimator(&dataset, &params).unwrap();

        assert_eq!(a.scaler, b.scaler);
        assert_eq!(a.model, b.model);

        let input = [7.5, 30.0, 6.0, 1.5, 800.0, 2.5, 36.0, -120.0];
        assert_eq!(
            a.estimate_slice(&input).unwrap(),
            b.estimate_slice(&input).unwrap()
        );
    }

    #[test]
    fn empty_dataset_fails_the_build() {
        let dataset = Dataset::default();
        assert!(build_estimator(&dataset, &small_params()).is_err());
    }
}
