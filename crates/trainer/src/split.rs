//! Deterministic train/test partitioning.
//!
//! The dataset's file order is permuted with a seeded Fisher–Yates
//! shuffle and cut at the test fraction. The test split is carried only
//! so the seed reproduces the original partition exactly; nothing here
//! evaluates against it.

use crate::dataset::Dataset;
use crate::deterministic::shuffled_indices;
use crate::errors::BuildError;

/// The two halves of a seeded split.
#[derive(Clone, Debug)]
pub struct TrainTestSplit {
    pub train: Dataset,
    pub test: Dataset,
}

/// Shuffle with `seed` and split off `test_fraction` of the rows.
pub fn train_test_split(
    dataset: &Dataset,
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit, BuildError> {
    if !(0.0..1.0).contains(&test_fraction) {
        return Err(BuildError::Dataset(format!(
            "test fraction must be in [0, 1), got {test_fraction}"
        )));
    }

    let n = dataset.len();
    let indices = shuffled_indices(n, seed);

    let test_len = (n as f64 * test_fraction).round() as usize;
    let (test_idx, train_idx) = indices.split_at(test_len.min(n));

    if train_idx.is_empty() {
        return Err(BuildError::Dataset(
            "training split is empty after partitioning".into(),
        ));
    }

    Ok(TrainTestSplit {
        train: dataset.select(train_idx),
        test: dataset.select(test_idx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(n: usize) -> Dataset {
        let mut d = Dataset::default();
        for i in 0..n {
            let v = i as f64;
            d.features.push([v, v, v, v, v, v, v, v]);
            d.targets.push(v);
        }
        d
    }

    #[test]
    fn split_sizes_match_fraction() {
        let split = train_test_split(&dataset(100), 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 20);
        assert_eq!(split.train.len(), 80);
    }

    #[test]
    fn split_is_a_partition() {
        let split = train_test_split(&dataset(50), 0.2, 42).unwrap();
        let mut seen: Vec<f64> = split
            .train
            .targets
            .iter()
            .chain(split.test.targets.iter())
            .copied()
            .collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, (0..50).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_reproduces_the_partition() {
        let d = dataset(64);
        let a = train_test_split(&d, 0.25, 42).unwrap();
        let b = train_test_split(&d, 0.25, 42).unwrap();
        assert_eq!(a.train.targets, b.train.targets);
        assert_eq!(a.test.targets, b.test.targets);

        let c = train_test_split(&d, 0.25, 7).unwrap();
        assert_ne!(a.train.targets, c.train.targets);
    }

    #[test]
    fn bad_fraction_is_rejected() {
        assert!(train_test_split(&dataset(10), 1.0, 42).is_err());
        assert!(train_test_split(&dataset(10), -0.1, 42).is_err());
    }

    #[test]
    fn zero_fraction_keeps_everything_in_train() {
        let split = train_test_split(&dataset(10), 0.0, 42).unwrap();
        assert_eq!(split.train.len(), 10);
        assert!(split.test.is_empty());
    }
}
