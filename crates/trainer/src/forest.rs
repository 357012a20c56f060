//! Bagged forest training.
//!
//! Each tree is fitted on a bootstrap resample of the (standardized)
//! training rows with its own RNG stream forked from the master seed, so
//! the whole forest is reproducible from one integer.

use tracing::{debug, info};

use calhome_core::{ForestModel, ModelMetadata};

use crate::cart::{TreeBuilder, TreeConfig};
use crate::deterministic::LcgRng;
use crate::errors::BuildError;

/// Forest training parameters.
#[derive(Clone, Debug)]
pub struct ForestParams {
    pub num_trees: usize,
    pub max_depth: usize,
    pub min_samples_leaf: usize,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            num_trees: 100,
            max_depth: 16,
            min_samples_leaf: 3,
            seed: 42,
        }
    }
}

/// Trains a [`ForestModel`] from standardized features and raw targets.
pub struct ForestTrainer {
    params: ForestParams,
}

impl ForestTrainer {
    pub fn new(params: ForestParams) -> Self {
        Self { params }
    }

    pub fn fit(&self, features: &[Vec<f64>], targets: &[f64]) -> Result<ForestModel, BuildError> {
        let n = features.len();
        if n == 0 {
            return Err(BuildError::Training("no training rows".into()));
        }
        if n != targets.len() {
            return Err(BuildError::Training(format!(
                "feature/target length mismatch: {n} vs {}",
                targets.len()
            )));
        }
        if self.params.num_trees == 0 {
            return Err(BuildError::Training("forest needs at least one tree".into()));
        }

        let feature_count = features[0].len();
        let tree_config = TreeConfig {
            max_depth: self.params.max_depth,
            min_samples_leaf: self.params.min_samples_leaf,
        };
        let builder = TreeBuilder::new(features, targets, tree_config);

        let mut master = LcgRng::new(self.params.seed);
        let mut trees = Vec::with_capacity(self.params.num_trees);

        for tree_idx in 0..self.params.num_trees {
            let mut rng = LcgRng::new(master.fork_seed());
            let bootstrap: Vec<usize> =
                (0..n).map(|_| rng.next_range(n as u64) as usize).collect();

            let tree = builder.build(&bootstrap);
            debug!(tree_idx, nodes = tree.nodes.len(), "trained tree");
            trees.push(tree);
        }

        info!(
            trees = trees.len(),
            rows = n,
            feature_count,
            seed = self.params.seed,
            "forest training complete"
        );

        Ok(ForestModel {
            trees,
            metadata: ModelMetadata {
                tree_count: self.params.num_trees,
                feature_count,
                max_depth: self.params.max_depth,
                seed: self.params.seed,
                training_rows: n,
            },
        })
    }
}
