//! Exact-greedy regression tree builder.
//!
//! Splits minimize the summed squared error of the two children: for each
//! feature the samples are sorted once and every cut point between
//! distinct values is scored with prefix sums. Ties keep the first best
//! candidate in feature-then-threshold order, so construction is fully
//! deterministic for a fixed input.

use calhome_core::{Node, Tree};

/// Stopping parameters for a single tree.
#[derive(Clone, Debug)]
pub struct TreeConfig {
    pub max_depth: usize,
    pub min_samples_leaf: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 16,
            min_samples_leaf: 3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    feature_idx: usize,
    threshold: f64,
    gain: f64,
}

/// Builds one regression tree over (a bootstrap of) the training rows.
pub struct TreeBuilder<'a> {
    features: &'a [Vec<f64>],
    targets: &'a [f64],
    config: TreeConfig,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(features: &'a [Vec<f64>], targets: &'a [f64], config: TreeConfig) -> Self {
        assert_eq!(features.len(), targets.len());
        Self {
            features,
            targets,
            config,
        }
    }

    /// Build a tree over the given sample indices (duplicates allowed,
    /// as produced by bootstrap resampling).
    pub fn build(&self, indices: &[usize]) -> Tree {
        let mut nodes = Vec::new();
        self.build_node(indices, 0, &mut nodes);
        Tree { nodes }
    }

    fn build_node(&self, indices: &[usize], depth: usize, nodes: &mut Vec<Node>) -> u32 {
        let current_idx = nodes.len() as u32;
        let leaf_value = self.mean_target(indices);

        if depth >= self.config.max_depth || indices.len() < 2 * self.config.min_samples_leaf {
            nodes.push(Node::leaf(leaf_value));
            return current_idx;
        }

        let Some(split) = self.find_best_split(indices) else {
            nodes.push(Node::leaf(leaf_value));
            return current_idx;
        };

        let (left_indices, right_indices) =
            self.partition(indices, split.feature_idx, split.threshold);

        if left_indices.len() < self.config.min_samples_leaf
            || right_indices.len() < self.config.min_samples_leaf
        {
            nodes.push(Node::leaf(leaf_value));
            return current_idx;
        }

        // Reserve the internal node, then link the subtrees in.
        nodes.push(Node {
            feature_index: split.feature_idx as u16,
            threshold: split.threshold,
            left: 0,
            right: 0,
            value: None,
        });

        let left_idx = self.build_node(&left_indices, depth + 1, nodes);
        let right_idx = self.build_node(&right_indices, depth + 1, nodes);

        nodes[current_idx as usize].left = left_idx;
        nodes[current_idx as usize].right = right_idx;

        current_idx
    }

    fn find_best_split(&self, indices: &[usize]) -> Option<SplitCandidate> {
        let n = indices.len();
        let feature_count = self.features.first().map_or(0, Vec::len);
        let min_leaf = self.config.min_samples_leaf;

        let parent_sum: f64 = indices.iter().map(|&i| self.targets[i]).sum();
        let parent_sumsq: f64 = indices.iter().map(|&i| self.targets[i].powi(2)).sum();
        let parent_sse = parent_sumsq - parent_sum * parent_sum / n as f64;

        let mut best: Option<SplitCandidate> = None;
        let mut sorted: Vec<(f64, f64)> = Vec::with_capacity(n);

        for feature_idx in 0..feature_count {
            sorted.clear();
            sorted.extend(
                indices
                    .iter()
                    .map(|&i| (self.features[i][feature_idx], self.targets[i])),
            );
            sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut left_sum = 0.0;
            let mut left_sumsq = 0.0;

            for cut in 1..n {
                let (value, target) = sorted[cut - 1];
                left_sum += target;
                left_sumsq += target * target;

                // Cannot cut between equal feature values.
                if sorted[cut].0 <= value {
                    continue;
                }
                if cut < min_leaf || n - cut < min_leaf {
                    continue;
                }

                let right_sum = parent_sum - left_sum;
                let right_sumsq = parent_sumsq - left_sumsq;
                let left_sse = left_sumsq - left_sum * left_sum / cut as f64;
                let right_sse = right_sumsq - right_sum * right_sum / (n - cut) as f64;
                let gain = parent_sse - left_sse - right_sse;

                if gain <= 1e-12 {
                    continue;
                }

                let threshold = value + (sorted[cut].0 - value) / 2.0;
                if best.map_or(true, |b| gain > b.gain) {
                    best = Some(SplitCandidate {
                        feature_idx,
                        threshold,
                        gain,
                    });
                }
            }
        }

        best
    }

    fn partition(
        &self,
        indices: &[usize],
        feature_idx: usize,
        threshold: f64,
    ) -> (Vec<usize>, Vec<usize>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for &idx in indices {
            if self.features[idx][feature_idx] <= threshold {
                left.push(idx);
            } else {
                right.push(idx);
            }
        }
        (left, right)
    }

    fn mean_target(&self, indices: &[usize]) -> f64 {
        if indices.is_empty() {
            return 0.0;
        }
        let sum: f64 = indices.iter().map(|&i| self.targets[i]).sum();
        sum / indices.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[(f64, f64)]) -> (Vec<Vec<f64>>, Vec<f64>) {
        let features = data.iter().map(|&(x, _)| vec![x]).collect();
        let targets = data.iter().map(|&(_, y)| y).collect();
        (features, targets)
    }

    #[test]
    fn splits_a_clean_step_function() {
        let (features, targets) =
            rows(&[(1.0, 10.0), (2.0, 10.0), (3.0, 50.0), (4.0, 50.0)]);
        let config = TreeConfig {
            max_depth: 2,
            min_samples_leaf: 1,
        };
        let builder = TreeBuilder::new(&features, &targets, config);
        let tree = builder.build(&[0, 1, 2, 3]);

        assert_eq!(tree.evaluate(&[1.5]), 10.0);
        assert_eq!(tree.evaluate(&[3.5]), 50.0);
        // Threshold sits between 2.0 and 3.0.
        assert_eq!(tree.evaluate(&[2.4]), 10.0);
        assert_eq!(tree.evaluate(&[2.6]), 50.0);
    }

    #[test]
    fn constant_targets_make_a_single_leaf() {
        let (features, targets) = rows(&[(1.0, 7.0), (2.0, 7.0), (3.0, 7.0)]);
        let builder = TreeBuilder::new(&features, &targets, TreeConfig {
            max_depth: 4,
            min_samples_leaf: 1,
        });
        let tree = builder.build(&[0, 1, 2]);

        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.evaluate(&[2.0]), 7.0);
    }

    #[test]
    fn depth_zero_yields_the_mean() {
        let (features, targets) = rows(&[(1.0, 2.0), (2.0, 4.0)]);
        let builder = TreeBuilder::new(&features, &targets, TreeConfig {
            max_depth: 0,
            min_samples_leaf: 1,
        });
        let tree = builder.build(&[0, 1]);
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.evaluate(&[1.0]), 3.0);
    }

    #[test]
    fn min_samples_leaf_blocks_tiny_splits() {
        let (features, targets) = rows(&[(1.0, 1.0), (2.0, 100.0)]);
        let builder = TreeBuilder::new(&features, &targets, TreeConfig {
            max_depth: 4,
            min_samples_leaf: 2,
        });
        let tree = builder.build(&[0, 1]);
        assert_eq!(tree.nodes.len(), 1);
    }

    #[test]
    fn construction_is_deterministic() {
        let (features, targets) = rows(&[
            (0.3, 1.2),
            (1.7, 3.4),
            (0.9, 2.1),
            (2.5, 4.8),
            (1.1, 2.9),
            (3.0, 5.5),
        ]);
        let config = TreeConfig {
            max_depth: 3,
            min_samples_leaf: 1,
        };
        let indices: Vec<usize> = (0..targets.len()).collect();
        let a = TreeBuilder::new(&features, &targets, config.clone()).build(&indices);
        let b = TreeBuilder::new(&features, &targets, config).build(&indices);
        assert_eq!(a, b);
    }

    #[test]
    fn bootstrap_duplicates_are_handled() {
        let (features, targets) = rows(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let builder = TreeBuilder::new(&features, &targets, TreeConfig {
            max_depth: 3,
            min_samples_leaf: 1,
        });
        let tree = builder.build(&[0, 0, 1, 2, 2, 2]);
        assert!(tree.evaluate(&[3.0]).is_finite());
    }
}
