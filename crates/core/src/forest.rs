//! Array-encoded regression forest evaluator.
//!
//! Each tree is a flat node vector walked iteratively from index 0; the
//! forest output is the mean of the per-tree leaf values. Trees are
//! produced by the trainer crate and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A decision tree node (internal or leaf).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Feature index to compare (internal nodes only).
    pub feature_index: u16,
    /// Split threshold; samples with `feature <= threshold` go left.
    pub threshold: f64,
    /// Index of the left child node.
    pub left: u32,
    /// Index of the right child node.
    pub right: u32,
    /// Leaf value (`None` for internal nodes).
    pub value: Option<f64>,
}

impl Node {
    /// Leaf constructor; link fields are unused for leaves.
    pub fn leaf(value: f64) -> Self {
        Self {
            feature_index: 0,
            threshold: 0.0,
            left: 0,
            right: 0,
            value: Some(value),
        }
    }
}

/// A single regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Walk the tree for one sample and return its leaf value.
    ///
    /// Malformed trees (dangling child index, feature index out of bounds)
    /// resolve to 0.0 rather than panicking.
    pub fn evaluate(&self, features: &[f64]) -> f64 {
        let mut idx = 0usize;

        loop {
            let Some(node) = self.nodes.get(idx) else {
                return 0.0;
            };

            if let Some(value) = node.value {
                return value;
            }

            let Some(&feature_value) = features.get(node.feature_index as usize) else {
                return 0.0;
            };

            idx = if feature_value <= node.threshold {
                node.left as usize
            } else {
                node.right as usize
            };
        }
    }
}

/// Descriptive metadata recorded at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub tree_count: usize,
    pub feature_count: usize,
    pub max_depth: usize,
    pub seed: u64,
    pub training_rows: usize,
}

/// A fitted averaged forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub trees: Vec<Tree>,
    pub metadata: ModelMetadata,
}

impl ForestModel {
    /// Predict one standardized sample: mean of all tree outputs.
    pub fn predict(&self, features: &[f64]) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.trees.iter().map(|t| t.evaluate(features)).sum();
        sum / self.trees.len() as f64
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn total_nodes(&self) -> usize {
        self.trees.iter().map(|t| t.nodes.len()).sum()
    }
}
