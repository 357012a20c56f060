//! Error types for the trainer.

use thiserror::Error;

/// A fatal build failure: the dataset could not be obtained or the fit
/// could not run. There is no fallback model; startup halts here.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("training error: {0}")]
    Training(String),
}
