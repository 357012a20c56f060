//! Error types for the estimation service.

use thiserror::Error;

/// Errors reported to a single prediction caller.
///
/// A bad request never touches the fitted artifacts; subsequent valid
/// requests are unaffected.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Malformed prediction request: wrong dimensionality or non-numeric
    /// (NaN / infinite) input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
