//! Deterministic trainer for the home value estimator.
//!
//! Builds the fitted (scaler, model) pair the service crate consumes:
//! load the housing CSV, shuffle-split 80/20 with a fixed seed, fit the
//! standardization statistics on the training split, and bag 100
//! variance-reduction trees over the standardized rows. Identical inputs
//! and seeds reproduce the pair bit for bit.

pub mod build;
pub mod cache;
pub mod cart;
pub mod dataset;
pub mod deterministic;
pub mod errors;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod forest;
pub mod split;

use std::path::Path;

use calhome_core::Estimator;

pub use build::{build_estimator, fit_scaler, TrainerParams};
pub use cache::{cached_estimator, shared_estimator};
pub use dataset::Dataset;
pub use deterministic::LcgRng;
pub use errors::BuildError;
pub use forest::{ForestParams, ForestTrainer};
pub use split::{train_test_split, TrainTestSplit};

/// Which CSV layout a file uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsvLayout {
    /// 8 canonical feature columns plus the $100k-unit target.
    Canonical,
    /// The published raw census columns; averages are derived on load.
    RawCensus,
}

/// Build an estimator straight from a CSV file.
pub fn train_estimator_from_csv(
    path: &Path,
    layout: CsvLayout,
    params: &TrainerParams,
) -> Result<Estimator, BuildError> {
    let dataset = match layout {
        CsvLayout::Canonical => Dataset::from_csv(path),
        CsvLayout::RawCensus => Dataset::from_raw_csv(path),
    }
    .map_err(|err| BuildError::Dataset(format!("{err:#}")))?;

    build_estimator(&dataset, params)
}

/// Library version, recorded in logs.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
