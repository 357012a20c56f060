//! Fitted artifacts and the home value estimation service.
//!
//! The trainer crate builds an [`Estimator`] once per process; this crate
//! holds everything a prediction needs afterwards:
//! - `types`: the 8-feature housing block input, bounds, defaults
//! - `scaler`: fitted per-feature standardization
//! - `forest`: array-encoded averaged regression forest
//! - `tier`: price band table and dollar formatting
//! - `estimator`: the scale → predict → tier pipeline
//!
//! Everything here is immutable once constructed and safe to share
//! read-only across threads.

pub mod errors;
pub mod estimator;
pub mod forest;
pub mod scaler;
pub mod tier;
pub mod types;

pub use errors::PredictError;
pub use estimator::{Estimate, Estimator};
pub use forest::{ForestModel, ModelMetadata, Node, Tree};
pub use scaler::StandardScaler;
pub use tier::{format_usd, tier_for, TIERS};
pub use types::{HousingBlock, FEATURE_COUNT, FEATURE_NAMES, SLIDER_BOUNDS, TARGET_UNIT_DOLLARS};

/// Crate version string for logs and saved-model metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
