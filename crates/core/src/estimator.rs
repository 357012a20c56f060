//! The prediction service: scale, predict, convert to dollars, tier.
//!
//! An [`Estimator`] pairs the fitted scaler with the fitted forest. The
//! two are produced together from the same training split and must never
//! be mixed with artifacts from another build, so the pair is the unit
//! the service hands around. Callers inject it explicitly; there is no
//! ambient global here (the trainer crate offers a process-wide cache).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::PredictError;
use crate::forest::ForestModel;
use crate::scaler::StandardScaler;
use crate::tier::{format_usd, tier_for};
use crate::types::{HousingBlock, TARGET_UNIT_DOLLARS};

/// One display-ready estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Predicted median home value in dollars.
    pub dollars: f64,
    /// Formatted amount, thousands separators, no decimals.
    pub formatted: String,
    /// Price tier label.
    pub tier: &'static str,
}

/// The fitted (scaler, model) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimator {
    pub scaler: StandardScaler,
    pub model: ForestModel,
}

impl Estimator {
    /// Estimate the median home value for one housing block.
    ///
    /// Slider values outside their UI bounds extrapolate; only non-finite
    /// fields are rejected.
    pub fn estimate(&self, block: &HousingBlock) -> Result<Estimate, PredictError> {
        self.estimate_slice(&block.to_features())
    }

    /// Estimate from a raw feature slice in canonical order.
    ///
    /// Rejects wrong arity and non-finite values with
    /// [`PredictError::InvalidInput`]; never partially predicts.
    pub fn estimate_slice(&self, features: &[f64]) -> Result<Estimate, PredictError> {
        if features.len() != self.scaler.width() {
            return Err(PredictError::InvalidInput(format!(
                "expected {} features, got {}",
                self.scaler.width(),
                features.len()
            )));
        }
        if let Some(pos) = features.iter().position(|v| !v.is_finite()) {
            return Err(PredictError::InvalidInput(format!(
                "feature {pos} is not a finite number"
            )));
        }

        let scaled = self.scaler.transform(features)?;
        let raw = self.model.predict(&scaled);
        let dollars = raw * TARGET_UNIT_DOLLARS;

        debug!(raw, dollars, "estimate computed");

        Ok(Estimate {
            dollars,
            formatted: format_usd(dollars),
            tier: tier_for(dollars),
        })
    }
}
