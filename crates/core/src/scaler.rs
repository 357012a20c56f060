//! Per-feature standardization.
//!
//! The statistics are fitted once over the training split (see the trainer
//! crate) and applied unchanged to every prediction afterwards. A feature
//! with zero spread carries std 1.0 so transforming it is a plain shift.

use serde::{Deserialize, Serialize};

use crate::errors::PredictError;

/// Fitted standardization statistics, one mean/std pair per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl StandardScaler {
    /// Number of features this scaler was fitted on.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Standardize one row: `(x - mean) / std` elementwise.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictError> {
        if features.len() != self.width() {
            return Err(PredictError::InvalidInput(format!(
                "expected {} features, got {}",
                self.width(),
                features.len()
            )));
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.std.iter()))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect())
    }

    /// Invert [`transform`](Self::transform).
    pub fn inverse_transform(&self, scaled: &[f64]) -> Result<Vec<f64>, PredictError> {
        if scaled.len() != self.width() {
            return Err(PredictError::InvalidInput(format!(
                "expected {} features, got {}",
                self.width(),
                scaled.len()
            )));
        }
        Ok(scaled
            .iter()
            .zip(self.mean.iter().zip(self.std.iter()))
            .map(|(&z, (&m, &s))| z * s + m)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            mean: vec![2.5, 25.0, 2.5],
            std: vec![1.25f64.sqrt(), 125.0f64.sqrt(), 31.25f64.sqrt()],
        }
    }

    #[test]
    fn transform_then_inverse_is_identity() {
        let scaler = scaler();
        let x = vec![3.3, 17.0, -2.5];
        let z = scaler.transform(&x).unwrap();
        let back = scaler.inverse_transform(&z).unwrap();
        for (a, b) in x.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn mean_maps_to_zero() {
        let scaler = scaler();
        let z = scaler.transform(&[2.5, 25.0, 2.5]).unwrap();
        for v in z {
            assert!(v.abs() < 1e-12);
        }
    }

    #[test]
    fn wrong_width_is_rejected() {
        let scaler = scaler();
        assert!(scaler.transform(&[1.0]).is_err());
        assert!(scaler.inverse_transform(&[1.0, 2.0]).is_err());
    }
}
