//! Input and output types for the estimation service.
//!
//! Feature order is fixed and significant: the scaler statistics and every
//! tree threshold are indexed by position, so `HousingBlock::to_features`
//! is the single place that defines the ordering.

use serde::{Deserialize, Serialize};

/// Number of input features per housing block.
pub const FEATURE_COUNT: usize = 8;

/// Dataset targets are expressed in units of $100,000.
pub const TARGET_UNIT_DOLLARS: f64 = 100_000.0;

/// One census block group, as described by the eight input sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousingBlock {
    /// Median household income, in tens of thousands of USD.
    pub median_income: f64,
    /// Median house age in years.
    pub house_age: f64,
    /// Average rooms per household.
    pub avg_rooms: f64,
    /// Average bedrooms per household.
    pub avg_bedrooms: f64,
    /// Block group population.
    pub population: f64,
    /// Average household occupancy.
    pub avg_occupancy: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees (negative across California).
    pub longitude: f64,
}

impl HousingBlock {
    /// Flatten into the canonical feature order.
    pub fn to_features(self) -> [f64; FEATURE_COUNT] {
        [
            self.median_income,
            self.house_age,
            self.avg_rooms,
            self.avg_bedrooms,
            self.population,
            self.avg_occupancy,
            self.latitude,
            self.longitude,
        ]
    }

    /// Build from a slice in canonical feature order.
    ///
    /// Returns `None` if the slice is not exactly [`FEATURE_COUNT`] long.
    pub fn from_features(features: &[f64]) -> Option<Self> {
        if features.len() != FEATURE_COUNT {
            return None;
        }
        Some(Self {
            median_income: features[0],
            house_age: features[1],
            avg_rooms: features[2],
            avg_bedrooms: features[3],
            population: features[4],
            avg_occupancy: features[5],
            latitude: features[6],
            longitude: features[7],
        })
    }
}

impl Default for HousingBlock {
    /// The default slider values of the demo UI.
    fn default() -> Self {
        Self {
            median_income: 5.0,
            house_age: 20.0,
            avg_rooms: 5.0,
            avg_bedrooms: 1.0,
            population: 1000.0,
            avg_occupancy: 3.0,
            latitude: 34.0,
            longitude: -118.0,
        }
    }
}

/// Inclusive slider bounds per feature, in canonical order.
///
/// The service itself does not reject values outside these bounds; they
/// document the range the surrounding UI offers.
pub const SLIDER_BOUNDS: [(f64, f64); FEATURE_COUNT] = [
    (0.5, 15.0),        // median income
    (1.0, 52.0),        // house age
    (1.0, 15.0),        // avg rooms
    (1.0, 5.0),         // avg bedrooms
    (3.0, 35_000.0),    // population
    (1.0, 10.0),        // avg occupancy
    (32.0, 42.0),       // latitude
    (-124.0, -114.0),   // longitude
];

/// Human-readable feature names, in canonical order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "median_income",
    "house_age",
    "avg_rooms",
    "avg_bedrooms",
    "population",
    "avg_occupancy",
    "latitude",
    "longitude",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_order_round_trips() {
        let block = HousingBlock::default();
        let features = block.to_features();
        let back = HousingBlock::from_features(&features).unwrap();
        assert_eq!(block, back);
    }

    #[test]
    fn from_features_rejects_wrong_arity() {
        assert!(HousingBlock::from_features(&[1.0; 7]).is_none());
        assert!(HousingBlock::from_features(&[1.0; 9]).is_none());
    }

    #[test]
    fn defaults_sit_inside_slider_bounds() {
        let features = HousingBlock::default().to_features();
        for (value, (lo, hi)) in features.iter().zip(SLIDER_BOUNDS.iter()) {
            assert!(value >= lo && value <= hi);
        }
    }
}
