//! CSV dataset loading.
//!
//! Two layouts are supported:
//! - the canonical layout: 8 feature columns in the service's fixed order
//!   plus the target (median house value in $100k units) as column 9;
//! - the raw census layout as published (longitude, latitude, median age,
//!   total rooms, total bedrooms, population, households, median income,
//!   median house value in dollars, optional trailing text column), from
//!   which the per-household averages are derived.
//!
//! Row order in the file is the deterministic base ordering that the
//! seeded split permutes.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use calhome_core::FEATURE_COUNT;

/// An in-memory training dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub features: Vec<[f64; FEATURE_COUNT]>,
    /// Median house value in $100k units.
    pub targets: Vec<f64>,
}

impl Dataset {
    /// Load the canonical layout: `income,age,rooms,bedrms,pop,occup,lat,lon,target`.
    ///
    /// Blank lines and `#` comments are skipped; a non-numeric first line
    /// is treated as a header.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read {}", path.as_ref().display()))?;

        let mut dataset = Self::default();
        let mut saw_data = false;

        for (line_idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() != FEATURE_COUNT + 1 {
                anyhow::bail!(
                    "line {}: expected {} columns, got {}",
                    line_idx + 1,
                    FEATURE_COUNT + 1,
                    parts.len()
                );
            }

            let parsed: Result<Vec<f64>, _> = parts.iter().map(|p| p.parse::<f64>()).collect();
            let values = match parsed {
                Ok(values) => values,
                Err(_) if !saw_data => continue, // header line
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("line {}: invalid number", line_idx + 1));
                }
            };

            let mut row = [0.0; FEATURE_COUNT];
            row.copy_from_slice(&values[..FEATURE_COUNT]);
            dataset.features.push(row);
            dataset.targets.push(values[FEATURE_COUNT]);
            saw_data = true;
        }

        if dataset.is_empty() {
            anyhow::bail!("dataset at {} is empty", path.as_ref().display());
        }

        Ok(dataset)
    }

    /// Load the raw census layout and derive the canonical features.
    ///
    /// Rows with missing fields or zero households are skipped (the
    /// published file has a small number of blank bedroom counts).
    pub fn from_raw_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read {}", path.as_ref().display()))?;

        let mut dataset = Self::default();
        let mut skipped = 0usize;
        let mut saw_data = false;

        for (line_idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() < 9 {
                anyhow::bail!(
                    "line {}: expected at least 9 columns, got {}",
                    line_idx + 1,
                    parts.len()
                );
            }

            // Only the first nine columns are numeric; anything after
            // (e.g. an ocean-proximity label) is ignored.
            let parsed: Result<Vec<f64>, _> =
                parts[..9].iter().map(|p| p.parse::<f64>()).collect();
            let cols = match parsed {
                Ok(cols) => cols,
                Err(_) if !saw_data => continue, // header line
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            saw_data = true;

            let &[longitude, latitude, house_age, total_rooms, total_bedrooms, population, households, median_income, house_value] =
                &cols[..9]
            else {
                unreachable!("length checked above");
            };

            if households <= 0.0 {
                skipped += 1;
                continue;
            }

            dataset.features.push([
                median_income,
                house_age,
                total_rooms / households,
                total_bedrooms / households,
                population,
                population / households,
                latitude,
                longitude,
            ]);
            dataset.targets.push(house_value / 100_000.0);
        }

        if skipped > 0 {
            warn!(skipped, "skipped rows with missing or unusable fields");
        }
        if dataset.is_empty() {
            anyhow::bail!("dataset at {} is empty", path.as_ref().display());
        }

        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Per-feature (min, max) over the whole dataset, for startup logs.
    pub fn feature_stats(&self) -> [(f64, f64); FEATURE_COUNT] {
        let mut stats = [(f64::INFINITY, f64::NEG_INFINITY); FEATURE_COUNT];
        for row in &self.features {
            for (stat, &value) in stats.iter_mut().zip(row.iter()) {
                stat.0 = stat.0.min(value);
                stat.1 = stat.1.max(value);
            }
        }
        stats
    }

    /// Select rows by index, in the given order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: indices.iter().map(|&i| self.features[i]).collect(),
            targets: indices.iter().map(|&i| self.targets[i]).collect(),
        }
    }
}
