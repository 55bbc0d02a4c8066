//! WeightTable - Share of the aggregate assigned to each factor
//!
//! The default table splits the aggregate evenly across the four canonical
//! factors. Dynamic weighting edits a working copy and normalizes it once
//! so the weights sum to 1.0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{CANONICAL_FACTORS, DEFAULT_FACTOR_WEIGHT, WEIGHT_SUM_TOLERANCE};

/// How checkpoint weights are chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// Fixed default table, context ignored
    Static,
    /// Default table adjusted by context flags, then normalized
    #[default]
    Dynamic,
}

impl WeightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightMode::Static => "static",
            WeightMode::Dynamic => "dynamic",
        }
    }
}

impl FromStr for WeightMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(WeightMode::Static),
            "dynamic" => Ok(WeightMode::Dynamic),
            _ => Err(ValidationError::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for WeightMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One factor and its weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeight {
    pub factor: String,
    pub weight: f64,
}

/// Ordered factor-name to weight mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    entries: Vec<FactorWeight>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::canonical()
    }
}

impl WeightTable {
    /// Equal weight for each canonical factor
    pub fn canonical() -> Self {
        Self {
            entries: CANONICAL_FACTORS
                .iter()
                .map(|factor| FactorWeight {
                    factor: (*factor).to_string(),
                    weight: DEFAULT_FACTOR_WEIGHT,
                })
                .collect(),
        }
    }

    /// Weight for a factor, if present
    pub fn get(&self, factor: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.factor == factor)
            .map(|e| e.weight)
    }

    /// Absolute override; appends the factor if missing
    pub fn set(&mut self, factor: &str, weight: f64) {
        match self.entries.iter_mut().find(|e| e.factor == factor) {
            Some(entry) => entry.weight = weight,
            None => self.entries.push(FactorWeight {
                factor: factor.to_string(),
                weight,
            }),
        }
    }

    /// Additive adjustment; a missing factor starts from zero
    pub fn add(&mut self, factor: &str, delta: f64) {
        let current = self.get(factor).unwrap_or(0.0);
        self.set(factor, current + delta);
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Copy with every weight divided by the total
    ///
    /// A table whose total is zero or non-finite is returned unchanged.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total == 0.0 || !total.is_finite() {
            return self.clone();
        }
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| FactorWeight {
                    factor: e.factor.clone(),
                    weight: e.weight / total,
                })
                .collect(),
        }
    }

    /// Whether the weights sum to 1.0 within tolerance
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactorWeight> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
