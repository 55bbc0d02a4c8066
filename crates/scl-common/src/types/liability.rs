//! Liability result types
//!
//! A [`LiabilityResult`] is a snapshot produced by one aggregation call.
//! The serialized field names are a stable external shape and keep their
//! `%` suffixes.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::checkpoint::Checkpoint;
use super::context::Context;
use super::weight_table::WeightMode;
use crate::MAX_CONTROL_PERCENT;

/// Round to `places` decimal places
///
/// Rounds the exact stored binary value, ties to even, so `4.35` (stored
/// just below 4.35) gives `4.3`. Non-finite values are returned unchanged.
pub fn round_dp(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Per-checkpoint audit record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointBreakdown {
    #[serde(rename = "checkpoint")]
    name: String,

    description: String,

    #[serde(rename = "human_weight_%")]
    human_weight: f64,

    #[serde(rename = "ai_weight_%")]
    ai_weight: f64,

    /// Weight actually applied (3 dp)
    #[serde(rename = "checkpoint_weight")]
    applied_weight: f64,

    /// Human percentage times applied weight (3 dp)
    weighted_human: f64,

    rationale: String,
}

impl CheckpointBreakdown {
    /// Record a checkpoint together with the weight it received
    pub fn new(checkpoint: &Checkpoint, applied_weight: f64) -> Self {
        Self {
            name: checkpoint.name().to_string(),
            description: checkpoint.description().to_string(),
            human_weight: checkpoint.human_control_weight(),
            ai_weight: checkpoint.ai_control_weight(),
            applied_weight: round_dp(applied_weight, 3),
            weighted_human: round_dp(checkpoint.human_control_weight() * applied_weight, 3),
            rationale: checkpoint.rationale().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn human_weight(&self) -> f64 {
        self.human_weight
    }

    pub fn ai_weight(&self) -> f64 {
        self.ai_weight
    }

    pub fn applied_weight(&self) -> f64 {
        self.applied_weight
    }

    pub fn weighted_human(&self) -> f64 {
        self.weighted_human
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }
}

/// Outcome of a liability calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiabilityResult {
    /// Local calculation time, `%Y-%m-%d %H:%M:%S`
    date: String,

    mode: WeightMode,

    #[serde(rename = "human_liability_%")]
    human_liability: f64,

    #[serde(rename = "ai_manufacturer_liability_%")]
    ai_manufacturer_liability: f64,

    #[serde(rename = "estimated_premium_%_of_human")]
    estimated_premium: f64,

    #[serde(rename = "premium_reduction_%")]
    premium_reduction: f64,

    /// Context exactly as supplied
    context: Context,

    checkpoints: Vec<CheckpointBreakdown>,
}

impl LiabilityResult {
    /// Timestamp format of the `date` field
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Assemble a result
    ///
    /// `human_liability` is rounded to 2 dp and the AI/manufacturer share is
    /// derived from it, so the pair always sums to 100.
    pub fn new(
        calculated_at: NaiveDateTime,
        mode: WeightMode,
        human_liability: f64,
        estimated_premium: f64,
        premium_reduction: f64,
        context: Context,
        checkpoints: Vec<CheckpointBreakdown>,
    ) -> Self {
        let human_liability = round_dp(human_liability, 2);
        Self {
            date: calculated_at.format(Self::DATE_FORMAT).to_string(),
            mode,
            human_liability,
            ai_manufacturer_liability: round_dp(MAX_CONTROL_PERCENT - human_liability, 2),
            estimated_premium,
            premium_reduction,
            context,
            checkpoints,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn mode(&self) -> WeightMode {
        self.mode
    }

    pub fn human_liability(&self) -> f64 {
        self.human_liability
    }

    pub fn ai_manufacturer_liability(&self) -> f64 {
        self.ai_manufacturer_liability
    }

    pub fn estimated_premium(&self) -> f64 {
        self.estimated_premium
    }

    pub fn premium_reduction(&self) -> f64 {
        self.premium_reduction
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn checkpoints(&self) -> &[CheckpointBreakdown] {
        &self.checkpoints
    }

    /// Pretty-printed JSON in the stable field shape
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
