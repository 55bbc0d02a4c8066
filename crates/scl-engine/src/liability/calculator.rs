//! Liability calculator
//!
//! Owns the registered checkpoints and turns them into a
//! [`LiabilityResult`] using the weight table resolved for the context.

use chrono::{Local, NaiveDateTime};
use scl_common::{
    round_dp, Checkpoint, CheckpointBreakdown, Context, EmptyInputError, LiabilityResult,
    Result, WeightMode, WeightTable, UNMATCHED_CHECKPOINT_WEIGHT,
};
use tracing::{debug, info, instrument};

use super::premium::PremiumEstimator;
use crate::weighting::resolve_weights;

/// Shared Control Liability calculator
#[derive(Debug, Clone, Default)]
pub struct LiabilityCalculator {
    mode: WeightMode,
    checkpoints: Vec<Checkpoint>,
}

impl LiabilityCalculator {
    pub fn new(mode: WeightMode) -> Self {
        Self {
            mode,
            checkpoints: Vec::new(),
        }
    }

    /// Create from a mode name ("static" or "dynamic")
    pub fn from_mode_str(mode: &str) -> Result<Self> {
        Ok(Self::new(mode.parse()?))
    }

    /// Register a checkpoint
    ///
    /// Fails without side effects if `human_weight` is outside [0, 100].
    pub fn add_checkpoint(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        human_weight: f64,
        rationale: impl Into<String>,
    ) -> Result<()> {
        let checkpoint = Checkpoint::new(name, description, human_weight, rationale)?;
        debug!(checkpoint = %checkpoint, "Registered checkpoint");
        self.checkpoints.push(checkpoint);
        Ok(())
    }

    pub fn mode(&self) -> WeightMode {
        self.mode
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Weight table this calculator would apply for `context`
    pub fn resolve_weights(&self, context: &Context) -> WeightTable {
        resolve_weights(self.mode, context)
    }

    /// Calculate the liability split stamped with the current local time
    pub fn calculate(&self, context: Option<&Context>) -> Result<LiabilityResult> {
        self.calculate_at(context, Local::now().naive_local())
    }

    /// Calculate the liability split stamped with `calculated_at`
    #[instrument(skip(self, context), fields(mode = %self.mode, checkpoints = self.checkpoints.len()))]
    pub fn calculate_at(
        &self,
        context: Option<&Context>,
        calculated_at: NaiveDateTime,
    ) -> Result<LiabilityResult> {
        if self.checkpoints.is_empty() {
            return Err(EmptyInputError.into());
        }

        let context = context.cloned().unwrap_or_default();
        let weights = self.resolve_weights(&context);

        let mut weighted_human_total = 0.0;
        let mut breakdown = Vec::with_capacity(self.checkpoints.len());

        for checkpoint in &self.checkpoints {
            let weight = weights.get(checkpoint.name()).unwrap_or_else(|| {
                debug!(
                    checkpoint = checkpoint.name(),
                    fallback = UNMATCHED_CHECKPOINT_WEIGHT,
                    "Checkpoint not in weight table, using fallback weight"
                );
                UNMATCHED_CHECKPOINT_WEIGHT
            });
            weighted_human_total += checkpoint.human_control_weight() * weight;
            breakdown.push(CheckpointBreakdown::new(checkpoint, weight));
        }

        let human_liability = weighted_human_total * 100.0;
        let safety_factor = context.safety_factor();
        let premium = PremiumEstimator::estimate(round_dp(human_liability, 2), safety_factor);

        let result = LiabilityResult::new(
            calculated_at,
            self.mode,
            human_liability,
            premium.adjusted_premium,
            premium.premium_reduction,
            context,
            breakdown,
        );

        info!(
            human = result.human_liability(),
            ai = result.ai_manufacturer_liability(),
            premium = result.estimated_premium(),
            "Liability calculated"
        );

        Ok(result)
    }
}
