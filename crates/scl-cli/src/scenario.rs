//! Incident scenarios fed to the calculator

use std::path::Path;

use scl_common::types::context::{HUMAN_OVERRIDE_PRESENT, SENSOR_DEGRADATION, UNSUPERVISED_FSD};
use scl_common::{Context, LiabilityResult, Result, WeightMode};
use scl_engine::LiabilityCalculator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One checkpoint as written in a scenario file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub human_weight: f64,
    #[serde(default)]
    pub rationale: String,
}

/// Checkpoints plus context for one incident
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub mode: Option<WeightMode>,
    pub checkpoints: Vec<CheckpointInput>,
    #[serde(default)]
    pub context: Context,
}

impl Scenario {
    /// Autonomous-vehicle rollover with all three context flags set
    pub fn reference() -> Self {
        let cp = |name: &str, description: &str, human_weight: f64, rationale: &str| CheckpointInput {
            name: name.to_string(),
            description: description.to_string(),
            human_weight,
            rationale: rationale.to_string(),
        };

        Self {
            mode: Some(WeightMode::Dynamic),
            checkpoints: vec![
                cp("Human Input", "Passenger requested detour via app", 40.0, "Chose non-optimal route"),
                cp("AI Transformation", "Lidar confidence dropped", 10.0, "Known sensor degradation"),
                cp(
                    "Shared State",
                    "No real-time override; AI confidence <60%",
                    30.0,
                    "Passive human presence",
                ),
                cp("Output/Action", "AI evasive maneuver → rollover", 5.0, "Unsupervised execution"),
            ],
            context: Context::new()
                .with_flag(UNSUPERVISED_FSD, true)
                .with_flag(SENSOR_DEGRADATION, true)
                .with_flag(HUMAN_OVERRIDE_PRESENT, true)
                .with_safety_factor(0.12),
        }
    }

    /// Read a scenario from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let scenario: Scenario = serde_json::from_str(&content)?;
        debug!(path = %path.display(), checkpoints = scenario.checkpoints.len(), "Loaded scenario");
        Ok(scenario)
    }

    /// Register every checkpoint and run the calculation
    ///
    /// The scenario's own mode wins over `fallback_mode`.
    pub fn run(&self, fallback_mode: Option<WeightMode>) -> Result<LiabilityResult> {
        let mode = self.mode.or(fallback_mode).unwrap_or_default();
        let mut calculator = LiabilityCalculator::new(mode);
        for input in &self.checkpoints {
            calculator.add_checkpoint(
                input.name.as_str(),
                input.description.as_str(),
                input.human_weight,
                input.rationale.as_str(),
            )?;
        }
        info!(%mode, checkpoints = calculator.len(), "Running liability calculation");
        calculator.calculate(Some(&self.context))
    }
}
