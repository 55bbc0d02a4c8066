//! Context-driven weight adjustments
//!
//! Applied in declaration order to a working copy of the default table.
//! Later steps read the values left by earlier ones, so the order of
//! [`DYNAMIC_ADJUSTMENTS`] is part of the contract.

use scl_common::{Context, WeightTable, AI_TRANSFORMATION, HUMAN_INPUT, OUTPUT_ACTION, SHARED_STATE};

/// "Output/Action" weight when no supervising driver was present
pub const UNSUPERVISED_OUTPUT_WEIGHT: f64 = 0.40;

/// "AI Transformation" increase when no supervising driver was present
pub const UNSUPERVISED_AI_INCREMENT: f64 = 0.10;

/// "Human Input" weight when a human override was available
pub const OVERRIDE_HUMAN_WEIGHT: f64 = 0.35;

/// "AI Transformation" increase under sensor degradation
pub const DEGRADATION_AI_INCREMENT: f64 = 0.10;

/// "Shared State" increase under sensor degradation
pub const DEGRADATION_SHARED_INCREMENT: f64 = 0.05;

/// A named, flag-gated edit of the working table
#[derive(Debug, Clone, Copy)]
pub struct Adjustment {
    /// Step name used in logs
    pub name: &'static str,
    /// Whether the step applies to this context
    pub applies: fn(&Context) -> bool,
    /// The edit itself
    pub apply: fn(&mut WeightTable),
}

/// Dynamic-mode steps, in application order
pub const DYNAMIC_ADJUSTMENTS: [Adjustment; 3] = [
    Adjustment {
        name: "unsupervised_fsd",
        applies: Context::unsupervised_fsd,
        apply: apply_unsupervised,
    },
    Adjustment {
        name: "human_override_present",
        applies: Context::human_override_present,
        apply: apply_human_override,
    },
    Adjustment {
        name: "sensor_degradation",
        applies: Context::sensor_degradation,
        apply: apply_sensor_degradation,
    },
];

fn apply_unsupervised(table: &mut WeightTable) {
    table.set(OUTPUT_ACTION, UNSUPERVISED_OUTPUT_WEIGHT);
    table.add(AI_TRANSFORMATION, UNSUPERVISED_AI_INCREMENT);
}

fn apply_human_override(table: &mut WeightTable) {
    table.set(HUMAN_INPUT, OVERRIDE_HUMAN_WEIGHT);
}

fn apply_sensor_degradation(table: &mut WeightTable) {
    table.add(AI_TRANSFORMATION, DEGRADATION_AI_INCREMENT);
    table.add(SHARED_STATE, DEGRADATION_SHARED_INCREMENT);
}
