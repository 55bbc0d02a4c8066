//! Premium estimate - Linear transform of the human liability share

use scl_common::round_dp;
use serde::{Deserialize, Serialize};

/// Premium figures derived from a liability split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumEstimate {
    /// Premium as a percentage of a human-driven policy (1 dp)
    pub adjusted_premium: f64,
    /// `100 - adjusted_premium` (1 dp)
    pub premium_reduction: f64,
}

/// Estimate premiums from liability
pub struct PremiumEstimator;

impl PremiumEstimator {
    /// premium = (human_liability / 100 + safety_factor) × 100
    ///
    /// Output is not clamped; a large or negative safety factor can leave
    /// [0, 100].
    pub fn estimate(human_liability: f64, safety_factor: f64) -> PremiumEstimate {
        let adjusted_premium = round_dp((human_liability / 100.0 + safety_factor) * 100.0, 1);
        PremiumEstimate {
            adjusted_premium,
            premium_reduction: round_dp(100.0 - adjusted_premium, 1),
        }
    }
}
