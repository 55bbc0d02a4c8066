//! Human-readable liability summary

use std::fmt;

use scl_common::LiabilityResult;

const RULE_WIDTH: usize = 60;

/// Borrowing renderer for a [`LiabilityResult`]
pub struct SummaryReport<'a> {
    result: &'a LiabilityResult,
}

impl<'a> SummaryReport<'a> {
    pub fn new(result: &'a LiabilityResult) -> Self {
        Self { result }
    }
}

// `{:?}` keeps a trailing `.0` on whole numbers ("2125.0%", "40.0%")
impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let r = self.result;

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "SCL LIABILITY RESULT")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Human / Fleet Operator Liability: {:?}%", r.human_liability())?;
        writeln!(f, "AI / Manufacturer Liability: {:?}%", r.ai_manufacturer_liability())?;
        writeln!(f, "Estimated Premium: {:?}% of human-driven", r.estimated_premium())?;
        writeln!(f, "Premium Reduction: {:?}%", r.premium_reduction())?;
        writeln!(f)?;
        writeln!(f, "Checkpoint Breakdown:")?;
        for cp in r.checkpoints() {
            writeln!(
                f,
                "• {}: {:?}% human → {:?}% weighted ({})",
                cp.name(),
                cp.human_weight(),
                cp.weighted_human(),
                cp.rationale()
            )?;
        }
        Ok(())
    }
}
