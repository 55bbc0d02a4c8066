//! Checkpoint - One scored contributing factor of an incident
//!
//! Each checkpoint records how much of a factor was under human control.
//! The automated-system share is always the complement, so the two
//! percentages sum to 100 for the lifetime of the value.

use serde::Serialize;

use crate::error::ValidationError;
use crate::{MAX_CONTROL_PERCENT, MIN_CONTROL_PERCENT};

/// Immutable contributing factor
///
/// Fields are private; a checkpoint can only be obtained through
/// [`Checkpoint::new`], which enforces the [0, 100] range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checkpoint {
    /// Lookup key into the weight table
    name: String,

    /// Free-text description of what happened at this factor
    description: String,

    /// Human-control percentage (0-100)
    human_control_weight: f64,

    /// Automated-system percentage, `100 - human_control_weight`
    ai_control_weight: f64,

    /// Explanation carried into the result breakdown
    rationale: String,
}

impl Checkpoint {
    /// Create a checkpoint, rejecting percentages outside [0, 100]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        human_control_weight: f64,
        rationale: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        // NaN fails both comparisons
        if !(MIN_CONTROL_PERCENT..=MAX_CONTROL_PERCENT).contains(&human_control_weight) {
            return Err(ValidationError::HumanWeightOutOfRange {
                name,
                value: human_control_weight,
            });
        }

        Ok(Self {
            name,
            description: description.into(),
            human_control_weight,
            ai_control_weight: MAX_CONTROL_PERCENT - human_control_weight,
            rationale: rationale.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn human_control_weight(&self) -> f64 {
        self.human_control_weight
    }

    #[inline]
    pub fn ai_control_weight(&self) -> f64 {
        self.ai_control_weight
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Checkpoint({}, human={}%, ai={}%)",
            self.name, self.human_control_weight, self.ai_control_weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_weight_is_complement() {
        for human in [0.0, 0.5, 12.25, 40.0, 99.999, 100.0] {
            let cp = Checkpoint::new("Human Input", "d", human, "r").unwrap();
            assert_eq!(cp.ai_control_weight(), 100.0 - human);
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Checkpoint::new("a", "d", 0.0, "r").is_ok());
        assert!(Checkpoint::new("a", "d", 100.0, "r").is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = Checkpoint::new("a", "d", -1.0, "r").unwrap_err();
        assert_eq!(
            err,
            ValidationError::HumanWeightOutOfRange {
                name: "a".to_string(),
                value: -1.0
            }
        );
        assert!(Checkpoint::new("a", "d", 101.0, "r").is_err());
        assert!(Checkpoint::new("a", "d", f64::NAN, "r").is_err());
        assert!(Checkpoint::new("a", "d", f64::INFINITY, "r").is_err());
    }

    #[test]
    fn test_text_fields_carried() {
        let cp = Checkpoint::new("Shared State", "No override", 30.0, "Passive presence").unwrap();
        assert_eq!(cp.name(), "Shared State");
        assert_eq!(cp.description(), "No override");
        assert_eq!(cp.rationale(), "Passive presence");
        assert!(cp.to_string().contains("human=30%"));
    }
}
