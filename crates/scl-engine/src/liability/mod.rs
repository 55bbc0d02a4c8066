//! Liability aggregation and premium estimate
pub mod calculator;
pub mod premium;

pub use self::calculator::LiabilityCalculator;
