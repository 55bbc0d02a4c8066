//! # SCL Engine
//!
//! Shared Control Liability: apportions incident liability between the
//! human operator and the automated system.
//!
//! ## Aggregation Formula
//!
//! ```text
//! human_liability = 100 × Σ (human_pct_i × w_i)
//! ai_liability    = 100 − human_liability
//! premium         = (human_liability / 100 + safety_factor) × 100
//! ```
//!
//! Where:
//! - human_pct_i: human-control percentage of checkpoint i
//! - w_i: weight of checkpoint i from the resolved table (0.25 if unmatched)
//! - safety_factor: context loading, 0.12 by default
//!
//! ## Weighting
//!
//! Static mode uses the fixed table. Dynamic mode applies the context
//! adjustments in [`weighting::adjustments`] and normalizes once.

pub mod liability;
pub mod report;
pub mod weighting;

pub use liability::{
    calculator::LiabilityCalculator,
    premium::{PremiumEstimate, PremiumEstimator},
};
pub use report::SummaryReport;
pub use weighting::resolve_weights;
