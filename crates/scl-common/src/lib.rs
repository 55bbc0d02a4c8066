//! # SCL Common
//!
//! Shared types and errors for the Shared Control Liability (SCL) engine.
//!
//! ## Core Types
//!
//! - [`Checkpoint`]: one scored contributing factor with its human-control share
//! - [`Context`]: caller-supplied flags steering dynamic weighting
//! - [`WeightTable`]: factor name to weight mapping
//! - [`WeightMode`]: static or context-adjusted weighting
//! - [`LiabilityResult`]/[`CheckpointBreakdown`]: aggregation output

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{EmptyInputError, Result, SclError, ValidationError};
pub use types::{
    checkpoint::Checkpoint,
    context::Context,
    liability::{round_dp, CheckpointBreakdown, LiabilityResult},
    weight_table::{FactorWeight, WeightMode, WeightTable},
};

/// SCL version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical factor: the human operator's input
pub const HUMAN_INPUT: &str = "Human Input";

/// Canonical factor: the automated system's processing of that input
pub const AI_TRANSFORMATION: &str = "AI Transformation";

/// Canonical factor: state jointly held by human and system
pub const SHARED_STATE: &str = "Shared State";

/// Canonical factor: the executed output or action
pub const OUTPUT_ACTION: &str = "Output/Action";

/// Canonical factor names, in default table order
pub const CANONICAL_FACTORS: [&str; 4] = [HUMAN_INPUT, AI_TRANSFORMATION, SHARED_STATE, OUTPUT_ACTION];

/// Default weight of each canonical factor
pub const DEFAULT_FACTOR_WEIGHT: f64 = 0.25;

/// Weight applied to a checkpoint whose name is not in the resolved table
pub const UNMATCHED_CHECKPOINT_WEIGHT: f64 = 0.25;

/// Safety factor used by the premium estimate when the context has none
pub const DEFAULT_SAFETY_FACTOR: f64 = 0.12;

/// Tolerance for "sums to 1.0" checks on normalized tables
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Lower bound of a checkpoint's human-control percentage
pub const MIN_CONTROL_PERCENT: f64 = 0.0;

/// Upper bound of a checkpoint's human-control percentage
pub const MAX_CONTROL_PERCENT: f64 = 100.0;
