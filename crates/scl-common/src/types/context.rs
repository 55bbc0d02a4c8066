//! Context - Caller-supplied incident conditions
//!
//! A free-form JSON object. Three boolean flags and one numeric parameter
//! steer the calculation; every other key is carried through untouched so
//! the result echoes exactly what the caller supplied.
//!
//! Flags are strictly boolean: only JSON `true` sets one, so truthy values
//! such as `1` or `"yes"` leave it unset.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::ValidationError;
use crate::DEFAULT_SAFETY_FACTOR;

/// Vehicle ran without a supervising driver
pub const UNSUPERVISED_FSD: &str = "unsupervised_fsd";

/// A human override was available during the incident
pub const HUMAN_OVERRIDE_PRESENT: &str = "human_override_present";

/// Perception sensors were known to be degraded
pub const SENSOR_DEGRADATION: &str = "sensor_degradation";

/// Additive loading used by the premium estimate
pub const SAFETY_FACTOR: &str = "safety_factor";

/// Incident context mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(Map<String, Value>);

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean flag
    pub fn with_flag(self, key: impl Into<String>, value: bool) -> Self {
        self.with_value(key, Value::Bool(value))
    }

    /// Set the premium safety factor
    pub fn with_safety_factor(self, safety_factor: f64) -> Self {
        self.with_value(SAFETY_FACTOR, Value::from(safety_factor))
    }

    /// Set an arbitrary key (kept verbatim for audit)
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Whether a flag is set
    ///
    /// Only JSON `true` counts. Missing keys and `false` are unset; any
    /// other value is treated as unset and reported.
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            None | Some(Value::Null) => false,
            Some(other) => {
                warn!(key, value = %other, "Non-boolean context flag treated as unset");
                false
            }
        }
    }

    pub fn unsupervised_fsd(&self) -> bool {
        self.flag(UNSUPERVISED_FSD)
    }

    pub fn human_override_present(&self) -> bool {
        self.flag(HUMAN_OVERRIDE_PRESENT)
    }

    pub fn sensor_degradation(&self) -> bool {
        self.flag(SENSOR_DEGRADATION)
    }

    /// Safety factor for the premium estimate (default 0.12)
    pub fn safety_factor(&self) -> f64 {
        match self.0.get(SAFETY_FACTOR) {
            None => DEFAULT_SAFETY_FACTOR,
            Some(value) => value.as_f64().unwrap_or_else(|| {
                warn!(value = %value, "Non-numeric safety_factor, using default");
                DEFAULT_SAFETY_FACTOR
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for Context {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Context {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(ValidationError::InvalidContext(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }
}
