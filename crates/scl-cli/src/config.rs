//! Harness configuration

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use scl_common::WeightMode;
use serde::{Deserialize, Serialize};

/// How the result is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Banner and per-checkpoint bullets
    #[default]
    Summary,
    /// Pretty JSON in the stable result shape
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" | "text" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format '{}' (expected summary or json)", other),
        }
    }
}

/// Harness configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Weighting mode; a scenario file's own mode takes precedence
    pub mode: Option<WeightMode>,
    /// Scenario file; the built-in rollover incident when unset
    pub scenario_path: Option<PathBuf>,
    /// Output format
    pub output: OutputFormat,
}

impl HarnessConfig {
    /// Load configuration from `.env`, `SCL_*` variables and arguments
    ///
    /// The first positional argument, if any, overrides `SCL_SCENARIO`.
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(mode) = std::env::var("SCL_MODE") {
            cfg.mode = Some(mode.parse()?);
        }
        if let Ok(path) = std::env::var("SCL_SCENARIO") {
            if !path.trim().is_empty() {
                cfg.scenario_path = Some(PathBuf::from(path));
            }
        }
        if let Ok(output) = std::env::var("SCL_OUTPUT") {
            cfg.output = output.parse()?;
        }

        if let Some(path) = std::env::args_os().nth(1) {
            cfg.scenario_path = Some(PathBuf::from(path));
        }

        Ok(cfg)
    }
}
