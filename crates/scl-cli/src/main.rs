//! SCL demo harness
//!
//! Runs one incident scenario through the liability calculator and prints
//! the result.

mod config;
mod scenario;

use anyhow::Result;
use scl_engine::SummaryReport;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{HarnessConfig, OutputFormat};
use crate::scenario::Scenario;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting SCL harness v{}", scl_common::VERSION);

    let config = HarnessConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let scenario = match &config.scenario_path {
        Some(path) => Scenario::from_path(path)?,
        None => {
            info!("No scenario file given, using built-in rollover incident");
            Scenario::reference()
        }
    };

    let result = scenario.run(config.mode)?;

    match config.output {
        OutputFormat::Summary => print!("{}", SummaryReport::new(&result)),
        OutputFormat::Json => println!("{}", result.to_json()?),
    }

    Ok(())
}
