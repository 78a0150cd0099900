//! Estimate crop suitability from the command line.
//!
//! Starts from the default soil sample, optionally loads a JSON sample file,
//! applies per-field overrides and prints the ranked report.
//!
//! Run with: cargo run --bin estimate_crops -- --nitrogen 100 --ph 6.5
//!           cargo run --bin estimate_crops -- --input sample.json --json

use anyhow::{Context, Result};
use clap::Parser;
use soil_crop_estimator::formatters::{JsonFormatter, MarkdownFormatter};
use soil_crop_estimator::{AnalysisEvent, InputCollector, SoilField, SoilSample};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Rank wheat, corn, carrots and apples for a soil sample.
#[derive(Debug, Parser)]
#[command(name = "estimate_crops")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file holding a soil sample (camelCase keys)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Soil pH
    #[arg(long)]
    ph: Option<f64>,

    /// Nitrogen (mg/kg)
    #[arg(long)]
    nitrogen: Option<f64>,

    /// Phosphorus (mg/kg)
    #[arg(long)]
    phosphorus: Option<f64>,

    /// Potassium (mg/kg)
    #[arg(long)]
    potassium: Option<f64>,

    /// Moisture (%)
    #[arg(long)]
    moisture: Option<f64>,

    /// Temperature (°C)
    #[arg(long)]
    temperature: Option<f64>,

    /// Organic matter (%)
    #[arg(long)]
    organic_matter: Option<f64>,

    /// Generic override, e.g. --set organicMatter=2.5 (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    overrides: Vec<String>,

    /// Reject values outside the documented field ranges
    #[arg(long)]
    strict: bool,

    /// Print JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Include the per-crop factor breakdown (Markdown only)
    #[arg(long)]
    detailed: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("soil_crop_estimator=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("soil_crop_estimator=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_sample(path: &PathBuf) -> Result<SoilSample> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read soil sample file: {:?}", path))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse soil sample JSON: {:?}", path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let base = match &cli.input {
        Some(path) => load_sample(path)?,
        None => SoilSample::default(),
    };

    let collector = if cli.strict {
        InputCollector::strict()
    } else {
        InputCollector::new()
    };
    let mut collector = collector.with_sample(base);

    let flags = [
        (SoilField::Ph, cli.ph),
        (SoilField::Nitrogen, cli.nitrogen),
        (SoilField::Phosphorus, cli.phosphorus),
        (SoilField::Potassium, cli.potassium),
        (SoilField::Moisture, cli.moisture),
        (SoilField::Temperature, cli.temperature),
        (SoilField::OrganicMatter, cli.organic_matter),
    ];
    for (field, value) in flags {
        if let Some(value) = value {
            collector
                .update(field, value)
                .with_context(|| format!("Invalid --{} value", field))?;
        }
    }

    for entry in &cli.overrides {
        collector
            .apply_assignment(entry)
            .with_context(|| format!("Invalid override {:?}", entry))?;
    }

    if cli.strict {
        collector.sample().validate()?;
    }

    let report = collector.submit(&mut |event: &AnalysisEvent| {
        tracing::debug!("{}: {}", event.title(), event.description());
    });

    let output = if cli.json {
        JsonFormatter::format(&report)?
    } else if cli.detailed {
        MarkdownFormatter::format_detailed(&report)
    } else {
        MarkdownFormatter::format(&report)
    };
    println!("{}", output);

    Ok(())
}
