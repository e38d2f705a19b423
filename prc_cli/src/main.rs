//! prc - Combat power ratio runner
//!
//! Loads a scenario file, evaluates it and prints the scores, ratio, mission
//! check and degradation projection as text or JSON.

mod render;

use clap::{Parser, ValueEnum};
use prc_core::scenario::load_scenario;
use prc_core::{ConfigError, Dataset, ScenarioError, Side};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Combat power ratio calculator
#[derive(Parser, Debug)]
#[command(name = "prc")]
#[command(about = "Compute combat power, force ratio and its degradation for a scenario")]
struct Args {
    /// Scenario file (TOML)
    #[arg(required_unless_present = "tables")]
    scenario: Option<PathBuf>,

    /// Directory of table overrides (coefficients.toml, multipliers.toml, ...)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Elapsed hours, overrides the scenario
    #[arg(long)]
    hours: Option<f64>,

    /// Attacking side, overrides the scenario
    #[arg(long, value_enum)]
    attacker: Option<Attacker>,

    /// List every element, multiplier, mission and profile, then exit
    #[arg(long)]
    tables: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Attacker {
    Friendly,
    Enemy,
}

impl From<Attacker> for Side {
    fn from(attacker: Attacker) -> Side {
        match attacker {
            Attacker::Friendly => Side::Friendly,
            Attacker::Enemy => Side::Enemy,
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(args: Args) -> Result<String, CliError> {
    let dataset = match &args.data_dir {
        Some(dir) => Dataset::load_dir(dir)?,
        None => Dataset::default(),
    };

    if args.tables {
        return Ok(render::render_tables(&dataset));
    }

    let Some(path) = &args.scenario else {
        return Ok(render::render_tables(&dataset));
    };

    tracing::info!(scenario = %path.display(), "loading scenario");
    let scenario = load_scenario(path)?;
    let mut engagement = scenario
        .build_engagement(dataset)
        .map_err(ScenarioError::from)?;

    if let Some(hours) = args.hours {
        engagement.set_hours(hours);
    }
    if let Some(attacker) = args.attacker {
        engagement.set_attacker(attacker.into());
    }

    let report = engagement.evaluate();
    tracing::info!(ratio = ?report.ratio, meets = report.requirement.meets, "evaluated");

    match args.format {
        Format::Text => Ok(render::render_report(&report)),
        Format::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
