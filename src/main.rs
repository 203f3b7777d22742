use anyhow::{Context, Result};
use cbox::components::ReservoirIntegrator;
use cbox::emissions::{historical_timeseries, scenario_timeseries, EmissionsKind, Scenario};
use cbox::experiments::project_scenario;
use cbox::{run_experiments, RunConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the historical and scenario experiments and write JSON reports
    Run {
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        output_dir: PathBuf,
    },

    /// Print the annual emissions of one scenario
    Scenario {
        #[arg(long)]
        id: Scenario,
    },

    /// Print one historical emissions series
    Historical {
        #[arg(long, default_value = "total")]
        kind: EmissionsKind,
    },

    /// Print the concentration trajectory for one scenario
    Simulate {
        #[arg(long, default_value_t = 330.35)]
        initial_ppm: f64,

        #[arg(long, default_value_t = 110)]
        years: usize,

        #[arg(long)]
        scenario: Scenario,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::debug!("{args:#?}");

    match args.command {
        Command::Run { config, output_dir } => {
            let config = match config {
                Some(path) => RunConfig::from_file(&path)
                    .with_context(|| format!("failed to load config {path:?}"))?,
                None => RunConfig::default(),
            };
            let report = run_experiments(&config).context("failed to run experiments")?;
            report
                .write_json(&output_dir)
                .with_context(|| format!("failed to write reports to {output_dir:?}"))?;
        }
        Command::Scenario { id } => print_json(&scenario_timeseries(id))?,
        Command::Historical { kind } => print_json(&historical_timeseries(kind))?,
        Command::Simulate {
            initial_ppm,
            years,
            scenario,
        } => {
            let integrator = ReservoirIntegrator::new();
            let trajectory = project_scenario(&integrator, scenario, initial_ppm, years)
                .with_context(|| format!("failed to simulate scenario {scenario}"))?;
            print_json(&trajectory)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
