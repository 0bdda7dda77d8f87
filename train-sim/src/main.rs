use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use train_sim::fleet::load_fleet;
use train_sim::registry::Registry;

/// Environment variable consulted when no fleet file is given on the command line.
const FLEET_ENV: &str = "TRAIN_SIM_FLEET";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(FLEET_ENV))
        .map(PathBuf::from)
    else {
        eprintln!("Usage: train-sim <fleet.json>  (or set {FLEET_ENV})");
        return ExitCode::FAILURE;
    };

    let registry = Registry::new();
    let trains = match load_fleet(&registry, &path) {
        Ok(trains) => trains,
        Err(e) => {
            eprintln!("Failed to load fleet: {e}");
            return ExitCode::FAILURE;
        }
    };

    for train in &trains {
        let report = train.report();
        if !report.drivable {
            tracing::warn!(train = %train.id(), company = %report.company, "train is not drivable");
        }
        match serde_json::to_string(&report) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
