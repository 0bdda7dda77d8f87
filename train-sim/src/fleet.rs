//! Loading train compositions from JSON.
//!
//! A fleet file lists trains by company with their locomotives and wagons.
//! Loading goes through the regular registry operations, so a file cannot
//! put one vehicle into two trains any more than API callers can.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Locomotive, RailroadCompany, TrainError, Wagon};
use crate::registry::{Registry, Train};

/// Errors from loading a fleet file.
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid fleet description
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A train could not be assembled
    #[error("train {index}: {source}")]
    Train { index: usize, source: TrainError },

    /// A train lists no locomotive
    #[error("train {index} has no locomotive")]
    EmptyTrain { index: usize },
}

/// A set of trains to assemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSpec {
    pub trains: Vec<TrainSpec>,
}

/// One train: the first locomotive starts the train, the rest are coupled
/// in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSpec {
    pub company: RailroadCompany,
    pub locomotives: Vec<Locomotive>,
    #[serde(default)]
    pub wagons: Vec<Wagon>,
}

/// Assemble every train of `spec` in `registry`.
///
/// Stops at the first train that cannot be assembled. Trains built before
/// that point stay registered.
pub fn build_fleet(registry: &Registry, spec: FleetSpec) -> Result<Vec<Train>, FleetError> {
    let mut trains = Vec::with_capacity(spec.trains.len());

    for (index, train_spec) in spec.trains.into_iter().enumerate() {
        let train = build_train(registry, train_spec).map_err(|err| match err {
            BuildError::Empty => FleetError::EmptyTrain { index },
            BuildError::Train(source) => FleetError::Train { index, source },
        })?;
        trains.push(train);
    }

    Ok(trains)
}

/// Read a fleet file and assemble it in `registry`.
pub fn load_fleet(registry: &Registry, path: &Path) -> Result<Vec<Train>, FleetError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FleetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let spec: FleetSpec = serde_json::from_str(&contents)?;

    let trains = build_fleet(registry, spec)?;
    info!(path = %path.display(), trains = trains.len(), "loaded fleet");
    Ok(trains)
}

enum BuildError {
    Empty,
    Train(TrainError),
}

impl From<TrainError> for BuildError {
    fn from(err: TrainError) -> Self {
        BuildError::Train(err)
    }
}

fn build_train(registry: &Registry, spec: TrainSpec) -> Result<Train, BuildError> {
    let mut locomotives = spec.locomotives.into_iter();
    let first = locomotives.next().ok_or(BuildError::Empty)?;

    let train = registry.create_train(spec.company, first)?;
    for locomotive in locomotives {
        train.add_locomotive(locomotive)?;
    }
    for wagon in spec.wagons {
        train.add_wagon(wagon)?;
    }
    Ok(train)
}
