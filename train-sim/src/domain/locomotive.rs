//! Locomotive type.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{RailVehicle, Weight};

/// How a locomotive is powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveType {
    Steam,
    Diesel,
    Electricity,
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DriveType::Steam => "steam",
            DriveType::Diesel => "diesel",
            DriveType::Electricity => "electricity",
        };
        f.write_str(name)
    }
}

/// A powered rail vehicle.
///
/// Its tractive force is the additional weight it is able to pull. A
/// locomotive may seat passengers or carry load itself, though most carry
/// neither (the [`RailVehicleBuilder`](super::RailVehicleBuilder) defaults).
///
/// Derefs to [`RailVehicle`] for the shared attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locomotive {
    #[serde(flatten)]
    vehicle: RailVehicle,
    tractive_force: Weight,
    drive: DriveType,
}

impl Locomotive {
    pub fn new(vehicle: RailVehicle, tractive_force: Weight, drive: DriveType) -> Self {
        Self {
            vehicle,
            tractive_force,
            drive,
        }
    }

    pub fn vehicle(&self) -> &RailVehicle {
        &self.vehicle
    }

    /// The weight this locomotive can pull.
    pub fn tractive_force(&self) -> Weight {
        self.tractive_force
    }

    pub fn drive(&self) -> DriveType {
        self.drive
    }
}

impl Deref for Locomotive {
    type Target = RailVehicle;

    fn deref(&self) -> &RailVehicle {
        &self.vehicle
    }
}
