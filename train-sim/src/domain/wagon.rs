//! Wagon type.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::RailVehicle;

/// The kind of an unpowered vehicle.
///
/// Kinds carry no extra data; they only tell wagons apart for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WagonKind {
    PassengerCar,
    FreightWagon,
    DiningCar,
    SleepingCar,
}

impl fmt::Display for WagonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WagonKind::PassengerCar => "passenger car",
            WagonKind::FreightWagon => "freight wagon",
            WagonKind::DiningCar => "dining car",
            WagonKind::SleepingCar => "sleeping car",
        };
        f.write_str(name)
    }
}

/// An unpowered rail vehicle carrying passengers or freight.
///
/// Derefs to [`RailVehicle`] for the shared attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wagon {
    kind: WagonKind,
    #[serde(flatten)]
    vehicle: RailVehicle,
}

impl Wagon {
    pub fn new(kind: WagonKind, vehicle: RailVehicle) -> Self {
        Self { kind, vehicle }
    }

    pub fn passenger_car(vehicle: RailVehicle) -> Self {
        Self::new(WagonKind::PassengerCar, vehicle)
    }

    pub fn freight_wagon(vehicle: RailVehicle) -> Self {
        Self::new(WagonKind::FreightWagon, vehicle)
    }

    pub fn dining_car(vehicle: RailVehicle) -> Self {
        Self::new(WagonKind::DiningCar, vehicle)
    }

    pub fn sleeping_car(vehicle: RailVehicle) -> Self {
        Self::new(WagonKind::SleepingCar, vehicle)
    }

    pub fn kind(&self) -> WagonKind {
        self.kind
    }

    pub fn vehicle(&self) -> &RailVehicle {
        &self.vehicle
    }
}

impl Deref for Wagon {
    type Target = RailVehicle;

    fn deref(&self) -> &RailVehicle {
        &self.vehicle
    }
}
