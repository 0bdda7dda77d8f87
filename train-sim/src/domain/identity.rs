//! Vehicle identity policy.

use serde::{Deserialize, Serialize};

use super::{Locomotive, Wagon};

/// Decides when two vehicles are "the same vehicle".
///
/// Vehicles carry no dedicated id. By default two vehicles are the same
/// when all of their attributes are equal, so two physically distinct but
/// identically described vehicles collide. `SerialNumber` narrows identity
/// to the manufacturer's serial number instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleIdentity {
    /// Equal iff every attribute is equal.
    #[default]
    Structural,
    /// Equal iff the serial numbers are equal.
    SerialNumber,
}

impl VehicleIdentity {
    pub fn same_locomotive(self, a: &Locomotive, b: &Locomotive) -> bool {
        match self {
            VehicleIdentity::Structural => a == b,
            VehicleIdentity::SerialNumber => a.serial_number() == b.serial_number(),
        }
    }

    /// Wagon kinds are ignored: a dining car and a sleeping car with
    /// identical attributes are the same wagon.
    pub fn same_wagon(self, a: &Wagon, b: &Wagon) -> bool {
        match self {
            VehicleIdentity::Structural => a.vehicle() == b.vehicle(),
            VehicleIdentity::SerialNumber => a.serial_number() == b.serial_number(),
        }
    }
}
