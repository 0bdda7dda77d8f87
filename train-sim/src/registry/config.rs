//! Registry configuration.

use std::num::NonZeroU64;

use crate::domain::{ValidationError, VehicleIdentity, Weight};

/// Weight budgeted for each passenger seat.
pub const WEIGHT_PER_PASSENGER: Weight = Weight::new_unchecked(75.0);

/// Passenger seats covered by one guard.
pub const PASSENGERS_PER_GUARD: NonZeroU64 = NonZeroU64::new(50).unwrap();

/// Configuration shared by every train in a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    /// Weight budgeted per passenger when computing additional load.
    pub weight_per_passenger: Weight,

    /// Seats per guard. A train needs one guard per started block.
    pub passengers_per_guard: NonZeroU64,

    /// When two vehicles count as the same vehicle.
    pub identity: VehicleIdentity,
}

impl RegistryConfig {
    /// Create a new configuration with the given parameters.
    ///
    /// Returns an error if `passengers_per_guard` is zero.
    pub fn new(
        weight_per_passenger: Weight,
        passengers_per_guard: u64,
        identity: VehicleIdentity,
    ) -> Result<Self, ValidationError> {
        let passengers_per_guard = NonZeroU64::new(passengers_per_guard).ok_or(
            ValidationError::new("passengers per guard", "must be greater than 0"),
        )?;
        Ok(Self {
            weight_per_passenger,
            passengers_per_guard,
            identity,
        })
    }

    /// Returns a copy using a different identity policy.
    pub fn with_identity(mut self, identity: VehicleIdentity) -> Self {
        self.identity = identity;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            weight_per_passenger: WEIGHT_PER_PASSENGER,
            passengers_per_guard: PASSENGERS_PER_GUARD,
            identity: VehicleIdentity::Structural,
        }
    }
}
