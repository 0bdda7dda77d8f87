//! Vehicle-to-train assignment registry.
//!
//! The registry is the single source of truth for "is this vehicle already
//! part of a train?". It owns the composition of every train it created, so
//! checking all trains and then coupling a vehicle happens under one lock:
//! two threads can never both admit the same vehicle.
//!
//! Trains are created only through [`Registry::create_train`] and stay
//! registered for as long as the registry lives.

mod config;
mod train;

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::{Consist, Locomotive, RailroadCompany, TrainError, VehicleIdentity, Wagon};

pub use config::{PASSENGERS_PER_GUARD, RegistryConfig, WEIGHT_PER_PASSENGER};
pub use train::{Train, TrainId};

/// One registered train.
#[derive(Debug)]
struct TrainEntry {
    company: RailroadCompany,
    consist: Consist,
}

/// Thread-safe registry of trains.
///
/// Cloning is cheap and yields a handle to the same registry. Independent
/// registries never see each other's vehicles.
///
/// # Examples
///
/// ```
/// use train_sim::domain::{
///     DriveType, Locomotive, Manufacturer, RailVehicle, RailroadCompany, SerialNumber, Weight,
///     YearOfManufacturing,
/// };
/// use train_sim::registry::Registry;
///
/// let registry = Registry::new();
/// let loco = Locomotive::new(
///     RailVehicle::builder(
///         Manufacturer::new("Siemens"),
///         YearOfManufacturing::new(2005),
///         SerialNumber::new("1116 001"),
///     )
///     .build()
///     .unwrap(),
///     Weight::new(150_000.0).unwrap(),
///     DriveType::Electricity,
/// );
///
/// let company = RailroadCompany::new("OEBB").unwrap();
/// let train = registry.create_train(company.clone(), loco.clone()).unwrap();
/// assert_eq!(train.locomotives().len(), 1);
///
/// // The same locomotive cannot start a second train
/// assert!(registry.create_train(company, loco).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    trains: Arc<Mutex<Vec<TrainEntry>>>,
    config: Arc<RegistryConfig>,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            trains: Arc::default(),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create and register a train hauled by `locomotive`.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::LocomotiveInUse`] if the locomotive already
    /// belongs to any registered train.
    pub fn create_train(
        &self,
        company: RailroadCompany,
        locomotive: Locomotive,
    ) -> Result<Train, TrainError> {
        let mut trains = self.lock();
        check_locomotive(&trains, &locomotive, self.config.identity)?;

        let id = TrainId(trains.len());
        debug!(
            train = %id,
            company = %company,
            locomotive = %locomotive.serial_number(),
            "registered train"
        );
        trains.push(TrainEntry {
            company,
            consist: Consist::new(locomotive),
        });

        Ok(Train::new(id, self.clone()))
    }

    /// True if any registered train hauls this locomotive.
    pub fn is_locomotive_in_use(&self, locomotive: &Locomotive) -> bool {
        locomotive_in_use(&self.lock(), locomotive, self.config.identity)
    }

    /// True if any registered train includes this wagon, whatever its kind.
    pub fn is_wagon_in_use(&self, wagon: &Wagon) -> bool {
        wagon_in_use(&self.lock(), wagon, self.config.identity)
    }

    /// Fails with [`TrainError::LocomotiveInUse`] if the locomotive is taken.
    pub fn validate_locomotive_assignable(
        &self,
        locomotive: &Locomotive,
    ) -> Result<(), TrainError> {
        check_locomotive(&self.lock(), locomotive, self.config.identity)
    }

    /// Fails with [`TrainError::WagonInUse`] if the wagon is taken.
    pub fn validate_wagon_assignable(&self, wagon: &Wagon) -> Result<(), TrainError> {
        check_wagon(&self.lock(), wagon, self.config.identity)
    }

    /// Number of registered trains.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Handles to every registered train, in creation order.
    pub fn trains(&self) -> Vec<Train> {
        (0..self.len())
            .map(|i| Train::new(TrainId(i), self.clone()))
            .collect()
    }

    /// Lock the train list.
    ///
    /// Every critical section leaves the list consistent, so a lock
    /// poisoned by a panicking caller is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<TrainEntry>> {
        self.trains.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn same_registry(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.trains, &other.trains)
    }
}

fn locomotive_in_use(
    trains: &[TrainEntry],
    locomotive: &Locomotive,
    identity: VehicleIdentity,
) -> bool {
    trains
        .iter()
        .any(|t| t.consist.contains_locomotive(locomotive, identity))
}

fn wagon_in_use(trains: &[TrainEntry], wagon: &Wagon, identity: VehicleIdentity) -> bool {
    trains
        .iter()
        .any(|t| t.consist.contains_wagon(wagon, identity))
}

fn check_locomotive(
    trains: &[TrainEntry],
    locomotive: &Locomotive,
    identity: VehicleIdentity,
) -> Result<(), TrainError> {
    if locomotive_in_use(trains, locomotive, identity) {
        return Err(TrainError::LocomotiveInUse);
    }
    Ok(())
}

fn check_wagon(
    trains: &[TrainEntry],
    wagon: &Wagon,
    identity: VehicleIdentity,
) -> Result<(), TrainError> {
    if wagon_in_use(trains, wagon, identity) {
        return Err(TrainError::WagonInUse);
    }
    Ok(())
}
