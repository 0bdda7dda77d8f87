//! Train handle.

use std::fmt;

use tracing::trace;

use super::{Registry, RegistryConfig, TrainEntry, check_locomotive, check_wagon};
use crate::domain::{Consist, Length, Locomotive, RailroadCompany, TrainError, Wagon, Weight};
use crate::report::TrainReport;

/// Identifies a train within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(pub(super) usize);

impl TrainId {
    /// Position of the train in registry creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A registered train.
///
/// A `Train` is a handle: its composition lives in the [`Registry`] that
/// created it, so every mutation is checked against all other trains.
/// Clones refer to the same train.
///
/// All figures are recomputed from the current composition on each call.
#[derive(Debug, Clone)]
pub struct Train {
    id: TrainId,
    registry: Registry,
}

impl PartialEq for Train {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.registry.same_registry(&other.registry)
    }
}

impl Eq for Train {}

impl Train {
    pub(super) fn new(id: TrainId, registry: Registry) -> Self {
        Self { id, registry }
    }

    pub fn id(&self) -> TrainId {
        self.id
    }

    /// Run `f` against this train's entry while holding the registry lock.
    fn read<R>(&self, f: impl FnOnce(&TrainEntry, &RegistryConfig) -> R) -> R {
        let trains = self.registry.lock();
        // ids are minted by this registry and entries are never removed
        f(&trains[self.id.0], self.registry.config())
    }

    pub fn company(&self) -> RailroadCompany {
        self.read(|entry, _| entry.company.clone())
    }

    /// Couple another locomotive. Returns whether the composition changed.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::LocomotiveInUse`] if the locomotive belongs to
    /// any train, this one included.
    pub fn add_locomotive(&self, locomotive: Locomotive) -> Result<bool, TrainError> {
        let identity = self.registry.config.identity;
        let mut trains = self.registry.lock();
        check_locomotive(&trains, &locomotive, identity)?;

        trace!(
            train = %self.id,
            locomotive = %locomotive.serial_number(),
            "coupling locomotive"
        );
        Ok(trains[self.id.0]
            .consist
            .insert_locomotive(locomotive, identity))
    }

    /// Couple a wagon of any kind. Returns whether the composition changed.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::WagonInUse`] if the wagon belongs to any train,
    /// this one included.
    pub fn add_wagon(&self, wagon: Wagon) -> Result<bool, TrainError> {
        let identity = self.registry.config.identity;
        let mut trains = self.registry.lock();
        check_wagon(&trains, &wagon, identity)?;

        trace!(
            train = %self.id,
            wagon = %wagon.serial_number(),
            kind = %wagon.kind(),
            "coupling wagon"
        );
        Ok(trains[self.id.0].consist.insert_wagon(wagon, identity))
    }

    /// Uncouple a locomotive. Returns whether it was part of this train.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::InvalidState`] while the train has a single
    /// locomotive.
    pub fn remove_locomotive(&self, locomotive: &Locomotive) -> Result<bool, TrainError> {
        let identity = self.registry.config.identity;
        let mut trains = self.registry.lock();
        let removed = trains[self.id.0]
            .consist
            .remove_locomotive(locomotive, identity)?;
        if removed {
            trace!(
                train = %self.id,
                locomotive = %locomotive.serial_number(),
                "uncoupled locomotive"
            );
        }
        Ok(removed)
    }

    /// Uncouple a wagon. Returns whether it was part of this train.
    pub fn remove_wagon(&self, wagon: &Wagon) -> bool {
        let identity = self.registry.config.identity;
        let mut trains = self.registry.lock();
        let removed = trains[self.id.0].consist.remove_wagon(wagon, identity);
        if removed {
            trace!(train = %self.id, wagon = %wagon.serial_number(), "uncoupled wagon");
        }
        removed
    }

    /// Snapshot of the locomotives, in coupling order.
    pub fn locomotives(&self) -> Vec<Locomotive> {
        self.read(|entry, _| entry.consist.locomotives().to_vec())
    }

    /// Snapshot of the wagons, in coupling order.
    pub fn wagons(&self) -> Vec<Wagon> {
        self.read(|entry, _| entry.consist.wagons().to_vec())
    }

    /// Snapshot of the whole composition.
    pub fn consist(&self) -> Consist {
        self.read(|entry, _| entry.consist.clone())
    }

    pub fn empty_weight(&self) -> Weight {
        self.read(|entry, _| entry.consist.empty_weight())
    }

    pub fn max_passengers(&self) -> u64 {
        self.read(|entry, _| entry.consist.max_passengers())
    }

    pub fn max_additional_freight(&self) -> Weight {
        self.read(|entry, _| entry.consist.max_additional_freight())
    }

    pub fn max_additional_load(&self) -> Weight {
        self.read(|entry, config| {
            entry
                .consist
                .max_additional_load(config.weight_per_passenger)
        })
    }

    /// Empty weight plus maximum additional load.
    pub fn total_weight(&self) -> Weight {
        self.read(|entry, config| entry.consist.total_weight(config.weight_per_passenger))
    }

    pub fn length(&self) -> Length {
        self.read(|entry, _| entry.consist.length())
    }

    pub fn tractive_force(&self) -> Weight {
        self.read(|entry, _| entry.consist.tractive_force())
    }

    /// True if the tractive force strictly exceeds the maximum additional load.
    pub fn is_drivable(&self) -> bool {
        self.read(|entry, config| entry.consist.is_drivable(config.weight_per_passenger))
    }

    pub fn requires_guard(&self) -> bool {
        self.read(|entry, _| entry.consist.requires_guard())
    }

    pub fn required_guards(&self) -> u64 {
        self.read(|entry, config| entry.consist.required_guards(config.passengers_per_guard))
    }

    /// All figures at once, computed from a single consistent composition.
    pub fn report(&self) -> TrainReport {
        self.read(|entry, config| TrainReport::new(self.id, &entry.company, &entry.consist, config))
    }
}
