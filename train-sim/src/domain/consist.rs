//! Train composition and the figures derived from it.
//!
//! A `Consist` is the ordered list of locomotives and wagons making up one
//! train. All derived figures are recomputed from the vehicles on every
//! call, so they always reflect the current composition.

use std::num::NonZeroU64;

use super::{Length, Locomotive, RailVehicle, TrainError, VehicleIdentity, Wagon, Weight};

/// The vehicles of one train, in coupling order.
///
/// # Invariants
///
/// - At least one locomotive
/// - No two locomotives (and no two wagons) are the same vehicle under the
///   identity policy used to build the consist
#[derive(Debug, Clone, PartialEq)]
pub struct Consist {
    locomotives: Vec<Locomotive>,
    wagons: Vec<Wagon>,
}

impl Consist {
    /// Start a consist with its first locomotive.
    pub fn new(locomotive: Locomotive) -> Self {
        Self {
            locomotives: vec![locomotive],
            wagons: Vec::new(),
        }
    }

    pub fn locomotives(&self) -> &[Locomotive] {
        &self.locomotives
    }

    pub fn wagons(&self) -> &[Wagon] {
        &self.wagons
    }

    pub fn contains_locomotive(&self, locomotive: &Locomotive, identity: VehicleIdentity) -> bool {
        self.locomotives
            .iter()
            .any(|l| identity.same_locomotive(l, locomotive))
    }

    pub fn contains_wagon(&self, wagon: &Wagon, identity: VehicleIdentity) -> bool {
        self.wagons.iter().any(|w| identity.same_wagon(w, wagon))
    }

    /// Append a locomotive. Returns false if it is already coupled.
    pub(crate) fn insert_locomotive(
        &mut self,
        locomotive: Locomotive,
        identity: VehicleIdentity,
    ) -> bool {
        if self.contains_locomotive(&locomotive, identity) {
            return false;
        }
        self.locomotives.push(locomotive);
        true
    }

    /// Append a wagon. Returns false if it is already coupled.
    pub(crate) fn insert_wagon(&mut self, wagon: Wagon, identity: VehicleIdentity) -> bool {
        if self.contains_wagon(&wagon, identity) {
            return false;
        }
        self.wagons.push(wagon);
        true
    }

    /// Uncouple a locomotive, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Fails with [`TrainError::InvalidState`] while only one locomotive is
    /// coupled, whether or not it is the one asked for.
    pub(crate) fn remove_locomotive(
        &mut self,
        locomotive: &Locomotive,
        identity: VehicleIdentity,
    ) -> Result<bool, TrainError> {
        if self.locomotives.len() == 1 {
            return Err(TrainError::InvalidState(
                "cannot remove last locomotive from train",
            ));
        }
        let before = self.locomotives.len();
        self.locomotives
            .retain(|l| !identity.same_locomotive(l, locomotive));
        Ok(self.locomotives.len() != before)
    }

    /// Uncouple a wagon of the same kind. Returns false if it was not coupled.
    pub(crate) fn remove_wagon(&mut self, wagon: &Wagon, identity: VehicleIdentity) -> bool {
        let before = self.wagons.len();
        self.wagons
            .retain(|w| w.kind() != wagon.kind() || !identity.same_wagon(w, wagon));
        self.wagons.len() != before
    }

    fn vehicles(&self) -> impl Iterator<Item = &RailVehicle> {
        self.locomotives
            .iter()
            .map(Locomotive::vehicle)
            .chain(self.wagons.iter().map(Wagon::vehicle))
    }

    /// Own weight of every vehicle.
    pub fn empty_weight(&self) -> Weight {
        self.vehicles().map(RailVehicle::empty_weight).sum()
    }

    /// Seats across locomotives and wagons, saturating at `u64::MAX`.
    pub fn max_passengers(&self) -> u64 {
        self.vehicles()
            .map(RailVehicle::max_passengers)
            .fold(0, u64::saturating_add)
    }

    /// Freight capacity of the wagons. Locomotive load capacity is not counted.
    pub fn max_additional_freight(&self) -> Weight {
        self.wagons.iter().map(|w| w.max_additional_load()).sum()
    }

    /// Passengers at `weight_per_passenger` each, plus freight.
    pub fn max_additional_load(&self, weight_per_passenger: Weight) -> Weight {
        weight_per_passenger.times(self.max_passengers()) + self.max_additional_freight()
    }

    /// Empty weight plus the full additional load.
    pub fn total_weight(&self, weight_per_passenger: Weight) -> Weight {
        self.empty_weight() + self.max_additional_load(weight_per_passenger)
    }

    pub fn length(&self) -> Length {
        self.vehicles().map(RailVehicle::length).sum()
    }

    /// Combined tractive force of the locomotives.
    pub fn tractive_force(&self) -> Weight {
        self.locomotives.iter().map(Locomotive::tractive_force).sum()
    }

    /// True if the locomotives can pull strictly more than the additional load.
    pub fn is_drivable(&self, weight_per_passenger: Weight) -> bool {
        self.tractive_force() > self.max_additional_load(weight_per_passenger)
    }

    pub fn requires_guard(&self) -> bool {
        self.max_passengers() > 0
    }

    /// One guard per started block of `passengers_per_guard` seats.
    pub fn required_guards(&self, passengers_per_guard: NonZeroU64) -> u64 {
        self.max_passengers().div_ceil(passengers_per_guard.get())
    }
}
