//! Rail vehicle attributes shared by locomotives and wagons.

use serde::{Deserialize, Serialize};

use super::{
    Classification, Length, Manufacturer, SerialNumber, ValidationError, Weight,
    YearOfManufacturing,
};

/// The attributes common to every vehicle that runs on rails.
///
/// A `RailVehicle` is never used on its own: it is embedded in a
/// [`Locomotive`](super::Locomotive) or a [`Wagon`](super::Wagon). Equality
/// compares every attribute, which is what the registry uses as vehicle
/// identity by default.
///
/// # Examples
///
/// ```
/// use train_sim::domain::{Manufacturer, RailVehicle, SerialNumber, Weight, YearOfManufacturing};
///
/// let vehicle = RailVehicle::builder(
///     Manufacturer::new("Siemens"),
///     YearOfManufacturing::new(2000),
///     SerialNumber::new("1"),
/// )
/// .empty_weight(Weight::new(20_000.0).unwrap())
/// .max_passengers(120)
/// .build()
/// .unwrap();
/// assert_eq!(vehicle.max_passengers(), 120);
///
/// // Negative capacities are rejected
/// let invalid = RailVehicle::builder(
///     Manufacturer::new("Siemens"),
///     YearOfManufacturing::new(1990),
///     SerialNumber::new("ASDF123"),
/// )
/// .max_passengers(-10)
/// .build();
/// assert!(invalid.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailVehicle {
    empty_weight: Weight,
    length: Length,
    max_passengers: u64,
    max_additional_load: Weight,
    #[serde(default)]
    classification: Option<Classification>,
    manufacturer: Manufacturer,
    year_of_manufacturing: YearOfManufacturing,
    serial_number: SerialNumber,
}

impl RailVehicle {
    /// Start building a vehicle from its required descriptors.
    pub fn builder(
        manufacturer: Manufacturer,
        year_of_manufacturing: YearOfManufacturing,
        serial_number: SerialNumber,
    ) -> RailVehicleBuilder {
        RailVehicleBuilder {
            empty_weight: Weight::ZERO,
            length: Length::ZERO,
            max_passengers: 0,
            max_additional_load: Weight::ZERO,
            classification: None,
            manufacturer,
            year_of_manufacturing,
            serial_number,
        }
    }

    /// The vehicle's own weight.
    pub fn empty_weight(&self) -> Weight {
        self.empty_weight
    }

    pub fn length(&self) -> Length {
        self.length
    }

    /// Number of passengers the vehicle can seat.
    pub fn max_passengers(&self) -> u64 {
        self.max_passengers
    }

    /// Freight the vehicle can carry on top of its passengers.
    pub fn max_additional_load(&self) -> Weight {
        self.max_additional_load
    }

    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    pub fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }

    pub fn year_of_manufacturing(&self) -> YearOfManufacturing {
        self.year_of_manufacturing
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }
}

/// Fluent builder for [`RailVehicle`].
///
/// Weights and length default to zero, capacity to no passengers and the
/// classification to none.
#[derive(Debug, Clone)]
pub struct RailVehicleBuilder {
    empty_weight: Weight,
    length: Length,
    max_passengers: i64,
    max_additional_load: Weight,
    classification: Option<Classification>,
    manufacturer: Manufacturer,
    year_of_manufacturing: YearOfManufacturing,
    serial_number: SerialNumber,
}

impl RailVehicleBuilder {
    pub fn empty_weight(mut self, weight: Weight) -> Self {
        self.empty_weight = weight;
        self
    }

    pub fn length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }

    /// Set the passenger capacity. Negative values fail in [`build`](Self::build).
    pub fn max_passengers(mut self, passengers: i64) -> Self {
        self.max_passengers = passengers;
        self
    }

    pub fn max_additional_load(mut self, load: Weight) -> Self {
        self.max_additional_load = load;
        self
    }

    pub fn classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Validate and build the vehicle.
    pub fn build(self) -> Result<RailVehicle, ValidationError> {
        let max_passengers = u64::try_from(self.max_passengers)
            .map_err(|_| ValidationError::new("max passengers", "cannot be less than 0"))?;

        Ok(RailVehicle {
            empty_weight: self.empty_weight,
            length: self.length,
            max_passengers,
            max_additional_load: self.max_additional_load,
            classification: self.classification,
            manufacturer: self.manufacturer,
            year_of_manufacturing: self.year_of_manufacturing,
            serial_number: self.serial_number,
        })
    }
}
