//! Serializable summary of a train.

use serde::Serialize;

use crate::domain::{Consist, RailroadCompany};
use crate::registry::{RegistryConfig, TrainId};

/// Every derived figure of one train, as plain numbers.
///
/// Weights are in kilograms, lengths in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainReport {
    /// Position of the train in its registry
    pub train: usize,

    /// Operating company
    pub company: String,

    /// Number of locomotives
    pub locomotives: usize,

    /// Number of wagons
    pub wagons: usize,

    pub empty_weight_kg: f64,
    pub max_passengers: u64,
    pub max_additional_freight_kg: f64,
    pub max_additional_load_kg: f64,
    pub total_weight_kg: f64,
    pub length_m: u64,
    pub tractive_force_kg: f64,

    /// Whether the locomotives can pull the full additional load
    pub drivable: bool,

    pub requires_guard: bool,
    pub required_guards: u64,
}

impl TrainReport {
    pub fn new(
        id: TrainId,
        company: &RailroadCompany,
        consist: &Consist,
        config: &RegistryConfig,
    ) -> Self {
        let per_passenger = config.weight_per_passenger;
        Self {
            train: id.index(),
            company: company.name().to_string(),
            locomotives: consist.locomotives().len(),
            wagons: consist.wagons().len(),
            empty_weight_kg: consist.empty_weight().value(),
            max_passengers: consist.max_passengers(),
            max_additional_freight_kg: consist.max_additional_freight().value(),
            max_additional_load_kg: consist.max_additional_load(per_passenger).value(),
            total_weight_kg: consist.total_weight(per_passenger).value(),
            length_m: consist.length().value(),
            tractive_force_kg: consist.tractive_force().value(),
            drivable: consist.is_drivable(per_passenger),
            requires_guard: consist.requires_guard(),
            required_guards: consist.required_guards(config.passengers_per_guard),
        }
    }
}
