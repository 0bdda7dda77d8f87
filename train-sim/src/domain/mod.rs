//! Domain types for rail vehicles and train compositions.
//!
//! Value objects enforce their invariants at construction time, so code
//! that receives them can trust their validity. Vehicles are plain data;
//! the rules about which vehicle may join which train live in
//! [`crate::registry`].

mod company;
mod consist;
mod descriptors;
mod error;
mod identity;
mod length;
mod locomotive;
mod vehicle;
mod wagon;
mod weight;

pub use company::RailroadCompany;
pub use consist::Consist;
pub use descriptors::{Classification, Manufacturer, SerialNumber, YearOfManufacturing};
pub use error::{TrainError, ValidationError};
pub use identity::VehicleIdentity;
pub use length::Length;
pub use locomotive::{DriveType, Locomotive};
pub use vehicle::{RailVehicle, RailVehicleBuilder};
pub use wagon::{Wagon, WagonKind};
pub use weight::Weight;
