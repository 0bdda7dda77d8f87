//! Descriptive vehicle attributes.
//!
//! These are plain labels with no invariants of their own. They take part
//! in vehicle equality, and `SerialNumber` doubles as the vehicle identity
//! under [`VehicleIdentity::SerialNumber`](super::VehicleIdentity).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A vehicle's serial number, as stamped by the manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn new(value: impl Into<String>) -> Self {
        SerialNumber(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A free-text vehicle classification, e.g. "Taurus" or "Loads wood".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification(String);

impl Classification {
    pub fn new(description: impl Into<String>) -> Self {
        Classification(description.into())
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The company that built a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manufacturer(String);

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Manufacturer(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The year a vehicle was built.
///
/// Historic stock is allowed, so any year is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearOfManufacturing(i32);

impl YearOfManufacturing {
    pub fn new(year: i32) -> Self {
        YearOfManufacturing(year)
    }

    pub fn year(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for YearOfManufacturing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(SerialNumber::new("ASDF123").as_str(), "ASDF123");
        assert_eq!(Classification::new("Taurus").description(), "Taurus");
        assert_eq!(Manufacturer::new("Siemens").name(), "Siemens");
        assert_eq!(YearOfManufacturing::new(1830).year(), 1830);
    }

    #[test]
    fn equality_by_value() {
        assert_eq!(SerialNumber::new("1"), SerialNumber::new("1"));
        assert_ne!(SerialNumber::new("1"), SerialNumber::new("2"));
        assert_eq!(Manufacturer::new("Siemens"), Manufacturer::new("Siemens"));
        assert_ne!(YearOfManufacturing::new(2000), YearOfManufacturing::new(2005));
    }

    #[test]
    fn display() {
        assert_eq!(SerialNumber::new("Beds #1").to_string(), "Beds #1");
        assert_eq!(Classification::new("Food & Beverage").to_string(), "Food & Beverage");
        assert_eq!(Manufacturer::new("SteelWagon").to_string(), "SteelWagon");
        assert_eq!(YearOfManufacturing::new(2009).to_string(), "2009");
    }

    #[test]
    fn serde_transparent() {
        let serial: SerialNumber = serde_json::from_str("\"Wood1\"").unwrap();
        assert_eq!(serial, SerialNumber::new("Wood1"));
        assert_eq!(
            serde_json::to_string(&YearOfManufacturing::new(1990)).unwrap(),
            "1990"
        );
    }
}
