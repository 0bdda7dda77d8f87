//! Weight type.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A weight in kilograms.
///
/// Weights are never negative and always finite. Sums and products that
/// would exceed `f64::MAX` are clamped to it. Tractive force is also
/// expressed as a `Weight`: the load a locomotive is able to pull.
///
/// # Examples
///
/// ```
/// use train_sim::domain::Weight;
///
/// let w = Weight::new(30_000.0).unwrap();
/// assert_eq!(w.value(), 30_000.0);
///
/// // Negative weights are rejected
/// assert!(Weight::new(-1.0).is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Zero kilograms.
    pub const ZERO: Self = Self(0.0);

    /// Create a weight from a value in kilograms.
    ///
    /// Returns an error if the value is negative, NaN or infinite.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::new("weight", "must be a finite number"));
        }
        if value < 0.0 {
            return Err(ValidationError::new("weight", "cannot be less than 0"));
        }
        Ok(Weight(value))
    }

    /// For constants known to be valid.
    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Weight(value)
    }

    /// Returns the weight in kilograms.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns this weight multiplied by a count, e.g. passengers.
    pub fn times(self, count: u64) -> Self {
        Weight::clamped(self.0 * count as f64)
    }

    fn clamped(value: f64) -> Self {
        Weight(value.min(f64::MAX))
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight::clamped(self.0 + rhs.0)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, Add::add)
    }
}

impl TryFrom<f64> for Weight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> f64 {
        weight.0
    }
}

impl fmt::Debug for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weight({} kg)", self.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0)
    }
}
