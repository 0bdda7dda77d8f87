//! Length type.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A length in whole meters.
///
/// Sums saturate at `u64::MAX` meters instead of overflowing.
///
/// # Examples
///
/// ```
/// use train_sim::domain::Length;
///
/// let l = Length::new(50).unwrap();
/// assert_eq!(l.value(), 50);
///
/// assert!(Length::new(-3).is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Length(u64);

impl Length {
    /// Zero meters.
    pub const ZERO: Self = Self(0);

    /// Create a length from a value in meters.
    ///
    /// Returns an error if the value is negative.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u64::try_from(value)
            .map(Length)
            .map_err(|_| ValidationError::new("length", "cannot be less than 0"))
    }

    /// Returns the length in meters.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Length {
    fn from(meters: u64) -> Self {
        Length(meters)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::ZERO, Add::add)
    }
}

impl TryFrom<i64> for Length {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Length::new(value)
    }
}

impl From<Length> for u64 {
    fn from(length: Length) -> u64 {
        length.0
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Length({} m)", self.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}
