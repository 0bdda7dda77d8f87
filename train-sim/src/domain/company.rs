//! Railroad company type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The railroad company operating a train.
///
/// Every train belongs to exactly one company. The name must contain at
/// least one non-whitespace character.
///
/// # Examples
///
/// ```
/// use train_sim::domain::RailroadCompany;
///
/// let oebb = RailroadCompany::new("OEBB").unwrap();
/// assert_eq!(oebb.name(), "OEBB");
///
/// assert!(RailroadCompany::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RailroadCompany(String);

impl RailroadCompany {
    /// Create a company from its name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::new("company", "name cannot be empty"));
        }
        Ok(RailroadCompany(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RailroadCompany {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        RailroadCompany::new(name)
    }
}

impl From<RailroadCompany> for String {
    fn from(company: RailroadCompany) -> String {
        company.0
    }
}

impl fmt::Debug for RailroadCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RailroadCompany({})", self.0)
    }
}

impl fmt::Display for RailroadCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
