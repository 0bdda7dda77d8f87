//! Domain error types.
//!
//! `ValidationError` is returned by every value-object and vehicle
//! constructor. `TrainError` covers everything that can go wrong when a
//! train's composition is mutated through the registry.

/// Error returned when a value violates its invariant at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    field: &'static str,
    reason: &'static str,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }

    /// The attribute that failed validation.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Why the attribute was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Errors raised when creating or mutating a train.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    /// An attribute failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The locomotive already belongs to a train (possibly this one)
    #[error("locomotive cannot be added to train: it is already in use")]
    LocomotiveInUse,

    /// The wagon already belongs to a train (possibly this one)
    #[error("wagon cannot be added to train: it is already in use")]
    WagonInUse,

    /// The operation would break a composition invariant
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

impl TrainError {
    /// Returns true for either "already in use" variant.
    pub fn is_already_in_use(&self) -> bool {
        matches!(self, TrainError::LocomotiveInUse | TrainError::WagonInUse)
    }
}
