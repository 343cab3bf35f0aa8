// Validation traits

use crate::{Inspect, Result};

/// Method-call form of [`validate`](crate::validate).
///
/// Implemented for every [`Inspect`] type.
pub trait Validate {
    /// Validate the value and return all field failures, if any
    fn validate(&self) -> Result<()>;
}

impl<T: Inspect + ?Sized> Validate for T {
    fn validate(&self) -> Result<()> {
        crate::validate(self)
    }
}
