//! Fleet size bound.

use std::fmt;

use crate::error::ValidationError;

/// Smallest accepted fleet.
pub const MIN_CAPACITY: u8 = 1;

/// Largest accepted fleet.
pub const MAX_CAPACITY: u8 = 5;

/// Number of vehicles in one simulation cycle, always in `1..=5`.
///
/// # Examples
///
/// ```
/// use fleet_routing::scheduler::FleetCapacity;
///
/// assert_eq!(FleetCapacity::new(3).unwrap().get(), 3);
/// assert!(FleetCapacity::new(0).is_err());
/// assert!(FleetCapacity::new(6).is_err());
/// assert_eq!(FleetCapacity::default().get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FleetCapacity(u8);

impl FleetCapacity {
    /// Validates `requested`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::CapacityOutOfRange`] outside `1..=5`.
    pub fn new(requested: i64) -> Result<Self, ValidationError> {
        match u8::try_from(requested) {
            Ok(n) if (MIN_CAPACITY..=MAX_CAPACITY).contains(&n) => Ok(Self(n)),
            _ => Err(ValidationError::CapacityOutOfRange {
                requested,
                min: MIN_CAPACITY,
                max: MAX_CAPACITY,
            }),
        }
    }

    /// Number of vehicles.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for FleetCapacity {
    fn default() -> Self {
        Self(MIN_CAPACITY)
    }
}

impl fmt::Display for FleetCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
