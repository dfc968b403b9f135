//! Bounded trip queue and simulation cycle.
//!
//! A [`TripScheduler`] collects at most [`FleetCapacity`] trip requests,
//! refuses to run until every vehicle has one, then routes them all and
//! reports the completed trips from shortest to longest.

mod capacity;
mod console;
mod trip_scheduler;

pub use capacity::{FleetCapacity, MAX_CAPACITY, MIN_CAPACITY};
pub use console::Console;
pub use trip_scheduler::{SchedulerState, TripScheduler};
