//! Domain model types shared by the network, router, and scheduler.
//!
//! Provides location labels, vehicle labels, trip requests as submitted by
//! the caller, and trip results as produced by a simulation run.

mod location;
mod trip;

pub use location::{Distance, Location, Weight};
pub use trip::{TripFailure, TripRequest, TripResult, VehicleLabel};
