//! Trip requests, results, and failures.

use std::fmt;

use super::{Distance, Location};
use crate::error::RoutingError;

/// Sequential, 1-based vehicle number assigned in submission order.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::VehicleLabel;
///
/// let v = VehicleLabel::new(3);
/// assert_eq!(v.number(), 3);
/// assert_eq!(v.to_string(), "Vehicle 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleLabel(usize);

impl VehicleLabel {
    /// Creates the label for vehicle number `number`.
    pub fn new(number: usize) -> Self {
        Self(number)
    }

    /// Vehicle number (1-based).
    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VehicleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vehicle {}", self.0)
    }
}

/// A caller-declared trip for one vehicle. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    vehicle: VehicleLabel,
    origin: Location,
    destination: Location,
}

impl TripRequest {
    /// Creates a trip request.
    pub fn new(vehicle: VehicleLabel, origin: Location, destination: Location) -> Self {
        Self {
            vehicle,
            origin,
            destination,
        }
    }

    /// Vehicle assigned to this trip.
    pub fn vehicle(&self) -> VehicleLabel {
        self.vehicle
    }

    /// Where the trip starts.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Where the trip ends.
    pub fn destination(&self) -> &Location {
        &self.destination
    }
}

/// A completed trip: the request plus its shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripResult {
    vehicle: VehicleLabel,
    origin: Location,
    destination: Location,
    path: Vec<Location>,
    total_distance: Distance,
}

impl TripResult {
    /// Combines a request with the route found for it.
    pub fn new(request: TripRequest, path: Vec<Location>, total_distance: Distance) -> Self {
        Self {
            vehicle: request.vehicle,
            origin: request.origin,
            destination: request.destination,
            path,
            total_distance,
        }
    }

    /// Vehicle that made the trip.
    pub fn vehicle(&self) -> VehicleLabel {
        self.vehicle
    }

    /// Trip origin.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Trip destination.
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// Locations visited, origin first and destination last.
    pub fn path(&self) -> &[Location] {
        &self.path
    }

    /// Sum of the edge weights along [`path`](Self::path).
    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }
}

/// A trip whose route could not be computed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripFailure {
    request: TripRequest,
    error: RoutingError,
}

impl TripFailure {
    /// Records the failure of `request`.
    pub fn new(request: TripRequest, error: RoutingError) -> Self {
        Self { request, error }
    }

    /// The request that failed.
    pub fn request(&self) -> &TripRequest {
        &self.request
    }

    /// Why no route was found.
    pub fn error(&self) -> &RoutingError {
        &self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest::new(VehicleLabel::new(2), Location::from("A"), Location::from("D"))
    }

    #[test]
    fn test_request_accessors() {
        let r = request();
        assert_eq!(r.vehicle(), VehicleLabel::new(2));
        assert_eq!(r.origin().as_str(), "A");
        assert_eq!(r.destination().as_str(), "D");
    }

    #[test]
    fn test_result_from_request() {
        let path: Vec<Location> = ["A", "C", "D"].into_iter().map(Location::from).collect();
        let res = TripResult::new(request(), path.clone(), 12);
        assert_eq!(res.vehicle().to_string(), "Vehicle 2");
        assert_eq!(res.origin().as_str(), "A");
        assert_eq!(res.destination().as_str(), "D");
        assert_eq!(res.path(), path.as_slice());
        assert_eq!(res.total_distance(), 12);
    }

    #[test]
    fn test_failure_keeps_request() {
        let err = RoutingError::NoRoute {
            start: Location::from("A"),
            end: Location::from("D"),
        };
        let f = TripFailure::new(request(), err.clone());
        assert_eq!(f.request(), &request());
        assert_eq!(f.error(), &err);
    }
}
