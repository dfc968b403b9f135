//! Error types.
//!
//! Three families, matching how far a failure reaches:
//!
//! - [`ConfigurationError`] — the road network itself is invalid. Callers are
//!   expected to refuse to continue.
//! - [`ValidationError`] — a scheduler operation was rejected. Nothing is
//!   changed and the scheduler stays usable.
//! - [`RoutingError`] — a single route could not be computed.

use thiserror::Error;

use crate::models::{Location, Weight};
use crate::scheduler::SchedulerState;

/// Top-level error type of the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid road network.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Rejected scheduler operation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Route computation failure.
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),
}

/// A road network that cannot be used for routing.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// The network has no locations.
    #[error("road network has no locations")]
    Empty,

    /// An edge has weight zero.
    #[error("edge {from} -> {to} has zero weight")]
    ZeroWeight {
        /// Edge source.
        from: Location,
        /// Edge target.
        to: Location,
    },

    /// A location lists itself as a neighbor.
    #[error("location {location} is connected to itself")]
    SelfLoop {
        /// Offending location.
        location: Location,
    },

    /// An edge has no matching reverse edge of equal weight.
    #[error("edge {from} -> {to} ({weight}) has reverse {reverse:?}")]
    AsymmetricEdge {
        /// Edge source.
        from: Location,
        /// Edge target.
        to: Location,
        /// Weight of `from -> to`.
        weight: Weight,
        /// Weight of `to -> from`, if that edge exists at all.
        reverse: Option<Weight>,
    },

    /// The same undirected edge was declared twice with different weights.
    #[error("edge {a} - {b} declared with weights {first} and {second}")]
    ConflictingEdge {
        /// One endpoint.
        a: Location,
        /// Other endpoint.
        b: Location,
        /// First declared weight.
        first: Weight,
        /// Conflicting weight.
        second: Weight,
    },

    /// The network or simulation description is not valid JSON.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to compute a single route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// The label is not part of the road network.
    #[error("unknown location `{0}`")]
    UnknownLocation(Location),

    /// The destination cannot be reached from the origin.
    #[error("no route from {start} to {end}")]
    NoRoute {
        /// Origin.
        start: Location,
        /// Unreachable destination.
        end: Location,
    },
}

/// A rejected scheduler operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Fleet capacity outside `1..=5`.
    #[error("fleet capacity {requested} is outside {min}..={max}")]
    CapacityOutOfRange {
        /// Requested capacity.
        requested: i64,
        /// Smallest accepted capacity.
        min: u8,
        /// Largest accepted capacity.
        max: u8,
    },

    /// Capacity smaller than the number of requests already accepted.
    #[error("fleet capacity {requested} is below the {pending} requests already accepted")]
    CapacityBelowPending {
        /// Requested capacity.
        requested: u8,
        /// Requests already accepted.
        pending: usize,
    },

    /// A trip request was refused.
    #[error("request rejected: {0}")]
    RequestRejected(#[from] RejectReason),

    /// Fewer requests than vehicles at run time.
    #[error("only {pending} of {capacity} vehicles have a trip assigned")]
    IncompleteFleet {
        /// Requests accepted so far.
        pending: usize,
        /// Fleet capacity.
        capacity: u8,
    },

    /// The operation is only allowed while configuring.
    #[error("operation not allowed while {0}")]
    NotConfiguring(SchedulerState),
}

/// Why a trip request was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Origin or destination left blank.
    #[error("origin and destination are both required")]
    MissingEndpoint,

    /// Origin or destination is not a known location.
    #[error(transparent)]
    UnknownLocation(RoutingError),

    /// Every vehicle already has a trip.
    #[error("all {capacity} vehicles already have a trip")]
    FleetFull {
        /// Fleet capacity.
        capacity: u8,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
