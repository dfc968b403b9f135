//! # fleet-routing
//!
//! Least-cost trip assignment for a small fleet over a fixed road network.
//! Callers declare a fleet size and one trip per vehicle; a run computes the
//! shortest path for every trip and reports them from shortest to longest.
//!
//! ## Modules
//!
//! - [`models`] — Location labels, trip requests and results
//! - [`network`] — Validated, immutable road network and the [`RoadGraph`](network::RoadGraph) view
//! - [`routing`] — Dijkstra shortest path
//! - [`scheduler`] — Bounded trip queue and simulation cycle
//! - [`report`] — Localized display lines
//! - [`config`] — JSON simulation configuration
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use fleet_routing::network::RoadNetwork;
//! use fleet_routing::scheduler::TripScheduler;
//!
//! let net = RoadNetwork::default_map();
//! let mut scheduler = TripScheduler::new(&net);
//! scheduler.set_capacity(3).unwrap();
//! scheduler.submit_request("A", "D").unwrap();
//! scheduler.submit_request("B", "C").unwrap();
//! scheduler.submit_request("E", "I").unwrap();
//!
//! let distances: Vec<u64> = scheduler
//!     .run_simulation()
//!     .unwrap()
//!     .iter()
//!     .map(|trip| trip.total_distance())
//!     .collect();
//! assert_eq!(distances, vec![3, 9, 10]);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod report;
pub mod routing;
pub mod scheduler;

pub use error::{Error, Result};
