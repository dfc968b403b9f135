//! Road network representation.
//!
//! The router only sees the network through [`RoadGraph`], so the adjacency
//! representation can change without touching the routing code.

mod road;

pub use road::{Adjacency, RoadNetwork};

use crate::error::RoutingError;
use crate::models::{Location, Weight};

/// Read-only adjacency view of an undirected weighted graph.
///
/// # Examples
///
/// ```
/// use fleet_routing::network::{RoadGraph, RoadNetwork};
///
/// let net = RoadNetwork::from_edges([("A", "B", 5), ("B", "C", 3)]).unwrap();
/// let around_b: Vec<_> = net
///     .neighbors("B")
///     .unwrap()
///     .map(|(loc, w)| (loc.as_str(), w))
///     .collect();
/// assert_eq!(around_b, vec![("A", 5), ("C", 3)]);
/// assert!(net.neighbors("Z").is_err());
/// ```
pub trait RoadGraph {
    /// Returns `true` if `location` is part of the graph.
    fn contains(&self, location: &str) -> bool;

    /// Neighbors of `location` with the weight of the connecting edge.
    ///
    /// Neighbors are yielded in ascending label order.
    fn neighbors<'a>(
        &'a self,
        location: &str,
    ) -> Result<Box<dyn Iterator<Item = (&'a Location, Weight)> + 'a>, RoutingError>;
}
