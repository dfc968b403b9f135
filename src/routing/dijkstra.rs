//! Dijkstra shortest path.
//!
//! Keeps a tentative distance and a predecessor per location. The frontier is
//! a min-heap of `(distance, location)`; a location is pushed again whenever
//! its distance improves, and entries that are worse than the current best
//! are skipped when popped instead of being removed eagerly.
//!
//! # Tie-breaking
//!
//! Heap entries compare by distance, then by label, so among equally distant
//! locations the smallest label settles first. Neighbors are relaxed in label
//! order, and a predecessor is only replaced by a strictly shorter distance.
//! For a fixed graph the returned path is therefore always the same.
//!
//! # Complexity
//!
//! O((V + E) log V).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::error::RoutingError;
use crate::models::{Distance, Location};
use crate::network::RoadGraph;

/// A shortest path and its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Locations from start to end, both included.
    pub path: Vec<Location>,
    /// Sum of the edge weights along `path`.
    pub total_distance: Distance,
}

/// Computes the shortest path from `start` to `end`.
///
/// # Errors
///
/// - [`RoutingError::UnknownLocation`] if either endpoint is not in `graph`
/// - [`RoutingError::NoRoute`] if `end` cannot be reached from `start`
///
/// # Examples
///
/// ```
/// use fleet_routing::network::RoadNetwork;
/// use fleet_routing::routing::shortest_path;
///
/// let net = RoadNetwork::default_map();
/// let sp = shortest_path(&net, "A", "D").unwrap();
/// let labels: Vec<&str> = sp.path.iter().map(|l| l.as_str()).collect();
/// assert_eq!(labels, vec!["A", "B", "C", "D"]);
/// assert_eq!(sp.total_distance, 10);
/// ```
pub fn shortest_path<G>(graph: &G, start: &str, end: &str) -> Result<ShortestPath, RoutingError>
where
    G: RoadGraph + ?Sized,
{
    for endpoint in [start, end] {
        if !graph.contains(endpoint) {
            return Err(RoutingError::UnknownLocation(Location::from(endpoint)));
        }
    }

    let start = Location::from(start);
    let end = Location::from(end);
    if start == end {
        return Ok(ShortestPath {
            path: vec![start],
            total_distance: 0,
        });
    }

    // Missing entries stand for an infinite distance.
    let mut distances: HashMap<Location, Distance> = HashMap::new();
    let mut previous: HashMap<Location, Location> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(start.clone(), 0);
    frontier.push(Reverse((0, start.clone())));

    while let Some(Reverse((distance, current))) = frontier.pop() {
        if distances.get(&current).is_some_and(|&best| distance > best) {
            continue;
        }
        trace!("settled {current} at {distance}");

        for (neighbor, weight) in graph.neighbors(current.as_str())? {
            let candidate = distance + Distance::from(weight);
            let improves = distances
                .get(neighbor)
                .map_or(true, |&known| candidate < known);
            if improves {
                distances.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), current.clone());
                frontier.push(Reverse((candidate, neighbor.clone())));
            }
        }
    }

    let total_distance = match distances.get(&end) {
        Some(&d) => d,
        None => return Err(RoutingError::NoRoute { start, end }),
    };

    let mut path = vec![end.clone()];
    let mut cursor = &end;
    while let Some(prev) = previous.get(cursor) {
        path.push(prev.clone());
        cursor = prev;
    }
    path.reverse();

    Ok(ShortestPath {
        path,
        total_distance,
    })
}

/// Borrowing handle over a road graph.
///
/// Holds nothing but the reference, so every [`route`](Router::route) call is
/// independent of the others.
///
/// # Examples
///
/// ```
/// use fleet_routing::network::RoadNetwork;
/// use fleet_routing::routing::Router;
///
/// let net = RoadNetwork::default_map();
/// let router = Router::new(&net);
/// assert_eq!(router.route("J", "J").unwrap().total_distance, 0);
/// assert!(router.route("A", "Z").is_err());
/// ```
#[derive(Debug)]
pub struct Router<'a, G: ?Sized> {
    graph: &'a G,
}

impl<G: ?Sized> Clone for Router<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for Router<'_, G> {}

impl<'a, G: RoadGraph + ?Sized> Router<'a, G> {
    /// Creates a router over `graph`.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Shortest path from `start` to `end`. See [`shortest_path`].
    pub fn route(&self, start: &str, end: &str) -> Result<ShortestPath, RoutingError> {
        shortest_path(self.graph, start, end)
    }
}
