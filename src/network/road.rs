//! Immutable road network with load-time validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RoadGraph;
use crate::error::{ConfigurationError, RoutingError};
use crate::models::{Location, Weight};

/// Adjacency mapping: location → (neighbor → edge weight).
pub type Adjacency = BTreeMap<Location, BTreeMap<Location, Weight>>;

/// Edges of the built-in ten-location map.
const DEFAULT_EDGES: [(&str, &str, Weight); 14] = [
    ("A", "B", 5),
    ("A", "C", 10),
    ("B", "C", 3),
    ("B", "D", 20),
    ("B", "E", 7),
    ("C", "D", 2),
    ("C", "F", 8),
    ("D", "G", 12),
    ("E", "F", 9),
    ("E", "H", 6),
    ("F", "I", 15),
    ("G", "J", 4),
    ("H", "I", 3),
    ("I", "J", 14),
];

/// An undirected road network with positive integer distances.
///
/// The network is validated once at construction and never changes
/// afterwards: every edge `u -> v (w)` has a matching `v -> u (w)`, all
/// weights are positive, and no location neighbors itself. Locations
/// without any edge are allowed; they are simply unreachable.
///
/// # Examples
///
/// ```
/// use fleet_routing::network::RoadNetwork;
///
/// let net = RoadNetwork::default_map();
/// assert_eq!(net.len(), 10);
/// assert_eq!(net.weight("C", "D"), Some(2));
/// assert_eq!(net.weight("D", "C"), Some(2));
/// assert_eq!(net.weight("A", "J"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Adjacency", into = "Adjacency")]
pub struct RoadNetwork {
    adjacency: Adjacency,
}

impl RoadNetwork {
    /// Validates `adjacency` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the mapping is empty, has a zero
    /// weight or a self-loop, or is not symmetric.
    pub fn new(adjacency: Adjacency) -> Result<Self, ConfigurationError> {
        if adjacency.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        for (from, neighbors) in &adjacency {
            for (to, &weight) in neighbors {
                if from == to {
                    return Err(ConfigurationError::SelfLoop {
                        location: from.clone(),
                    });
                }
                if weight == 0 {
                    return Err(ConfigurationError::ZeroWeight {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
                let reverse = adjacency.get(to).and_then(|n| n.get(from)).copied();
                if reverse != Some(weight) {
                    return Err(ConfigurationError::AsymmetricEdge {
                        from: from.clone(),
                        to: to.clone(),
                        weight,
                        reverse,
                    });
                }
            }
        }

        Ok(Self { adjacency })
    }

    /// Builds a network from an undirected edge list.
    ///
    /// Each `(a, b, w)` is inserted in both directions. Repeating an edge is
    /// fine as long as the weight is the same.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::ConflictingEdge`] on a repeated edge with another
    /// weight, plus everything [`RoadNetwork::new`] checks.
    pub fn from_edges<I, L>(edges: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (L, L, Weight)>,
        L: Into<Location>,
    {
        let mut adjacency = Adjacency::new();
        for (a, b, weight) in edges {
            let (a, b) = (a.into(), b.into());
            if let Some(&first) = adjacency.get(&a).and_then(|n| n.get(&b)) {
                if first != weight {
                    return Err(ConfigurationError::ConflictingEdge {
                        a,
                        b,
                        first,
                        second: weight,
                    });
                }
                continue;
            }
            insert_edge(&mut adjacency, a, b, weight);
        }
        Self::new(adjacency)
    }

    /// Parses a JSON adjacency mapping such as `{"A": {"B": 5}, "B": {"A": 5}}`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::Json`] for malformed input, plus everything
    /// [`RoadNetwork::new`] checks.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let adjacency: Adjacency = serde_json::from_str(json)?;
        Self::new(adjacency)
    }

    /// The built-in map of ten locations `A`..`J` joined by fourteen roads.
    pub fn default_map() -> Self {
        let mut adjacency = Adjacency::new();
        for (a, b, weight) in DEFAULT_EDGES {
            insert_edge(&mut adjacency, Location::from(a), Location::from(b), weight);
        }
        Self { adjacency }
    }

    /// Weight of the edge between `a` and `b`, if they are adjacent.
    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    /// All locations in ascending label order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.adjacency.keys()
    }

    /// Every undirected edge once, as `(a, b, w)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (&Location, &Location, Weight)> + '_ {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, &w)| (a, b, w))
        })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the network has no locations.
    ///
    /// Never the case for a validated network.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

fn insert_edge(adjacency: &mut Adjacency, a: Location, b: Location, weight: Weight) {
    adjacency.entry(a.clone()).or_default().insert(b.clone(), weight);
    adjacency.entry(b).or_default().insert(a, weight);
}

impl TryFrom<Adjacency> for RoadNetwork {
    type Error = ConfigurationError;

    fn try_from(adjacency: Adjacency) -> Result<Self, Self::Error> {
        Self::new(adjacency)
    }
}

impl From<RoadNetwork> for Adjacency {
    fn from(network: RoadNetwork) -> Self {
        network.adjacency
    }
}

impl RoadGraph for RoadNetwork {
    fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    fn neighbors<'a>(
        &'a self,
        location: &str,
    ) -> Result<Box<dyn Iterator<Item = (&'a Location, Weight)> + 'a>, RoutingError> {
        let neighbors = self
            .adjacency
            .get(location)
            .ok_or_else(|| RoutingError::UnknownLocation(Location::from(location)))?;
        Ok(Box::new(neighbors.iter().map(|(loc, &w)| (loc, w))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(entries: &[(&str, &[(&str, Weight)])]) -> Adjacency {
        entries
            .iter()
            .map(|(from, neighbors)| {
                let neighbors = neighbors
                    .iter()
                    .map(|(to, w)| (Location::from(*to), *w))
                    .collect();
                (Location::from(*from), neighbors)
            })
            .collect()
    }

    #[test]
    fn test_default_map_shape() {
        let net = RoadNetwork::default_map();
        assert_eq!(net.len(), 10);
        assert!(!net.is_empty());
        assert_eq!(net.edges().count(), 14);
        let labels: Vec<&str> = net.locations().map(Location::as_str).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
    }

    #[test]
    fn test_default_map_passes_validation() {
        let net = RoadNetwork::default_map();
        let revalidated = RoadNetwork::new(net.clone().into()).expect("valid");
        assert_eq!(revalidated, net);
    }

    #[test]
    fn test_new_accepts_symmetric() {
        let adj = adjacency(&[("A", &[("B", 4)]), ("B", &[("A", 4)])]);
        let net = RoadNetwork::new(adj).expect("valid");
        assert_eq!(net.weight("A", "B"), Some(4));
    }

    #[test]
    fn test_new_accepts_isolated_location() {
        let adj = adjacency(&[("A", &[("B", 4)]), ("B", &[("A", 4)]), ("K", &[])]);
        let net = RoadNetwork::new(adj).expect("valid");
        assert!(net.contains("K"));
        assert_eq!(net.neighbors("K").expect("known").count(), 0);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            RoadNetwork::new(Adjacency::new()),
            Err(ConfigurationError::Empty)
        ));
    }

    #[test]
    fn test_new_rejects_weight_mismatch() {
        let adj = adjacency(&[("A", &[("B", 4)]), ("B", &[("A", 5)])]);
        match RoadNetwork::new(adj) {
            Err(ConfigurationError::AsymmetricEdge {
                from,
                to,
                weight,
                reverse,
            }) => {
                assert_eq!(from.as_str(), "A");
                assert_eq!(to.as_str(), "B");
                assert_eq!(weight, 4);
                assert_eq!(reverse, Some(5));
            }
            other => panic!("expected asymmetric edge, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_missing_reverse() {
        let adj = adjacency(&[("A", &[("B", 4)]), ("B", &[])]);
        assert!(matches!(
            RoadNetwork::new(adj),
            Err(ConfigurationError::AsymmetricEdge { reverse: None, .. })
        ));

        // Neighbor that is not a location at all.
        let adj = adjacency(&[("A", &[("Z", 4)])]);
        assert!(matches!(
            RoadNetwork::new(adj),
            Err(ConfigurationError::AsymmetricEdge { reverse: None, .. })
        ));
    }

    #[test]
    fn test_new_rejects_zero_weight() {
        let adj = adjacency(&[("A", &[("B", 0)]), ("B", &[("A", 0)])]);
        assert!(matches!(
            RoadNetwork::new(adj),
            Err(ConfigurationError::ZeroWeight { .. })
        ));
    }

    #[test]
    fn test_new_rejects_self_loop() {
        let adj = adjacency(&[("A", &[("A", 1)])]);
        assert!(matches!(
            RoadNetwork::new(adj),
            Err(ConfigurationError::SelfLoop { .. })
        ));
    }

    #[test]
    fn test_from_edges_duplicate_same_weight() {
        let net = RoadNetwork::from_edges([("A", "B", 3), ("B", "A", 3)]).expect("valid");
        assert_eq!(net.edges().count(), 1);
    }

    #[test]
    fn test_from_edges_conflicting_weight() {
        match RoadNetwork::from_edges([("A", "B", 3), ("B", "A", 7)]) {
            Err(ConfigurationError::ConflictingEdge { first, second, .. }) => {
                assert_eq!(first, 3);
                assert_eq!(second, 7);
            }
            other => panic!("expected conflicting edge, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json() {
        let net = RoadNetwork::from_json(r#"{"A": {"B": 5}, "B": {"A": 5}}"#).expect("valid");
        assert_eq!(net.weight("B", "A"), Some(5));

        assert!(matches!(
            RoadNetwork::from_json(r#"{"A": {"B": 5}}"#),
            Err(ConfigurationError::AsymmetricEdge { .. })
        ));
        assert!(matches!(
            RoadNetwork::from_json(r#"{"A": {"B": -5}}"#),
            Err(ConfigurationError::Json(_))
        ));
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let net: RoadNetwork =
            serde_json::from_str(r#"{"A": {"B": 2}, "B": {"A": 2}}"#).expect("valid");
        assert_eq!(net.len(), 2);
        assert!(serde_json::from_str::<RoadNetwork>(r#"{"A": {"B": 2}}"#).is_err());

        let json = serde_json::to_string(&net).expect("serializable");
        assert_eq!(json, r#"{"A":{"B":2},"B":{"A":2}}"#);
    }

    #[test]
    fn test_neighbors_unknown_location() {
        let net = RoadNetwork::default_map();
        match net.neighbors("Z") {
            Err(RoutingError::UnknownLocation(loc)) => assert_eq!(loc.as_str(), "Z"),
            _ => panic!("expected unknown location"),
        }
        assert!(!net.contains("Z"));
    }

    #[test]
    fn test_neighbors_sorted_by_label() {
        let net = RoadNetwork::default_map();
        let around_b: Vec<(&str, Weight)> = net
            .neighbors("B")
            .expect("known")
            .map(|(loc, w)| (loc.as_str(), w))
            .collect();
        assert_eq!(around_b, vec![("A", 5), ("C", 3), ("D", 20), ("E", 7)]);
    }

    #[test]
    fn test_edges_listed_once() {
        let net = RoadNetwork::from_edges([("B", "A", 1), ("C", "B", 2)]).expect("valid");
        let edges: Vec<(&str, &str, Weight)> = net
            .edges()
            .map(|(a, b, w)| (a.as_str(), b.as_str(), w))
            .collect();
        assert_eq!(edges, vec![("A", "B", 1), ("B", "C", 2)]);
    }
}
