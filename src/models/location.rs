//! Location labels and distance units.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Distance of a single road segment, in kilometres. Always positive.
pub type Weight = u32;

/// Total distance of a path, in kilometres.
pub type Distance = u64;

/// A named location in the road network.
///
/// Labels are opaque: two locations are the same iff their labels are equal.
/// Ordering is lexicographic on the label, which is also the tie-break order
/// used by the router.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
///
/// let a = Location::from("A");
/// assert_eq!(a.as_str(), "A");
/// assert_eq!(a.to_string(), "A");
/// assert!(a < Location::from("B"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a location from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label of this location.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for Location {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_location_equality() {
        assert_eq!(Location::new("A"), Location::from("A"));
        assert_eq!(Location::from(String::from("C")), Location::from("C"));
        assert_ne!(Location::from("A"), Location::from("a"));
    }

    #[test]
    fn test_location_ordering() {
        let mut labels = vec![Location::from("J"), Location::from("B"), Location::from("E")];
        labels.sort();
        assert_eq!(labels, vec![Location::from("B"), Location::from("E"), Location::from("J")]);
    }

    #[test]
    fn test_location_borrow_lookup() {
        let mut map = BTreeMap::new();
        map.insert(Location::from("A"), 5);
        assert_eq!(map.get("A"), Some(&5));
        assert_eq!(map.get("B"), None);
    }

    #[test]
    fn test_location_serde_transparent() {
        let a: Location = serde_json::from_str("\"Quito\"").expect("valid json");
        assert_eq!(a.as_str(), "Quito");
        assert_eq!(serde_json::to_string(&a).expect("serializable"), "\"Quito\"");
    }
}
