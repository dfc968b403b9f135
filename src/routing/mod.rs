//! Single-source shortest paths over a [`RoadGraph`](crate::network::RoadGraph).
//!
//! - [`shortest_path`] — Dijkstra with a lazy-deletion binary heap
//! - [`Router`] — borrowing handle used by the scheduler

mod dijkstra;

pub use dijkstra::{shortest_path, Router, ShortestPath};
