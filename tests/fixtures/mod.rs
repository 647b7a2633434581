//! Test fixtures for delivery-planner.
//!
//! Provides realistic Hyderabad locations (the city the original dataset
//! was modeled on) plus small helpers for hand-built edge tables.

pub mod hyderabad_locations;

#[allow(unused_imports)]
pub use hyderabad_locations::*;

use std::collections::HashMap;

use delivery_planner::graph::DynamicGraph;

/// Build a possibly sparse dynamic graph from explicit directed edges.
/// Every mentioned endpoint becomes a node even when it has no outgoing
/// edges.
#[allow(dead_code)]
pub fn sparse_graph(edges: &[(&str, &str, f64)]) -> DynamicGraph {
    let mut map: HashMap<String, HashMap<String, f64>> = HashMap::new();
    for &(from, to, weight) in edges {
        map.entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
        map.entry(to.to_string()).or_default();
    }
    DynamicGraph::from_edges(map)
}
