//! Single-destination shortest-path search over a dynamic graph.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use crate::graph::DynamicGraph;
use crate::haversine::planar_km;

#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    /// A start, end, or stop name is not present in the graph. Rejected
    /// before any search runs.
    UnknownLocation(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownLocation(name) => {
                write!(f, "location {:?} is not in the graph", name)
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Result of a single-destination search.
///
/// An unreachable destination is reported as an empty route at infinite
/// cost, never as an error; check [`is_reachable`](Self::is_reachable)
/// before using the route.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub route: Vec<String>,
    pub cost: f64,
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    fn unreachable() -> Self {
        Self {
            route: Vec::new(),
            cost: f64::INFINITY,
        }
    }
}

/// Priority-queue entry ordered so the smallest cost pops first.
#[derive(Debug, Clone, PartialEq)]
struct QueueEntry {
    cost: f64,
    node: String,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap behaves as a min-heap; name as tie-breaker
        // keeps the order deterministic.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn ensure_known(graph: &DynamicGraph, name: &str) -> Result<(), RouteError> {
    if graph.contains(name) {
        Ok(())
    } else {
        Err(RouteError::UnknownLocation(name.to_string()))
    }
}

fn reconstruct(predecessors: &HashMap<String, String>, start: &str, end: &str) -> Vec<String> {
    let mut route = vec![end.to_string()];
    let mut current = end;
    while current != start {
        match predecessors.get(current) {
            Some(previous) => {
                route.push(previous.clone());
                current = previous;
            }
            None => break,
        }
    }
    route.reverse();
    route
}

/// Dijkstra's algorithm with lazy deletion of stale queue entries.
///
/// Early-exits once `end` is popped. Requires non-negative edge weights,
/// which dynamic graphs guarantee (multipliers are validated >= 0).
pub fn shortest_path(
    graph: &DynamicGraph,
    start: &str,
    end: &str,
) -> Result<PathResult, RouteError> {
    ensure_known(graph, start)?;
    ensure_known(graph, end)?;

    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start.to_string(), 0.0);
    queue.push(QueueEntry {
        cost: 0.0,
        node: start.to_string(),
    });

    while let Some(QueueEntry { cost: _, node }) = queue.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());

        if node == end {
            return Ok(PathResult {
                route: reconstruct(&predecessors, start, end),
                cost: distances[&node],
            });
        }

        let current_distance = distances[&node];
        for (neighbor, weight) in graph.neighbors(&node) {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = current_distance + weight;
            let improved = match distances.get(neighbor) {
                Some(&best) => candidate < best,
                None => true,
            };
            if improved {
                distances.insert(neighbor.to_string(), candidate);
                predecessors.insert(neighbor.to_string(), node.clone());
                queue.push(QueueEntry {
                    cost: candidate,
                    node: neighbor.to_string(),
                });
            }
        }
    }

    Ok(PathResult::unreachable())
}

/// A* search keyed by `g + h`, where `h` is the degree-scaled planar
/// distance between raw coordinates.
///
/// Returns the same cost as Dijkstra whenever every multiplier in the graph
/// is >= 1.0. Under discounted traffic (multipliers below 1.0) the
/// heuristic can overestimate the true adjusted cost, so optimality is not
/// guaranteed there; this trade-off is inherited deliberately. Nodes
/// missing from `coords` contribute a zero heuristic.
pub fn shortest_path_astar(
    graph: &DynamicGraph,
    coords: &HashMap<String, (f64, f64)>,
    start: &str,
    end: &str,
) -> Result<PathResult, RouteError> {
    ensure_known(graph, start)?;
    ensure_known(graph, end)?;

    let heuristic = |node: &str| -> f64 {
        match (coords.get(node), coords.get(end)) {
            (Some(&from), Some(&to)) => planar_km(from, to),
            _ => 0.0,
        }
    };

    let mut g_score: HashMap<String, f64> = HashMap::new();
    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut open = BinaryHeap::new();

    g_score.insert(start.to_string(), 0.0);
    open.push(QueueEntry {
        cost: heuristic(start),
        node: start.to_string(),
    });

    while let Some(QueueEntry { cost: _, node }) = open.pop() {
        if node == end {
            return Ok(PathResult {
                route: reconstruct(&predecessors, start, end),
                cost: g_score[&node],
            });
        }

        let current_g = g_score[&node];
        for (neighbor, weight) in graph.neighbors(&node) {
            let tentative = current_g + weight;
            let improved = match g_score.get(neighbor) {
                Some(&best) => tentative < best,
                None => true,
            };
            if improved {
                g_score.insert(neighbor.to_string(), tentative);
                predecessors.insert(neighbor.to_string(), node.clone());
                open.push(QueueEntry {
                    cost: tentative + heuristic(neighbor),
                    node: neighbor.to_string(),
                });
            }
        }
    }

    Ok(PathResult::unreachable())
}
