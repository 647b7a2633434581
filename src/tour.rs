//! Multi-stop tour construction and algorithm dispatch.

use serde::{Deserialize, Serialize};

use crate::genetic::{GeneticConfig, genetic_tour};
use crate::graph::DynamicGraph;
use crate::search::RouteError;

/// Multi-stop optimization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Genetic,
    NearestNeighbor,
}

impl Algorithm {
    /// Parse an algorithm name from a request. Unrecognized names fall back
    /// to nearest neighbor, matching the long-standing request contract.
    pub fn from_name(name: &str) -> Self {
        match name {
            "genetic" => Algorithm::Genetic,
            "nearest_neighbor" => Algorithm::NearestNeighbor,
            _ => Algorithm::NearestNeighbor,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Genetic => "genetic",
            Algorithm::NearestNeighbor => "nearest_neighbor",
        }
    }
}

/// Result of a multi-stop tour construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TourResult {
    pub route: Vec<String>,
    pub cost: f64,
    /// Whether every requested stop made it into the route. Nearest
    /// neighbor reports `false` when it runs out of reachable stops.
    pub complete: bool,
}

/// A dispatched tour with response metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourPlan {
    pub route: Vec<String>,
    pub cost: f64,
    pub algorithm: Algorithm,
    pub num_stops: usize,
    pub complete: bool,
}

/// Total edge cost along consecutive route pairs. Any missing edge makes
/// the total infinite; routes of length <= 1 cost zero.
pub fn route_cost(graph: &DynamicGraph, route: &[String]) -> f64 {
    route
        .windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]).unwrap_or(f64::INFINITY))
        .sum()
}

fn ensure_known(graph: &DynamicGraph, name: &str) -> Result<(), RouteError> {
    if graph.contains(name) {
        Ok(())
    } else {
        Err(RouteError::UnknownLocation(name.to_string()))
    }
}

pub(crate) fn validate_stops(
    graph: &DynamicGraph,
    start: &str,
    stops: &[String],
) -> Result<(), RouteError> {
    ensure_known(graph, start)?;
    for stop in stops {
        ensure_known(graph, stop)?;
    }
    Ok(())
}

/// Greedy nearest-neighbor tour.
///
/// From the current location, repeatedly take the unvisited stop with the
/// cheapest direct edge (ties broken by first occurrence in the remaining
/// stop list). If no finite edge remains, the partial route built so far is
/// returned as-is. After all stops are visited the closing edge back to
/// `start` is appended when it exists; otherwise the tour stays open.
pub fn nearest_neighbor_tour(
    graph: &DynamicGraph,
    start: &str,
    stops: &[String],
) -> Result<TourResult, RouteError> {
    validate_stops(graph, start, stops)?;

    let mut route = vec![start.to_string()];
    let mut total_cost = 0.0;
    if stops.is_empty() {
        return Ok(TourResult {
            route,
            cost: total_cost,
            complete: true,
        });
    }

    let mut remaining: Vec<&String> = stops.iter().collect();
    let mut current = start.to_string();

    while !remaining.is_empty() {
        let mut nearest: Option<(usize, f64)> = None;
        for (index, stop) in remaining.iter().enumerate() {
            let weight = graph.weight(&current, stop).unwrap_or(f64::INFINITY);
            let closer = match nearest {
                Some((_, best)) => weight < best,
                None => true,
            };
            if closer {
                nearest = Some((index, weight));
            }
        }

        match nearest {
            Some((index, weight)) if weight.is_finite() => {
                let stop = remaining.remove(index);
                route.push(stop.clone());
                total_cost += weight;
                current = stop.clone();
            }
            // No reachable stop left: return the partial tour.
            _ => {
                return Ok(TourResult {
                    route,
                    cost: total_cost,
                    complete: false,
                });
            }
        }
    }

    // Close the loop back to the start when an edge exists; otherwise the
    // route stays open with the cost unchanged.
    if let Some(weight) = graph.weight(&current, start) {
        route.push(start.to_string());
        total_cost += weight;
    }

    Ok(TourResult {
        route,
        cost: total_cost,
        complete: true,
    })
}

/// Route a multi-stop request to the chosen algorithm and attach response
/// metadata. An empty stop list yields the trivial single-node plan at
/// cost zero for every algorithm.
pub fn optimize_multi_stop(
    graph: &DynamicGraph,
    start: &str,
    stops: &[String],
    algorithm: Algorithm,
) -> Result<TourPlan, RouteError> {
    let result = match algorithm {
        Algorithm::Genetic => genetic_tour(graph, start, stops, &GeneticConfig::default())?,
        Algorithm::NearestNeighbor => nearest_neighbor_tour(graph, start, stops)?,
    };

    Ok(TourPlan {
        route: result.route,
        cost: result.cost,
        algorithm,
        num_stops: stops.len(),
        complete: result.complete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_name() {
        assert_eq!(Algorithm::from_name("genetic"), Algorithm::Genetic);
        assert_eq!(
            Algorithm::from_name("nearest_neighbor"),
            Algorithm::NearestNeighbor
        );
    }

    #[test]
    fn test_unrecognized_algorithm_falls_back_to_nearest_neighbor() {
        assert_eq!(Algorithm::from_name("brute_force"), Algorithm::NearestNeighbor);
        assert_eq!(Algorithm::from_name(""), Algorithm::NearestNeighbor);
    }

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in [Algorithm::Genetic, Algorithm::NearestNeighbor] {
            assert_eq!(Algorithm::from_name(algorithm.name()), algorithm);
        }
    }
}
