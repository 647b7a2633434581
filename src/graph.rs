//! Static distance graph and traffic-adjusted dynamic graph construction.

use std::collections::HashMap;
use std::fmt;

use crate::haversine::haversine_km;
use crate::location::{Location, LocationError};
use crate::traffic::{TrafficError, TrafficProfile};
use crate::traits::TrafficModel;

#[derive(Debug)]
pub enum GraphError {
    Location(LocationError),
    Traffic(TrafficError),
    DuplicateLocation(String),
}

impl From<LocationError> for GraphError {
    fn from(err: LocationError) -> Self {
        GraphError::Location(err)
    }
}

impl From<TrafficError> for GraphError {
    fn from(err: TrafficError) -> Self {
        GraphError::Traffic(err)
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Location(err) => write!(f, "{}", err),
            GraphError::Traffic(err) => write!(f, "{}", err),
            GraphError::DuplicateLocation(name) => {
                write!(f, "duplicate location name {:?}", name)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Complete directed graph of great-circle distances between locations.
///
/// Built once per location set; distances are symmetric in value but stored
/// per ordered pair.
#[derive(Debug, Clone)]
pub struct StaticGraph {
    edges: HashMap<String, HashMap<String, f64>>,
}

impl StaticGraph {
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.edges.get(from).and_then(|out| out.get(to)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Traffic-adjusted edge weights for one (hour, day, weather) snapshot.
///
/// Every outgoing edge of a source location is scaled by that source's
/// multiplier, so the graph is asymmetric even though base distances are
/// symmetric. Built fresh per optimization request and discarded after use.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicGraph {
    edges: HashMap<String, HashMap<String, f64>>,
}

impl DynamicGraph {
    /// Build a graph directly from an edge map. Lets callers and tests
    /// supply arbitrary (possibly sparse) weight tables.
    pub fn from_edges(edges: HashMap<String, HashMap<String, f64>>) -> Self {
        Self { edges }
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.edges.get(from).and_then(|out| out.get(to)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    pub fn neighbors(&self, from: &str) -> impl Iterator<Item = (&str, f64)> {
        self.edges
            .get(from)
            .into_iter()
            .flatten()
            .map(|(name, weight)| (name.as_str(), *weight))
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Owns the location set and traffic profile; derives static and dynamic
/// graphs from them.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    locations: HashMap<String, Location>,
    profile: TrafficProfile,
    static_graph: StaticGraph,
}

impl GraphBuilder {
    /// Validate all inputs and build the complete static distance graph.
    pub fn new(locations: Vec<Location>, profile: TrafficProfile) -> Result<Self, GraphError> {
        profile.validate()?;

        let mut by_name: HashMap<String, Location> = HashMap::with_capacity(locations.len());
        for location in locations {
            location.validate()?;
            if by_name.contains_key(&location.name) {
                return Err(GraphError::DuplicateLocation(location.name));
            }
            by_name.insert(location.name.clone(), location);
        }

        let mut edges: HashMap<String, HashMap<String, f64>> =
            HashMap::with_capacity(by_name.len());
        for from in by_name.values() {
            let mut outgoing = HashMap::with_capacity(by_name.len().saturating_sub(1));
            for to in by_name.values() {
                if from.name != to.name {
                    outgoing.insert(to.name.clone(), haversine_km(from.coords(), to.coords()));
                }
            }
            edges.insert(from.name.clone(), outgoing);
        }

        tracing::debug!(locations = by_name.len(), "built static distance graph");

        Ok(Self {
            locations: by_name,
            profile,
            static_graph: StaticGraph { edges },
        })
    }

    pub fn static_graph(&self) -> &StaticGraph {
        &self.static_graph
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Name -> (lat, lng) map, used by the A* heuristic.
    pub fn coordinates(&self) -> HashMap<String, (f64, f64)> {
        self.locations
            .iter()
            .map(|(name, location)| (name.clone(), location.coords()))
            .collect()
    }

    /// Rule-based combined traffic multiplier for a location.
    ///
    /// Unknown names evaluate with an empty area: base 1.0, and
    /// area-restricted patterns cannot match.
    pub fn traffic_multiplier(&self, location: &str, hour: u8, day: u8, weather: &str) -> f64 {
        let area = self
            .locations
            .get(location)
            .map(|loc| loc.area.as_str())
            .unwrap_or("");
        self.profile.multiplier(area, hour, day, weather)
    }

    /// Derive the traffic-adjusted graph for one time/weather snapshot.
    pub fn dynamic_graph(&self, hour: u8, day: u8, weather: &str) -> DynamicGraph {
        self.scaled_graph(|name| self.traffic_multiplier(name, hour, day, weather))
    }

    /// Like [`dynamic_graph`](Self::dynamic_graph), but prefers a trained
    /// traffic model and falls back to the rule-based multiplier per
    /// location when the model has no answer.
    pub fn dynamic_graph_with(
        &self,
        model: &dyn TrafficModel,
        hour: u8,
        day: u8,
        weather: &str,
    ) -> DynamicGraph {
        self.scaled_graph(|name| {
            model
                .predict_multiplier(name, hour, day, weather)
                .unwrap_or_else(|| self.traffic_multiplier(name, hour, day, weather))
        })
    }

    fn scaled_graph(&self, multiplier_for: impl Fn(&str) -> f64) -> DynamicGraph {
        let mut edges: HashMap<String, HashMap<String, f64>> =
            HashMap::with_capacity(self.static_graph.len());
        for (from, outgoing) in &self.static_graph.edges {
            let multiplier = multiplier_for(from);
            let scaled = outgoing
                .iter()
                .map(|(to, distance)| (to.clone(), distance * multiplier))
                .collect();
            edges.insert(from.clone(), scaled);
        }
        tracing::debug!(locations = edges.len(), "derived traffic-adjusted graph");
        DynamicGraph { edges }
    }
}
