//! Per-step coordinates for a computed route.
//!
//! Responses carry the route both as location names and as decoded
//! (latitude, longitude) points for map rendering. Encoding to a compact
//! polyline format, if needed, happens at API boundaries, not here.

use serde::{Deserialize, Serialize};

use crate::graph::GraphBuilder;

/// A route geometry as decoded coordinate points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    points: Vec<(f64, f64)>,
}

impl RouteGeometry {
    /// Creates a geometry from decoded (latitude, longitude) points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Look up the coordinates of every step of a route. Names not present
    /// in the builder are skipped.
    pub fn for_route(route: &[String], builder: &GraphBuilder) -> Self {
        let points = route
            .iter()
            .filter_map(|name| builder.location(name))
            .map(|location| location.coords())
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}
