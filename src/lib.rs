//! delivery-planner core
//!
//! Traffic-aware delivery route planning: a static great-circle distance
//! graph over named locations, traffic-adjusted per time/weather snapshot,
//! searched with Dijkstra, A*, nearest neighbor, and a genetic algorithm.

pub mod traits;
pub mod location;
pub mod traffic;
pub mod haversine;
pub mod graph;
pub mod search;
pub mod tour;
pub mod genetic;
pub mod estimate;
pub mod predictor;
pub mod geometry;
