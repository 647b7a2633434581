//! Collaborator seams for trained prediction models.
//!
//! The planner core only needs two numbers from the ML side: a traffic
//! multiplier per location and a delivery-duration estimate per route.
//! Concrete apps plug in their own model clients behind these traits.

use serde::{Deserialize, Serialize};

/// Trained traffic-multiplier model.
///
/// Returns `None` when no model is available; callers then fall back to the
/// rule-based profile multiplier. Trained collaborators clamp their output
/// to [0.5, 3.0]; the core does not enforce that range.
pub trait TrafficModel {
    fn predict_multiplier(&self, location: &str, hour: u8, day: u8, weather: &str) -> Option<f64>;
}

/// Trained delivery-duration model.
///
/// Called after a route and its distance are produced; the estimate never
/// influences route selection. Returns `None` when no model is available.
pub trait DeliveryModel {
    fn predict_minutes(&self, request: &DeliveryEstimateRequest) -> Option<f64>;
}

/// Package size class, affecting per-stop handling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageSize {
    Small,
    Medium,
    Large,
}

impl Default for PackageSize {
    fn default() -> Self {
        PackageSize::Medium
    }
}

/// Inputs to a delivery-duration estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryEstimateRequest {
    pub distance_km: f64,
    pub num_stops: usize,
    pub hour: u8,
    pub day: u8,
    #[serde(default)]
    pub package_size: PackageSize,
    pub weather: String,
}
