//! Rule-based delivery-time estimation (fallback when no model is trained).
//!
//! Estimates travel time from distance at an assumed average speed plus a
//! fixed handling time per stop. Coarser than a trained model but always
//! available.

use crate::traits::{DeliveryEstimateRequest, DeliveryModel};

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Handling time added per stop.
const DEFAULT_MINUTES_PER_STOP: f64 = 5.0;

/// Every estimate is at least this many minutes.
const MINIMUM_MINUTES: f64 = 5.0;

/// Deterministic delivery-time estimator.
#[derive(Debug, Clone)]
pub struct HeuristicEstimator {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
    /// Handling minutes per stop.
    pub minutes_per_stop: f64,
}

impl Default for HeuristicEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            minutes_per_stop: DEFAULT_MINUTES_PER_STOP,
        }
    }
}

impl HeuristicEstimator {
    pub fn new(speed_kmh: f64, minutes_per_stop: f64) -> Self {
        Self {
            speed_kmh,
            minutes_per_stop,
        }
    }

    pub fn estimate(&self, request: &DeliveryEstimateRequest) -> f64 {
        let travel_minutes = request.distance_km / self.speed_kmh * 60.0;
        let stop_minutes = request.num_stops as f64 * self.minutes_per_stop;
        (travel_minutes + stop_minutes).max(MINIMUM_MINUTES)
    }
}

impl DeliveryModel for HeuristicEstimator {
    fn predict_minutes(&self, request: &DeliveryEstimateRequest) -> Option<f64> {
        Some(self.estimate(request))
    }
}

/// Ask the trained model first; estimate heuristically when it has no answer.
pub fn estimate_with_fallback(
    model: Option<&dyn DeliveryModel>,
    request: &DeliveryEstimateRequest,
) -> f64 {
    model
        .and_then(|m| m.predict_minutes(request))
        .unwrap_or_else(|| HeuristicEstimator::default().estimate(request))
}
