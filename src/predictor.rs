//! HTTP adapter for a remote prediction service.
//!
//! Implements both model seams against the prediction API's
//! `/api/predict-traffic` and `/api/estimate-delivery` endpoints. Any
//! transport or decode failure degrades to `None` so callers fall back to
//! the rule-based alternatives.

use serde::Deserialize;
use serde_json::json;

use crate::traits::{DeliveryEstimateRequest, DeliveryModel, TrafficModel};

/// Range trained traffic models are clamped to.
const MULTIPLIER_RANGE: (f64, f64) = (0.5, 3.0);

#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PredictorClient {
    config: PredictorConfig,
    client: reqwest::blocking::Client,
}

impl PredictorClient {
    pub fn new(config: PredictorConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Option<T> {
        let url = format!("{}{}", self.config.base_url, path);
        self.client
            .post(url)
            .json(body)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>())
            .ok()
    }
}

impl TrafficModel for PredictorClient {
    fn predict_multiplier(&self, location: &str, hour: u8, day: u8, weather: &str) -> Option<f64> {
        let body = json!({
            "location": location,
            "hour": hour,
            "day": day,
            "weather": weather,
        });
        self.post_json::<TrafficPrediction>("/api/predict-traffic", &body)
            .map(|prediction| clamp_multiplier(prediction.multiplier))
    }
}

impl DeliveryModel for PredictorClient {
    fn predict_minutes(&self, request: &DeliveryEstimateRequest) -> Option<f64> {
        let body = json!({
            "distance_km": request.distance_km,
            "num_stops": request.num_stops,
            "hour": request.hour,
            "day": request.day,
            "package_size": request.package_size,
            "weather": request.weather,
        });
        self.post_json::<DeliveryPrediction>("/api/estimate-delivery", &body)
            .map(|prediction| prediction.estimated_minutes)
    }
}

fn clamp_multiplier(value: f64) -> f64 {
    value.clamp(MULTIPLIER_RANGE.0, MULTIPLIER_RANGE.1)
}

#[derive(Debug, Deserialize)]
struct TrafficPrediction {
    multiplier: f64,
}

#[derive(Debug, Deserialize)]
struct DeliveryPrediction {
    estimated_minutes: f64,
}
