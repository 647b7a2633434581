//! Historical traffic profiles and rule-based multiplier evaluation.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named time-of-day pattern with an applicability predicate.
///
/// A pattern applies when its hour set contains the query hour, its day set
/// (if present) contains the query day, and its affected-area set (if
/// present) contains the location's area. Patterns without a day set apply
/// on every day; patterns without an area set apply everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePattern {
    pub name: String,
    pub hours: HashSet<u8>,
    #[serde(default)]
    pub days: Option<HashSet<u8>>,
    #[serde(default)]
    pub areas: Option<HashSet<String>>,
    pub multiplier: f64,
}

impl TimePattern {
    pub fn applies(&self, area: &str, hour: u8, day: u8) -> bool {
        if !self.hours.contains(&hour) {
            return false;
        }
        if let Some(days) = &self.days {
            if !days.contains(&day) {
                return false;
            }
        }
        if let Some(areas) = &self.areas {
            if !areas.contains(area) {
                return false;
            }
        }
        true
    }
}

/// Historical traffic reference data.
///
/// Patterns are evaluated in list order and are not mutually exclusive:
/// every applicable pattern multiplies into the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficProfile {
    /// Base multiplier per area classification; unlisted areas default to 1.0.
    #[serde(default)]
    pub area_base: HashMap<String, f64>,
    #[serde(default)]
    pub patterns: Vec<TimePattern>,
    /// Multiplier per weather condition; unrecognized weather defaults to 1.0.
    #[serde(default)]
    pub weather: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrafficError {
    /// A base, pattern, or weather multiplier is negative or non-finite.
    InvalidMultiplier { name: String, value: f64 },
}

impl fmt::Display for TrafficError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrafficError::InvalidMultiplier { name, value } => {
                write!(f, "traffic multiplier for {:?} must be finite and >= 0, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for TrafficError {}

impl TrafficProfile {
    /// A profile with no areas, patterns, or weather impact: every
    /// multiplier evaluates to 1.0.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// The standard city profile: weekday rush hours around business areas,
    /// a night discount, a weekend discount, and weather impact.
    pub fn standard() -> Self {
        let business: HashSet<String> =
            ["business_district".to_string(), "commercial".to_string()].into();
        let mut evening_areas = business.clone();
        evening_areas.insert("residential".to_string());

        Self {
            area_base: HashMap::from([
                ("business_district".to_string(), 1.3),
                ("commercial".to_string(), 1.2),
                ("industrial".to_string(), 1.1),
                ("residential".to_string(), 1.0),
                ("suburban".to_string(), 0.9),
            ]),
            patterns: vec![
                TimePattern {
                    name: "morning_rush".to_string(),
                    hours: [7, 8, 9].into(),
                    days: None,
                    areas: Some(business),
                    multiplier: 1.8,
                },
                TimePattern {
                    name: "evening_rush".to_string(),
                    hours: [17, 18, 19].into(),
                    days: None,
                    areas: Some(evening_areas),
                    multiplier: 2.0,
                },
                TimePattern {
                    name: "night_minimal".to_string(),
                    hours: [22, 23, 0, 1, 2, 3, 4, 5].into(),
                    days: None,
                    areas: None,
                    multiplier: 0.6,
                },
                TimePattern {
                    name: "weekend_light".to_string(),
                    hours: (0..24).collect(),
                    days: Some([5, 6].into()),
                    areas: None,
                    multiplier: 0.8,
                },
            ],
            weather: HashMap::from([
                ("clear".to_string(), 1.0),
                ("rain".to_string(), 1.3),
                ("heavy_rain".to_string(), 1.7),
                ("fog".to_string(), 1.2),
            ]),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject negative or non-finite multipliers before the profile is used.
    pub fn validate(&self) -> Result<(), TrafficError> {
        for (area, &value) in &self.area_base {
            check_multiplier(area, value)?;
        }
        for pattern in &self.patterns {
            check_multiplier(&pattern.name, pattern.multiplier)?;
        }
        for (weather, &value) in &self.weather {
            check_multiplier(weather, value)?;
        }
        Ok(())
    }

    /// Combined multiplier for an area at the given hour, day, and weather.
    ///
    /// Composition: area base, then every applicable pattern in list order,
    /// then the weather factor.
    pub fn multiplier(&self, area: &str, hour: u8, day: u8, weather: &str) -> f64 {
        let mut result = self.area_base.get(area).copied().unwrap_or(1.0);
        for pattern in &self.patterns {
            if pattern.applies(area, hour, day) {
                result *= pattern.multiplier;
            }
        }
        result * self.weather.get(weather).copied().unwrap_or(1.0)
    }
}

fn check_multiplier(name: &str, value: f64) -> Result<(), TrafficError> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrafficError::InvalidMultiplier {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}
