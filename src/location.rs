//! Delivery location records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named delivery location.
///
/// Locations are loaded once at graph construction and referenced by name
/// everywhere else. Coordinates are validated eagerly at load time, not
/// during distance computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique location name.
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Category tag, e.g. "warehouse" or "retail".
    pub category: String,
    /// Area classification used by the traffic profile, e.g. "business_district".
    pub area: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    EmptyName,
    InvalidLatitude { name: String, value: f64 },
    InvalidLongitude { name: String, value: f64 },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::EmptyName => write!(f, "location name must not be empty"),
            LocationError::InvalidLatitude { name, value } => {
                write!(f, "location {:?} has invalid latitude {}", name, value)
            }
            LocationError::InvalidLongitude { name, value } => {
                write!(f, "location {:?} has invalid longitude {}", name, value)
            }
        }
    }
}

impl std::error::Error for LocationError {}

impl Location {
    pub fn new(
        name: impl Into<String>,
        lat: f64,
        lng: f64,
        category: impl Into<String>,
        area: impl Into<String>,
    ) -> Result<Self, LocationError> {
        let location = Self {
            name: name.into(),
            lat,
            lng,
            category: category.into(),
            area: area.into(),
        };
        location.validate()?;
        Ok(location)
    }

    /// Check name and coordinate ranges. Deserialized locations must be
    /// validated before they enter a graph.
    pub fn validate(&self) -> Result<(), LocationError> {
        if self.name.is_empty() {
            return Err(LocationError::EmptyName);
        }
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(LocationError::InvalidLatitude {
                name: self.name.clone(),
                value: self.lat,
            });
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(LocationError::InvalidLongitude {
                name: self.name.clone(),
                value: self.lng,
            });
        }
        Ok(())
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}
