//! Real Hyderabad locations for realistic test fixtures.
//!
//! Coordinates are approximate city landmarks; areas use the
//! classifications the standard traffic profile knows about.

use delivery_planner::graph::GraphBuilder;
use delivery_planner::location::Location;
use delivery_planner::traffic::TrafficProfile;

/// A named fixture location with coordinates and classification.
pub struct Spot {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub category: &'static str,
    pub area: &'static str,
}

impl Spot {
    const fn new(
        name: &'static str,
        lat: f64,
        lng: f64,
        category: &'static str,
        area: &'static str,
    ) -> Self {
        Self {
            name,
            lat,
            lng,
            category,
            area,
        }
    }
}

pub const SPOTS: &[Spot] = &[
    Spot::new("Central Warehouse", 17.4504, 78.5006, "depot", "industrial"),
    Spot::new("Charminar", 17.3616, 78.4747, "retail", "commercial"),
    Spot::new("Koti", 17.3825, 78.4800, "retail", "commercial"),
    Spot::new("Begumpet", 17.4440, 78.4663, "retail", "commercial"),
    Spot::new("Ameerpet", 17.4375, 78.4483, "retail", "commercial"),
    Spot::new("Hitec City", 17.4435, 78.3772, "retail", "business_district"),
    Spot::new("Madhapur", 17.4483, 78.3915, "retail", "business_district"),
    Spot::new("Gachibowli", 17.4401, 78.3489, "retail", "business_district"),
    Spot::new("Banjara Hills", 17.4156, 78.4347, "retail", "residential"),
    Spot::new("Jubilee Hills", 17.4325, 78.4073, "retail", "residential"),
    Spot::new("Kukatpally", 17.4849, 78.4138, "retail", "suburban"),
    Spot::new("Uppal", 17.4056, 78.5591, "retail", "suburban"),
    Spot::new("LB Nagar", 17.3476, 78.5490, "retail", "suburban"),
];

/// All fixture locations as validated [`Location`] values.
#[allow(dead_code)]
pub fn locations() -> Vec<Location> {
    SPOTS
        .iter()
        .map(|spot| {
            Location::new(spot.name, spot.lat, spot.lng, spot.category, spot.area)
                .expect("fixture coordinates are valid")
        })
        .collect()
}

/// A graph builder over the fixture city with the standard traffic profile.
#[allow(dead_code)]
pub fn city_builder() -> GraphBuilder {
    GraphBuilder::new(locations(), TrafficProfile::standard()).expect("fixture city is valid")
}
