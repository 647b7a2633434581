//! Graph builder tests
//!
//! Static graph construction, eager validation, multiplier rules, and
//! dynamic graph derivation.

mod fixtures;

use delivery_planner::graph::{GraphBuilder, GraphError};
use delivery_planner::location::{Location, LocationError};
use delivery_planner::traffic::TrafficProfile;
use delivery_planner::traits::TrafficModel;

use fixtures::hyderabad_locations as city;

fn loc(name: &str, lat: f64, lng: f64, area: &str) -> Location {
    Location::new(name, lat, lng, "retail", area).unwrap()
}

// ============================================================================
// Static Graph Construction
// ============================================================================

#[test]
fn test_static_graph_is_complete() {
    let builder = city::city_builder();
    let graph = builder.static_graph();
    let names: Vec<&str> = graph.locations().collect();
    assert_eq!(graph.len(), city::SPOTS.len());

    for from in &names {
        for to in &names {
            if from == to {
                assert_eq!(graph.weight(from, to), None, "no self edges");
            } else {
                let weight = graph.weight(from, to).expect("complete graph");
                assert!(weight > 0.0, "distances are positive");
            }
        }
    }
}

#[test]
fn test_static_distances_are_symmetric() {
    let builder = city::city_builder();
    let graph = builder.static_graph();
    let a = graph.weight("Charminar", "Hitec City").unwrap();
    let b = graph.weight("Hitec City", "Charminar").unwrap();
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn test_static_distance_plausible() {
    // Charminar to Hitec City is roughly 14 km across the city.
    let builder = city::city_builder();
    let distance = builder
        .static_graph()
        .weight("Charminar", "Hitec City")
        .unwrap();
    assert!(distance > 11.0 && distance < 17.0, "got {} km", distance);
}

// ============================================================================
// Eager Validation
// ============================================================================

#[test]
fn test_rejects_out_of_range_coordinates_at_load() {
    let result = GraphBuilder::new(
        vec![loc("bad", 95.0, 78.0, "commercial")],
        TrafficProfile::neutral(),
    );
    assert!(matches!(
        result,
        Err(GraphError::Location(LocationError::InvalidLatitude { .. }))
    ));
}

#[test]
fn test_rejects_nan_coordinates_at_load() {
    let result = GraphBuilder::new(
        vec![loc("bad", 17.0, f64::NAN, "commercial")],
        TrafficProfile::neutral(),
    );
    assert!(matches!(
        result,
        Err(GraphError::Location(LocationError::InvalidLongitude { .. }))
    ));
}

#[test]
fn test_rejects_duplicate_location_names() {
    let result = GraphBuilder::new(
        vec![
            loc("Depot", 17.40, 78.48, "industrial"),
            loc("Depot", 17.41, 78.49, "industrial"),
        ],
        TrafficProfile::neutral(),
    );
    assert!(matches!(result, Err(GraphError::DuplicateLocation(name)) if name == "Depot"));
}

#[test]
fn test_rejects_invalid_profile_multiplier() {
    let mut profile = TrafficProfile::neutral();
    profile.weather.insert("rain".to_string(), -1.0);
    let result = GraphBuilder::new(vec![loc("Depot", 17.40, 78.48, "industrial")], profile);
    assert!(matches!(result, Err(GraphError::Traffic(_))));
}

// ============================================================================
// Traffic Multipliers
// ============================================================================

#[test]
fn test_multiplier_reflects_area_and_hour() {
    let builder = city::city_builder();
    // Morning rush hits business districts, not suburbs.
    let hitec = builder.traffic_multiplier("Hitec City", 8, 2, "clear");
    let uppal = builder.traffic_multiplier("Uppal", 8, 2, "clear");
    assert!((hitec - 1.3 * 1.8).abs() < 1e-9);
    assert!((uppal - 0.9).abs() < 1e-9);
}

#[test]
fn test_multiplier_unknown_location_uses_unrestricted_patterns() {
    let builder = city::city_builder();
    // Unknown names have no area: base 1.0, area-restricted patterns skip,
    // but the night discount still applies.
    let night = builder.traffic_multiplier("nowhere", 23, 2, "clear");
    assert!((night - 0.6).abs() < 1e-9);
}

#[test]
fn test_multiplier_composes_weather() {
    let builder = city::city_builder();
    let dry = builder.traffic_multiplier("Charminar", 12, 2, "clear");
    let wet = builder.traffic_multiplier("Charminar", 12, 2, "heavy_rain");
    assert!((wet - dry * 1.7).abs() < 1e-9);
}

// ============================================================================
// Dynamic Graph Derivation
// ============================================================================

#[test]
fn test_dynamic_adjustment_is_asymmetric() {
    let mut profile = TrafficProfile::neutral();
    profile.area_base.insert("busy".to_string(), 2.0);

    let builder = GraphBuilder::new(
        vec![
            loc("A", 17.40, 78.40, "calm"),
            loc("B", 17.45, 78.45, "busy"),
        ],
        profile,
    )
    .unwrap();

    let static_ab = builder.static_graph().weight("A", "B").unwrap();
    let dynamic = builder.dynamic_graph(12, 2, "clear");

    // Each edge is scaled by its *source's* multiplier.
    assert!((dynamic.weight("A", "B").unwrap() - static_ab).abs() < 1e-9);
    assert!((dynamic.weight("B", "A").unwrap() - 2.0 * static_ab).abs() < 1e-9);
}

#[test]
fn test_dynamic_graph_is_idempotent() {
    let builder = city::city_builder();
    let first = builder.dynamic_graph(18, 4, "rain");
    let second = builder.dynamic_graph(18, 4, "rain");
    assert_eq!(first, second);
}

#[test]
fn test_rush_hour_raises_business_district_edges() {
    let builder = city::city_builder();
    let midnight = builder.dynamic_graph(2, 2, "clear");
    let rush = builder.dynamic_graph(8, 2, "clear");
    let calm = midnight.weight("Hitec City", "Charminar").unwrap();
    let busy = rush.weight("Hitec City", "Charminar").unwrap();
    assert!(busy > calm);
}

#[test]
fn test_dynamic_graph_with_model_prefers_predictions() {
    struct OnlyHitec;
    impl TrafficModel for OnlyHitec {
        fn predict_multiplier(
            &self,
            location: &str,
            _hour: u8,
            _day: u8,
            _weather: &str,
        ) -> Option<f64> {
            (location == "Hitec City").then_some(2.5)
        }
    }

    let builder = city::city_builder();
    let rules = builder.dynamic_graph(12, 2, "clear");
    let mixed = builder.dynamic_graph_with(&OnlyHitec, 12, 2, "clear");

    let static_weight = builder
        .static_graph()
        .weight("Hitec City", "Charminar")
        .unwrap();
    assert!((mixed.weight("Hitec City", "Charminar").unwrap() - 2.5 * static_weight).abs() < 1e-9);

    // Every other source falls back to the rule-based multiplier.
    assert_eq!(
        mixed.weight("Charminar", "Uppal"),
        rules.weight("Charminar", "Uppal")
    );
}
