//! Great-circle distance helpers.
//!
//! The static distance graph uses the full haversine formula. The A*
//! heuristic uses a cheaper degree-scaled planar approximation instead.

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rough kilometers per degree of latitude/longitude.
const KM_PER_DEGREE: f64 = 111.0;

/// Calculate haversine distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Planar straight-line distance in degrees scaled to approximate kilometers.
///
/// Cheap proxy for [`haversine_km`] used as the A* priority heuristic. Not a
/// guaranteed lower bound once edge weights are scaled by multipliers below
/// 1.0.
pub fn planar_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    ((lat2 - lat1).powi(2) + (lng2 - lng1).powi(2)).sqrt() * KM_PER_DEGREE
}
