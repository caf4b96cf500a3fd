//! Great-circle distance between WGS84 coordinates.

use geo::Coord;

/// Earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points.
///
/// Coordinates follow the `x = longitude`, `y = latitude` convention, both in
/// degrees. The result is symmetric and zero for identical points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::haversine_km;
///
/// let marina_bay = Coord { x: 103.8607, y: 1.2834 };
/// let changi = Coord { x: 103.9915, y: 1.3644 };
/// let km = haversine_km(marina_bay, changi);
/// assert!((km - 17.1).abs() < 0.1);
/// ```
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let phi1 = from.y.to_radians();
    let phi2 = to.y.to_radians();
    let delta_phi = (to.y - from.y).to_radians();
    let delta_lambda = (to.x - from.x).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
