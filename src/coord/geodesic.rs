use super::Coordinate;
use geographiclib_rs::{Geodesic, InverseGeodesic};
use std::sync::LazyLock;

// Every bearing in the process goes through this one ellipsoid, otherwise
// neighbor ordering could differ between calls.
static WGS84: LazyLock<Geodesic> = LazyLock::new(Geodesic::wgs84);

/// Folds any angle in degrees into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let folded = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if folded >= 360.0 { 0.0 } else { folded }
}

/// Solves the inverse geodesic problem between two lon/lat coordinates.
///
/// Returns `(bearing, distance)`: the forward azimuth at `from` in degrees
/// [0, 360) and the geodesic length in meters.
pub fn inverse(from: &impl Coordinate, to: &impl Coordinate) -> (f64, f64) {
    let (s12, azi1, _azi2, _a12): (f64, f64, f64, f64) =
        WGS84.inverse(from.y(), from.x(), to.y(), to.x());
    (normalize_degrees(azi1), s12)
}
