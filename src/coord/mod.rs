mod geodesic;

pub use geodesic::{inverse, normalize_degrees};

use crate::cell::Cell;
use crate::error::HexmapError;
use geo_types::Point;
use h3o::LatLng;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>` and [`GeoPoint`].
/// This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for GeoPoint {
    fn x(&self) -> f64 {
        self.longitude
    }
    fn y(&self) -> f64 {
        self.latitude
    }
}

/// A validated WGS84 longitude/latitude pair.
///
/// # Example
///
/// ```
/// use hexmap_rs::GeoPoint;
///
/// # fn main() -> Result<(), hexmap_rs::HexmapError> {
/// let manchester = GeoPoint::new(-2.248, 53.481)?;
/// assert_eq!(manchester.longitude(), -2.248);
///
/// assert!(GeoPoint::new(181.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting longitudes outside [-180, 180] and
    /// latitudes outside [-90, 90] (NaN included).
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, HexmapError> {
        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return Err(HexmapError::InvalidCoordinate {
                longitude,
                latitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn from_coordinate(coord: &impl Coordinate) -> Result<Self, HexmapError> {
        Self::new(coord.x(), coord.y())
    }

    // h3o only hands out normalized coordinates.
    pub(crate) fn from_latlng(ll: LatLng) -> Self {
        Self {
            longitude: ll.lng(),
            latitude: ll.lat(),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the cell containing this point at the given resolution.
    pub fn to_cell(&self, resolution: u8) -> Result<Cell, HexmapError> {
        Cell::from_point(self, resolution)
    }

    /// Forward azimuth in degrees [0, 360) along the WGS84 geodesic.
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        inverse(self, other).0
    }

    /// Geodesic distance in meters on the WGS84 ellipsoid.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        inverse(self, other).1
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude, point.latitude)
    }
}
