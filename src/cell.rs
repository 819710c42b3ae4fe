use crate::coord::{Coordinate, GeoPoint, inverse};
use crate::error::HexmapError;
use crate::neighbor::{NeighborMap, order_neighbors};
use crate::walk::{RandomWalk, Select, StraightWalk, Walker};
use geo_types::{Coord, LineString, Polygon};
use h3o::{CellIndex, LatLng, Resolution};
use rand::rngs::ThreadRng;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A single cell of the H3 global hexagonal index.
///
/// Two cells are equal when their indices are equal, however they were
/// derived. The center point is computed once at construction.
///
/// # Example
///
/// ```
/// use hexmap_rs::{Cell, GeoPoint};
///
/// # fn main() -> Result<(), hexmap_rs::HexmapError> {
/// let point = GeoPoint::new(-2.248, 53.481)?;
/// let cell = Cell::from_point(&point, 7)?;
/// println!("Cell ID: {}", cell.index());
///
/// let restored = Cell::try_from(cell.id())?;
/// assert_eq!(cell, restored);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    index: CellIndex,
    center: GeoPoint,
}

impl Cell {
    pub fn from_index(index: CellIndex) -> Self {
        Self {
            index,
            center: GeoPoint::from_latlng(LatLng::from(index)),
        }
    }

    /// Create a Cell from the cell containing `point` at `resolution` (0-15).
    pub fn from_point(point: &GeoPoint, resolution: u8) -> Result<Self, HexmapError> {
        let resolution = Resolution::try_from(resolution)
            .map_err(|_| HexmapError::InvalidResolution(resolution))?;
        let latlng = LatLng::new(point.latitude(), point.longitude()).map_err(|_| {
            HexmapError::InvalidCoordinate {
                longitude: point.longitude(),
                latitude: point.latitude(),
            }
        })?;
        Ok(Self::from_index(latlng.to_cell(resolution)))
    }

    /// Create a Cell from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use hexmap_rs::Cell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), hexmap_rs::HexmapError> {
    /// // From tuple
    /// let cell = Cell::from_wgs84(&(-2.248, 53.481), 9)?;
    /// // From Point
    /// let same = Cell::from_wgs84(&Point::new(-2.248, 53.481), 9)?;
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, resolution: u8) -> Result<Self, HexmapError> {
        let point = GeoPoint::from_coordinate(coord)?;
        Self::from_point(&point, resolution)
    }

    /// Create a Cell from an H3 hexadecimal string such as `"8a194ad32a77fff"`.
    pub fn from_hex_id(id: &str) -> Result<Self, HexmapError> {
        let index = CellIndex::from_str(id)
            .map_err(|e| HexmapError::InvalidCellIndex(e.to_string()))?;
        Ok(Self::from_index(index))
    }

    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// Raw 64-bit H3 identifier.
    pub fn id(&self) -> u64 {
        u64::from(self.index)
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn resolution(&self) -> u8 {
        u8::from(self.index.resolution())
    }

    /// True for the twelve cells per resolution that have five neighbors.
    pub fn is_pentagon(&self) -> bool {
        self.index.is_pentagon()
    }

    /// Forward geodesic bearing in degrees [0, 360) from this cell's center
    /// to `other`'s center.
    pub fn bearing_to(&self, other: &Cell) -> f64 {
        inverse(&self.center, &other.center).0
    }

    /// Geodesic distance in meters between the two cell centers.
    pub fn distance_to(&self, other: &Cell) -> f64 {
        inverse(&self.center, &other.center).1
    }

    /// The cells at grid distance 1, in no particular order.
    ///
    /// Holds six cells, or five around a pentagon.
    pub fn neighbor_ring(&self) -> Vec<Cell> {
        self.index
            .grid_disk::<Vec<_>>(1)
            .into_iter()
            .filter(|index| *index != self.index)
            .map(Cell::from_index)
            .collect()
    }

    /// The neighbor ring ordered clockwise from `bearing`.
    pub fn neighbor_map(&self, bearing: f64) -> NeighborMap {
        order_neighbors(self, bearing)
    }

    /// Closed boundary ring of the cell footprint.
    pub fn boundary_points(&self) -> Vec<GeoPoint> {
        let boundary = self.index.boundary();
        let mut points: Vec<GeoPoint> = boundary
            .iter()
            .map(|ll| GeoPoint::from_latlng(*ll))
            .collect();
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        points
    }

    /// Converts this cell's footprint to a lon/lat polygon.
    ///
    /// Suitable for spatial operations or GeoJSON export.
    pub fn boundary_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .boundary_points()
            .iter()
            .map(|p| Coord {
                x: p.longitude(),
                y: p.latitude(),
            })
            .collect();
        Polygon::new(LineString::from(coords), vec![])
    }

    /// Starts a lazy walk from this cell driven by `select`.
    ///
    /// `max_steps = None` walks forever.
    pub fn walk<S: Select>(&self, select: S, bearing: f64, max_steps: Option<usize>) -> Walker<S> {
        Walker::new(*self, select, bearing, max_steps)
    }

    /// Walk that picks a uniformly random neighbor at every step.
    pub fn random_walk(&self, max_steps: Option<usize>) -> Walker<RandomWalk<ThreadRng>> {
        self.walk(RandomWalk::new(), 0.0, max_steps)
    }

    /// Walk that always takes the neighbor at position 0 relative to `bearing`.
    pub fn straight_walk(&self, bearing: f64, max_steps: Option<usize>) -> Walker<StraightWalk> {
        self.walk(StraightWalk, bearing, max_steps)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl From<CellIndex> for Cell {
    fn from(index: CellIndex) -> Self {
        Self::from_index(index)
    }
}

impl TryFrom<u64> for Cell {
    type Error = HexmapError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        let index =
            CellIndex::try_from(id).map_err(|e| HexmapError::InvalidCellIndex(e.to_string()))?;
        Ok(Self::from_index(index))
    }
}
