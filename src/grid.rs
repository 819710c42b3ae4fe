use crate::cell::Cell;
use crate::coord::GeoPoint;
use crate::error::HexmapError;
use geo::BoundingRect;
use geo_types::{MultiPolygon, Polygon, Rect};
use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, warn};

/// Offset-grid step for each clockwise neighbor position.
///
/// Rows shift horizontally by half a cell, so the column step depends on the
/// parity of the row being stepped from.
const SHIFT_J: [i64; 6] = [1, 0, -1, -1, 0, 1];
const SHIFT_I_EVEN: [i64; 6] = [0, 1, 0, -1, -1, -1];
const SHIFT_I_ODD: [i64; 6] = [1, 1, 1, 0, -1, 0];

/// A cell placed in a [`Grid`] at offset coordinates `(i, j)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    cell: Cell,
    key: i64,
    coordinates: (i64, i64),
}

impl GridCell {
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn coordinates(&self) -> (i64, i64) {
        self.coordinates
    }

    /// Column index.
    pub fn i(&self) -> i64 {
        self.coordinates.0
    }

    /// Row index.
    pub fn j(&self) -> i64 {
        self.coordinates.1
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.cell.boundary_polygon()
    }
}

/// A bounded `width x height` offset grid of H3 cells grown from a seed.
///
/// Keys are `i + width * j`. Expansion replaces the whole mapping; there is
/// no other way to mutate it.
///
/// # Example
///
/// ```
/// use hexmap_rs::{Cell, Grid};
///
/// # fn main() -> Result<(), hexmap_rs::HexmapError> {
/// let seed = Cell::from_wgs84(&(-2.248, 53.481), 8)?;
/// let mut grid = Grid::new(5, 5, 0.0)?;
/// grid.expand(seed)?;
///
/// assert_eq!(grid.get(12)?.cell(), &seed);
/// assert_eq!(grid.get_at(2, 2)?.key(), 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    height: i64,
    width: i64,
    bearing: f64,
    cells: IndexMap<i64, GridCell>,
}

impl Grid {
    /// Creates an empty grid. Fails unless both dimensions are positive and
    /// every key `i + width * j` fits in an `i64`.
    pub fn new(height: i64, width: i64, bearing: f64) -> Result<Self, HexmapError> {
        if height <= 0 || width <= 0 || width.checked_mul(height).is_none() {
            return Err(HexmapError::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            bearing,
            cells: IndexMap::new(),
        })
    }

    pub fn builder() -> GridBuilder {
        GridBuilder::new()
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    /// Reference bearing that neighbor position 0 is measured from.
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Where the seed cell lands: `(width / 2, height / 2)`.
    pub fn center_coordinates(&self) -> (i64, i64) {
        (self.width / 2, self.height / 2)
    }

    pub fn coordinates_to_key(&self, i: i64, j: i64) -> i64 {
        i + self.width * j
    }

    pub fn key_to_coordinates(&self, key: i64) -> (i64, i64) {
        (key.rem_euclid(self.width), key.div_euclid(self.width))
    }

    fn in_bounds(&self, i: i64, j: i64) -> bool {
        (0..self.width).contains(&i) && (0..self.height).contains(&j)
    }

    pub fn get(&self, key: i64) -> Result<&GridCell, HexmapError> {
        self.cells.get(&key).ok_or(HexmapError::NotFound(key))
    }

    /// Lookup by offset coordinates. Anything outside the bounds is
    /// [`HexmapError::NotFound`].
    pub fn get_at(&self, i: i64, j: i64) -> Result<&GridCell, HexmapError> {
        if !self.in_bounds(i, j) {
            return Err(HexmapError::NotFound(
                i.saturating_add(self.width.saturating_mul(j)),
            ));
        }
        self.get(self.coordinates_to_key(i, j))
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.cells.contains_key(&key)
    }

    /// Reverse lookup of the slot a cell was placed in.
    pub fn find_cell(&self, cell: &Cell) -> Option<&GridCell> {
        self.cells.values().find(|grid_cell| grid_cell.cell == *cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored keys in expansion (breadth-first) order.
    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.cells.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.values()
    }

    /// Breadth-first expansion from `seed`, replacing any previous contents.
    ///
    /// The seed is placed at [`Grid::center_coordinates`]. Each dequeued cell
    /// is stored, then its clockwise-ordered neighbors are mapped to offset
    /// coordinates through the shift table and enqueued in position order when
    /// they fall inside the bounds. Neighbors are marked visited before the
    /// bounds check, so a cell first reached from outside the rectangle is
    /// never stored.
    ///
    /// Reaching a pentagon aborts with [`HexmapError::PentagonInGrid`] and
    /// leaves the grid empty.
    pub fn expand(&mut self, seed: Cell) -> Result<&mut Self, HexmapError> {
        self.cells.clear();
        debug!(
            seed = %seed.index(),
            height = self.height,
            width = self.width,
            bearing = self.bearing,
            "expanding grid"
        );

        if let Err(e) = self.expand_inner(seed) {
            self.cells.clear();
            return Err(e);
        }

        debug!(cells = self.cells.len(), "grid expanded");
        Ok(self)
    }

    fn expand_inner(&mut self, seed: Cell) -> Result<(), HexmapError> {
        let mut queue: VecDeque<((i64, i64), Cell)> = VecDeque::new();
        let mut visited: HashSet<Cell> = HashSet::new();
        queue.push_back((self.center_coordinates(), seed));
        visited.insert(seed);

        while let Some((coordinates, cell)) = queue.pop_front() {
            if cell.is_pentagon() {
                warn!(cell = %cell.index(), "pentagon reached during grid expansion");
                return Err(HexmapError::PentagonInGrid(cell.id()));
            }

            let (i, j) = coordinates;
            let key = self.coordinates_to_key(i, j);
            self.cells.insert(
                key,
                GridCell {
                    cell,
                    key,
                    coordinates,
                },
            );

            let shift_i = if j.rem_euclid(2) == 0 {
                &SHIFT_I_EVEN
            } else {
                &SHIFT_I_ODD
            };
            for neighbor in &cell.neighbor_map(self.bearing) {
                if !visited.insert(*neighbor.cell()) {
                    continue;
                }
                let position = neighbor.position();
                let neighbor_i = i + shift_i[position];
                let neighbor_j = j + SHIFT_J[position];
                if self.in_bounds(neighbor_i, neighbor_j) {
                    queue.push_back(((neighbor_i, neighbor_j), *neighbor.cell()));
                }
            }
        }
        Ok(())
    }

    /// Expands from the cell containing `point` at `resolution`.
    pub fn expand_from_point(
        &mut self,
        point: &GeoPoint,
        resolution: u8,
    ) -> Result<&mut Self, HexmapError> {
        let seed = Cell::from_point(point, resolution)?;
        self.expand(seed)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.values().map(GridCell::to_polygon).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&GridCell>
    where
        F: Fn(&GridCell) -> bool,
    {
        self.cells.values().filter(|cell| predicate(cell)).collect()
    }

    /// Lon/lat bounding box of every stored cell footprint.
    ///
    /// `None` for an empty grid.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        MultiPolygon::new(self.to_polygons()).bounding_rect()
    }
}

/// Builder for [`Grid`].
///
/// Height and width are required; bearing defaults to 0 (north).
#[derive(Debug, Default)]
pub struct GridBuilder {
    height: Option<i64>,
    width: Option<i64>,
    bearing: f64,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: i64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn width(mut self, width: i64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }

    /// Builds an empty grid.
    pub fn build(self) -> Result<Grid, HexmapError> {
        Grid::new(
            self.height.unwrap_or(0),
            self.width.unwrap_or(0),
            self.bearing,
        )
    }

    /// Builds and expands from `seed`.
    pub fn build_from_cell(self, seed: Cell) -> Result<Grid, HexmapError> {
        let mut grid = self.build()?;
        grid.expand(seed)?;
        Ok(grid)
    }

    /// Builds and expands from the cell containing `point`.
    pub fn build_from_point(self, point: &GeoPoint, resolution: u8) -> Result<Grid, HexmapError> {
        let mut grid = self.build()?;
        grid.expand_from_point(point, resolution)?;
        Ok(grid)
    }
}
