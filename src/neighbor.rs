//! Clock-like ordering of a cell's neighbor ring.
//!
//! Position 0 is the neighbor whose bearing sits at, or just clockwise of,
//! the reference bearing; positions increase clockwise. Grid expansion and
//! directional walks both index neighbors through this ordering.

use crate::cell::Cell;
use crate::coord::normalize_degrees;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// A neighboring cell tagged with its clockwise position and angle.
///
/// Equality and hashing only look at the cell.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    cell: Cell,
    position: usize,
    angle: f64,
}

impl Neighbor {
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    /// Clockwise slot, 0-5 (0-4 around a pentagon).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bearing from the origin cell relative to the reference bearing, [0, 360).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn into_cell(self) -> Cell {
        self.cell
    }
}

impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell
    }
}

impl Eq for Neighbor {}

impl Hash for Neighbor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cell.hash(state);
    }
}

/// Neighbors of one cell indexed by clockwise position.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborMap {
    neighbors: Vec<Neighbor>,
}

impl NeighborMap {
    pub fn get(&self, position: usize) -> Option<&Neighbor> {
        self.neighbors.get(position)
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterates in position order 0..N-1.
    pub fn iter(&self) -> impl Iterator<Item = &Neighbor> {
        self.neighbors.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().map(Neighbor::position)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.neighbors.iter().map(Neighbor::cell)
    }
}

impl Index<usize> for NeighborMap {
    type Output = Neighbor;

    fn index(&self, position: usize) -> &Self::Output {
        &self.neighbors[position]
    }
}

impl<'a> IntoIterator for &'a NeighborMap {
    type Item = &'a Neighbor;
    type IntoIter = std::slice::Iter<'a, Neighbor>;

    fn into_iter(self) -> Self::IntoIter {
        self.neighbors.iter()
    }
}

/// Orders the neighbor ring of `cell` clockwise from `reference_bearing`.
///
/// Each neighbor's angle is `(bearing_to(neighbor) - reference_bearing) mod 360`;
/// neighbors are sorted ascending by angle and numbered 0..N-1, with N = 5
/// for pentagons and 6 otherwise. Ties keep the ring order, so the result is
/// deterministic for a given cell and bearing.
///
/// # Example
///
/// ```
/// use hexmap_rs::{Cell, order_neighbors};
///
/// # fn main() -> Result<(), hexmap_rs::HexmapError> {
/// let cell = Cell::from_wgs84(&(-2.248, 53.481), 9)?;
/// let neighbors = order_neighbors(&cell, 90.0);
///
/// assert_eq!(neighbors.len(), 6);
/// assert_eq!(neighbors[0].position(), 0);
/// # Ok(())
/// # }
/// ```
pub fn order_neighbors(cell: &Cell, reference_bearing: f64) -> NeighborMap {
    let mut angled: Vec<(f64, Cell)> = cell
        .neighbor_ring()
        .into_iter()
        .map(|n| (normalize_degrees(cell.bearing_to(&n) - reference_bearing), n))
        .collect();
    angled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let neighbors = angled
        .into_iter()
        .enumerate()
        .map(|(position, (angle, cell))| Neighbor {
            cell,
            position,
            angle,
        })
        .collect();

    NeighborMap { neighbors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HexmapError;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn assert_well_ordered(neighbors: &NeighborMap) {
        for (expected, neighbor) in neighbors.iter().enumerate() {
            assert_eq!(neighbor.position(), expected);
            assert!((0.0..360.0).contains(&neighbor.angle()));
        }
        for pair in neighbors.neighbors.windows(2) {
            assert!(pair[0].angle() < pair[1].angle());
        }
    }

    #[test]
    fn test_hexagon_has_six_positions() -> Result<(), HexmapError> {
        let cell = Cell::from_wgs84(&(-2.248, 53.481), 9)?;
        let neighbors = order_neighbors(&cell, 0.0);

        assert_eq!(neighbors.len(), 6);
        assert_eq!(neighbors.positions().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        assert_well_ordered(&neighbors);
        Ok(())
    }

    #[test]
    fn test_pentagon_has_five_positions() -> Result<(), HexmapError> {
        let pentagon = Cell::try_from(0x8009fffffffffffu64)?;
        let neighbors = order_neighbors(&pentagon, 0.0);

        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.get(5).is_none());
        assert_well_ordered(&neighbors);
        Ok(())
    }

    #[test]
    fn test_same_cells_as_ring() -> Result<(), HexmapError> {
        let cell = Cell::from_wgs84(&(151.2, -33.87), 6)?;
        let ordered: HashSet<Cell> = cell.neighbor_map(45.0).cells().copied().collect();
        let ring: HashSet<Cell> = cell.neighbor_ring().into_iter().collect();
        assert_eq!(ordered, ring);
        Ok(())
    }

    #[test]
    fn test_angle_is_relative_to_reference() -> Result<(), HexmapError> {
        let cell = Cell::from_wgs84(&(-2.248, 53.481), 9)?;
        let reference = 123.0;
        for neighbor in &order_neighbors(&cell, reference) {
            let expected = normalize_degrees(cell.bearing_to(neighbor.cell()) - reference);
            assert!((neighbor.angle() - expected).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_rotating_reference_rotates_positions() -> Result<(), HexmapError> {
        let cell = Cell::from_wgs84(&(-2.248, 53.481), 9)?;
        let north = order_neighbors(&cell, 0.0);
        // Starting just past position 1 makes it the new position 0
        let rotated = order_neighbors(&cell, north[1].angle());

        assert_eq!(rotated[0].cell(), north[1].cell());
        assert_eq!(rotated[5].cell(), north[0].cell());
        Ok(())
    }

    #[test]
    fn test_neighbor_equality_ignores_position() -> Result<(), HexmapError> {
        let cell = Cell::from_wgs84(&(-2.248, 53.481), 9)?;
        let a = order_neighbors(&cell, 0.0);
        let b = order_neighbors(&cell, 180.0);

        let a_set: HashSet<Neighbor> = a.iter().copied().collect();
        let b_set: HashSet<Neighbor> = b.iter().copied().collect();
        assert_eq!(a_set, b_set);
        Ok(())
    }

    proptest! {
        #[test]
        fn ordering_is_deterministic(
            lon in -179.0f64..179.0,
            lat in -80.0f64..80.0,
            bearing in 0.0f64..360.0,
            resolution in 1u8..10,
        ) {
            let cell = Cell::from_wgs84(&(lon, lat), resolution).unwrap();
            let first = order_neighbors(&cell, bearing);
            let second = order_neighbors(&cell, bearing);

            prop_assert_eq!(&first, &second);
            let expected = if cell.is_pentagon() { 5 } else { 6 };
            prop_assert_eq!(first.len(), expected);
            assert_well_ordered(&first);
        }
    }
}
