//! # hexmap-rs
//!
//! Bounded rectangular grids and walks over the H3 global hexagonal index.
//! There are currently three main entry points.
//!
//! ### 1. `Cell` - Single Cell Operations
//!
//! ```
//! use hexmap_rs::{Cell, GeoPoint};
//!
//! # fn main() -> Result<(), hexmap_rs::HexmapError> {
//! let point = GeoPoint::new(-2.248, 53.481)?;
//! let cell = Cell::from_point(&point, 8)?;
//! println!("{}", cell.index());
//!
//! // Neighbors ordered clockwise from east
//! for neighbor in &cell.neighbor_map(90.0) {
//!     println!("{} at {:.1}", neighbor.position(), neighbor.angle());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Grid` - Bounded Offset Grids
//!
//! ```
//! use hexmap_rs::{Grid, GeoPoint, ToFeatureCollection};
//!
//! # fn main() -> Result<(), hexmap_rs::HexmapError> {
//! let point = GeoPoint::new(-2.248, 53.481)?;
//! let grid = Grid::builder()
//!     .height(5)
//!     .width(7)
//!     .build_from_point(&point, 8)?;
//!
//! let center = grid.get_at(3, 2)?;
//! println!("{:?}", center.coordinates());
//!
//! let geojson = grid.to_feature_collection()?.to_string();
//! println!("{}", geojson);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `Walker` - Random and Straight Walks
//!
//! ```
//! use hexmap_rs::Cell;
//!
//! # fn main() -> Result<(), hexmap_rs::HexmapError> {
//! let start = Cell::from_wgs84(&(-2.248, 53.481), 8)?;
//!
//! let wander: Vec<_> = start.random_walk(Some(20)).collect();
//! let heading_east: Vec<_> = start.straight_walk(90.0, Some(20)).collect();
//! # Ok(())
//! # }
//! ```
//!

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod io;
pub mod neighbor;
pub mod walk;

pub use cell::Cell;
pub use coord::{Coordinate, GeoPoint, normalize_degrees};
pub use error::HexmapError;
pub use grid::{Grid, GridBuilder, GridCell};
pub use io::{GridCellsToArrow, ToFeature, ToFeatureCollection};
pub use neighbor::{Neighbor, NeighborMap, order_neighbors};
pub use walk::{RandomWalk, Select, StraightWalk, Walker};

pub use geo_types;
pub use geojson;
pub use h3o;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), HexmapError> {
        let point = GeoPoint::new(-2.248, 53.481)?;
        let grid = Grid::builder()
            .height(5)
            .width(5)
            .bearing(15.0)
            .build_from_point(&point, 8)?;

        assert!(!grid.is_empty());
        let seed = grid.get(grid.coordinates_to_key(2, 2))?;
        assert_eq!(seed.cell(), &Cell::from_point(&point, 8)?);

        let collection = grid.to_feature_collection()?;
        assert_eq!(collection.features.len(), grid.len());

        let batch = grid.to_record_batch()?;
        assert_eq!(batch.num_rows(), grid.len());
        Ok(())
    }

    #[test]
    fn test_walk_leaves_grid_eventually() -> Result<(), HexmapError> {
        let point = GeoPoint::new(-2.248, 53.481)?;
        let grid = Grid::builder().height(3).width(3).build_from_point(&point, 9)?;
        let start = *grid.get(4)?.cell();
        let members: HashSet<Cell> = grid.iter().map(|c| *c.cell()).collect();

        // A straight walk has no notion of the grid and runs off its edge
        let inside = start
            .straight_walk(0.0, Some(10))
            .take_while(|step| members.contains(step.cell()))
            .count();
        assert!(inside < 10);
        Ok(())
    }

    #[test]
    fn test_cell_identity_across_entry_points() -> Result<(), HexmapError> {
        let point = GeoPoint::new(139.69, 35.68)?;
        let from_point = point.to_cell(2)?;
        let from_wgs84 = Cell::from_wgs84(&(139.69, 35.68), 2)?;
        let from_id = Cell::try_from(from_point.id())?;

        let set: HashSet<Cell> = [from_point, from_wgs84, from_id].into_iter().collect();
        assert_eq!(set.len(), 1);
        Ok(())
    }

    #[test]
    fn test_pentagon_rejected_end_to_end() -> Result<(), HexmapError> {
        let pentagon = Cell::try_from(0x8009fffffffffffu64)?;
        let result = Grid::builder().height(2).width(2).build_from_cell(pentagon);
        assert!(matches!(result, Err(HexmapError::PentagonInGrid(_))));
        Ok(())
    }
}
