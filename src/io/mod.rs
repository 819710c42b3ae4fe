pub mod arrow;
pub mod feature;

pub use self::arrow::GridCellsToArrow;
pub use self::feature::{ToFeature, ToFeatureCollection};
