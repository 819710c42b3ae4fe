use crate::error::HexmapError;
use crate::grid::{Grid, GridCell};
use arrow_array::{Float64Array, Int64Array, RecordBatch, UInt64Array};
use arrow_schema::{DataType, Field, Schema};
use geoarrow_array::IntoArrow;
use geoarrow_array::array::PolygonArray;
use geoarrow_array::builder::PolygonBuilder;
use geoarrow_schema::{Crs, Dimension, Metadata, PolygonType};
use rayon::prelude::*;
use std::sync::Arc;

fn wgs84_metadata() -> Arc<Metadata> {
    let crs = Crs::from_authority_code("EPSG:4326".to_string());
    Arc::new(Metadata::new(crs, None))
}

/// Trait for converting collections of [`GridCell`]s to Arrow arrays.
///
/// Implemented for `[GridCell]` and `Vec<GridCell>`.
pub trait GridCellsToArrow {
    /// Converts cell footprints to an Arrow PolygonArray.
    fn to_arrow_polygons(&self) -> PolygonArray;
    /// Converts cells to a RecordBatch with index, key, i, j, longitude, latitude, and geometry.
    fn to_record_batch(&self) -> Result<RecordBatch, HexmapError>;
}

impl GridCellsToArrow for [GridCell] {
    fn to_arrow_polygons(&self) -> PolygonArray {
        let poly = PolygonType::new(Dimension::XY, wgs84_metadata());
        let polygons: Vec<_> = self.par_iter().map(GridCell::to_polygon).collect();
        PolygonBuilder::from_polygons(&polygons, poly).finish()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, HexmapError> {
        let polygon_array = self.to_arrow_polygons();
        let indices: UInt64Array = self.iter().map(|c| Some(c.cell().id())).collect();
        let keys: Int64Array = self.iter().map(|c| Some(c.key())).collect();
        let is: Int64Array = self.iter().map(|c| Some(c.i())).collect();
        let js: Int64Array = self.iter().map(|c| Some(c.j())).collect();
        let longitudes: Float64Array = self
            .iter()
            .map(|c| Some(c.cell().center().longitude()))
            .collect();
        let latitudes: Float64Array = self
            .iter()
            .map(|c| Some(c.cell().center().latitude()))
            .collect();

        let geometry_field = polygon_array.extension_type().to_field("geometry", false);
        let schema = Schema::new(vec![
            Field::new("index", DataType::UInt64, false),
            Field::new("key", DataType::Int64, false),
            Field::new("i", DataType::Int64, false),
            Field::new("j", DataType::Int64, false),
            Field::new("longitude", DataType::Float64, false),
            Field::new("latitude", DataType::Float64, false),
            geometry_field,
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(indices),
                Arc::new(keys),
                Arc::new(is),
                Arc::new(js),
                Arc::new(longitudes),
                Arc::new(latitudes),
                Arc::new(polygon_array.into_arrow()),
            ],
        )
        .map_err(|e| HexmapError::IoError(e.to_string()))
    }
}

impl GridCellsToArrow for Vec<GridCell> {
    fn to_arrow_polygons(&self) -> PolygonArray {
        self.as_slice().to_arrow_polygons()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, HexmapError> {
        self.as_slice().to_record_batch()
    }
}

impl Grid {
    /// Converts every stored cell, in expansion order, to an Arrow RecordBatch.
    pub fn to_record_batch(&self) -> Result<RecordBatch, HexmapError> {
        let cells: Vec<GridCell> = self.iter().cloned().collect();
        cells.to_record_batch()
    }
}
