use crate::cell::Cell;
use crate::coord::GeoPoint;
use crate::error::HexmapError;
use crate::grid::{Grid, GridCell};
use crate::neighbor::Neighbor;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;

#[derive(Serialize)]
struct CellProperties {
    index: u64,
}

#[derive(Serialize)]
struct NeighborProperties {
    index: u64,
    position: usize,
    angle: f64,
}

#[derive(Serialize)]
struct GridCellProperties {
    index: u64,
    key: i64,
    coordinates: (i64, i64),
}

fn to_properties(properties: &impl Serialize) -> Result<JsonObject, HexmapError> {
    match serde_json::to_value(properties) {
        Ok(JsonValue::Object(map)) => Ok(map),
        Ok(other) => Err(HexmapError::GeoJsonError(format!(
            "properties must serialize to an object, got {}",
            other
        ))),
        Err(e) => Err(HexmapError::GeoJsonError(e.to_string())),
    }
}

fn cell_feature(cell: &Cell, properties: JsonObject) -> Feature {
    let polygon = cell.boundary_polygon();
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::from(&polygon))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Conversion of a single item into a GeoJSON feature.
///
/// Cells and anything wrapping one use the cell footprint in lon/lat; a bare
/// [`GeoPoint`] is a Point.
pub trait ToFeature {
    fn to_feature(&self) -> Result<Feature, HexmapError>;
}

impl ToFeature for GeoPoint {
    fn to_feature(&self) -> Result<Feature, HexmapError> {
        let point = geo_types::Point::from(*self);
        Ok(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::from(&point))),
            id: None,
            properties: Some(JsonObject::new()),
            foreign_members: None,
        })
    }
}

impl ToFeature for Cell {
    fn to_feature(&self) -> Result<Feature, HexmapError> {
        let properties = to_properties(&CellProperties { index: self.id() })?;
        Ok(cell_feature(self, properties))
    }
}

impl ToFeature for Neighbor {
    fn to_feature(&self) -> Result<Feature, HexmapError> {
        let properties = to_properties(&NeighborProperties {
            index: self.cell().id(),
            position: self.position(),
            angle: self.angle(),
        })?;
        Ok(cell_feature(self.cell(), properties))
    }
}

impl ToFeature for GridCell {
    fn to_feature(&self) -> Result<Feature, HexmapError> {
        let properties = to_properties(&GridCellProperties {
            index: self.cell().id(),
            key: self.key(),
            coordinates: self.coordinates(),
        })?;
        Ok(cell_feature(self.cell(), properties))
    }
}

/// Conversion of a collection into a GeoJSON feature collection.
///
/// # Example
///
/// ```
/// use hexmap_rs::{Cell, Grid, ToFeatureCollection};
///
/// # fn main() -> Result<(), hexmap_rs::HexmapError> {
/// let seed = Cell::from_wgs84(&(-2.248, 53.481), 8)?;
/// let grid = Grid::builder().height(3).width(3).build_from_cell(seed)?;
///
/// let collection = grid.to_feature_collection()?;
/// assert_eq!(collection.features.len(), grid.len());
/// println!("{}", collection);
/// # Ok(())
/// # }
/// ```
pub trait ToFeatureCollection {
    fn to_feature_collection(&self) -> Result<FeatureCollection, HexmapError>;
}

impl<T: ToFeature> ToFeatureCollection for [T] {
    fn to_feature_collection(&self) -> Result<FeatureCollection, HexmapError> {
        collect_features(self.iter())
    }
}

impl<T: ToFeature> ToFeatureCollection for Vec<T> {
    fn to_feature_collection(&self) -> Result<FeatureCollection, HexmapError> {
        self.as_slice().to_feature_collection()
    }
}

impl ToFeatureCollection for Grid {
    fn to_feature_collection(&self) -> Result<FeatureCollection, HexmapError> {
        collect_features(self.iter())
    }
}

fn collect_features<'a, T, I>(items: I) -> Result<FeatureCollection, HexmapError>
where
    T: ToFeature + 'a,
    I: Iterator<Item = &'a T>,
{
    let features = items
        .map(ToFeature::to_feature)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
