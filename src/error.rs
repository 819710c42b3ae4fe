/// Error type for hexmap-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HexmapError {
    /// Longitude outside [-180, 180] or latitude outside [-90, 90].
    InvalidCoordinate { longitude: f64, latitude: f64 },
    /// The resolution is outside the H3 range (0-15).
    InvalidResolution(u8),
    /// The value is not a valid H3 cell index.
    InvalidCellIndex(String),
    /// Grid height and width must both be positive.
    InvalidDimensions { height: i64, width: i64 },
    /// Grid expansion reached a pentagon cell (carries the raw index).
    PentagonInGrid(u64),
    /// No grid cell is stored under this key.
    NotFound(i64),
    /// Failed to build a GeoJSON feature or collection.
    GeoJsonError(String),
    /// File I/O, Arrow or Parquet error.
    IoError(String),
}

impl std::fmt::Display for HexmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexmapError::InvalidCoordinate {
                longitude,
                latitude,
            } => write!(f, "Invalid coordinate: ({}, {})", longitude, latitude),
            HexmapError::InvalidResolution(r) => write!(f, "Invalid resolution: {}", r),
            HexmapError::InvalidCellIndex(msg) => write!(f, "Invalid cell index: {}", msg),
            HexmapError::InvalidDimensions { height, width } => {
                write!(f, "Invalid grid dimensions: {}x{}", height, width)
            }
            HexmapError::PentagonInGrid(index) => {
                write!(f, "Cannot build grid with pentagon cell: {:x}", index)
            }
            HexmapError::NotFound(key) => write!(f, "No grid cell at key: {}", key),
            HexmapError::GeoJsonError(msg) => write!(f, "GeoJSON error: {}", msg),
            HexmapError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for HexmapError {}
