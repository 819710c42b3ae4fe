use hexmap_rs::{Grid, GeoPoint, HexmapError, RandomWalk, ToFeatureCollection};
use tracing::info;

fn main() -> Result<(), HexmapError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hexmap_rs=info,info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let lon = -2.2479699500757597;
    let lat = 53.48082746395233;
    let point = GeoPoint::new(lon, lat)?;

    let grid = Grid::builder()
        .height(7)
        .width(9)
        .build_from_point(&point, 8)?;
    info!(cells = grid.len(), "grid built");

    for grid_cell in grid.iter().take(5) {
        println!(
            "Key: {}, Coordinates: {:?}, Cell: {}",
            grid_cell.key(),
            grid_cell.coordinates(),
            grid_cell.cell().index()
        );
    }
    if let Some(bounds) = grid.bounds() {
        println!("Bounds: {:?} -> {:?}", bounds.min(), bounds.max());
    }

    let start = *grid.get_at(4, 3)?.cell();
    let straight: Vec<_> = start.straight_walk(90.0, Some(8)).collect();
    let wander: Vec<_> = start.walk(RandomWalk::seeded(7), 0.0, Some(8)).collect();
    for step in &straight {
        println!("Straight: {} (position {})", step.cell().index(), step.position());
    }
    info!(
        straight = straight.len(),
        random = wander.len(),
        "walks finished"
    );

    println!("{}", grid.to_feature_collection()?);

    Ok(())
}
