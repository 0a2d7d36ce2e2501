use log::info;

use super::html::MapDocument;
use super::layers::{heatmap_layer, marker_layer, road_layer, timeline_layer};
use crate::{
    Error,
    loading::{MapConfig, load_road_network, load_sniffers, read_day},
    styling::style_hour,
};

/// Loads the static network and the configured day's 24 hourly edge files
/// and assembles the map.
///
/// # Errors
///
/// Returns an error if an input file is missing or malformed, or if an edge
/// references a sniffer absent from the sniffer table
pub fn build_traffic_map(config: &MapConfig) -> Result<MapDocument, Error> {
    validate_config(config)?;

    let roads = load_road_network(&config.roads_path)?;
    let sniffers = load_sniffers(&config.sniffers_path, &config.address_language)?;

    let mut styled = Vec::new();
    for hourly in read_day(&config.data_dir, config.date)? {
        styled.extend(style_hour(&hourly, &sniffers, config.speed_cap_kmh)?);
    }
    info!("data load - done ({} styled edges)", styled.len());

    let markers = marker_layer(&sniffers);
    let heatmap = heatmap_layer(&sniffers);
    info!("sniffer markers and heatmap - done");

    let roads = road_layer(&roads, &config.road_bounds);
    info!("routes - done ({} segments)", roads.lines.len());

    let timeline = timeline_layer(&styled)?;
    info!("traffic graph - done");

    Ok(MapDocument {
        center: config.center,
        zoom: config.zoom,
        markers,
        heatmap,
        roads,
        timeline,
    })
}

fn validate_config(config: &MapConfig) -> Result<(), Error> {
    for path in [&config.sniffers_path, &config.roads_path] {
        if !path.is_file() {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "network file not found"),
            ));
        }
    }
    if config.speed_cap_kmh.is_nan() || config.speed_cap_kmh <= 0.0 {
        return Err(Error::InvalidData(format!(
            "speed cap must be positive, got {}",
            config.speed_cap_kmh
        )));
    }
    Ok(())
}
