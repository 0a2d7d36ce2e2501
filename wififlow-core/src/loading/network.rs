use std::path::Path;

use log::info;

use super::parser::{deserialize_csv_file, parse_address, parse_line_string, parse_point};
use super::raw_types::{RawRoadSegment, RawSniffer};
use crate::{
    Error,
    model::{RoadSegment, Sniffer, SnifferRegistry},
};

/// Loads the sniffer table, resolving addresses for `language`
///
/// # Errors
///
/// Returns an error on unreadable rows, bad geometries or addresses
pub fn load_sniffers(path: &Path, language: &str) -> Result<SnifferRegistry, Error> {
    let raw: Vec<RawSniffer> = deserialize_csv_file(path)?;

    let sniffers = raw
        .into_iter()
        .map(|row| {
            Ok(Sniffer {
                geometry: parse_point(&row.geom)?,
                address: parse_address(&row.guid, &row.address_json, language)?,
                guid: row.guid,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    info!("Loaded {} sniffers from {}", sniffers.len(), path.display());
    Ok(SnifferRegistry::new(sniffers))
}

/// Loads the road network polylines
///
/// # Errors
///
/// Returns an error on unreadable rows or bad geometries
pub fn load_road_network(path: &Path) -> Result<Vec<RoadSegment>, Error> {
    let raw: Vec<RawRoadSegment> = deserialize_csv_file(path)?;

    let segments = raw
        .into_iter()
        .map(|row| {
            Ok(RoadSegment {
                geometry: parse_line_string(&row.geom)?,
                group_id: row.group_id,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    info!("Loaded {} road segments from {}", segments.len(), path.display());
    Ok(segments)
}
