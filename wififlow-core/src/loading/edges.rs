//! Hourly edge files: `<data_dir>/<year>/<month>/<day>/<hour>.csv`

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use super::parser::deserialize_csv_file;
use crate::{
    Error,
    model::{EdgeAggregate, HourSlot, HourlyEdges},
};

/// Location of the edge file of `slot`; path components are not zero-padded
pub fn hourly_edge_path(data_dir: &Path, slot: HourSlot) -> PathBuf {
    data_dir
        .join(slot.date.year().to_string())
        .join(slot.date.month().to_string())
        .join(slot.date.day().to_string())
        .join(format!("{}.csv", slot.hour))
}

/// Writes one hourly edge file, creating its directory when needed.
///
/// An hour without edges still gets a header-only file.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn write_hourly_edges(data_dir: &Path, hourly: &HourlyEdges) -> Result<PathBuf, Error> {
    let path = hourly_edge_path(data_dir, hourly.slot);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(&path)
        .map_err(|e| Error::csv(&path, e))?;
    writer
        .write_record(["from_router_id", "to_router_id", "seconds", "count"])
        .map_err(|e| Error::csv(&path, e))?;
    for edge in &hourly.edges {
        writer.serialize(edge).map_err(|e| Error::csv(&path, e))?;
    }
    writer.flush().map_err(|e| Error::io(&path, e))?;

    Ok(path)
}

/// Reads the edge file of one hour slot
///
/// # Errors
///
/// Returns [`Error::MissingHourFile`] if the file does not exist, and an
/// error on malformed rows or zero counts
pub fn read_hourly_edges(data_dir: &Path, slot: HourSlot) -> Result<HourlyEdges, Error> {
    let path = hourly_edge_path(data_dir, slot);
    if !path.is_file() {
        return Err(Error::MissingHourFile { path });
    }

    let edges: Vec<EdgeAggregate> = deserialize_csv_file(&path)?;
    if let Some(edge) = edges.iter().find(|e| e.count == 0) {
        return Err(Error::InvalidData(format!(
            "edge {} in '{}' has a zero count",
            edge.key(),
            path.display()
        )));
    }

    Ok(HourlyEdges { slot, edges })
}

/// Reads all 24 hourly edge files of `date`, in hour order
///
/// # Errors
///
/// Fails on the first missing or malformed hour
pub fn read_day(data_dir: &Path, date: NaiveDate) -> Result<Vec<HourlyEdges>, Error> {
    HourSlot::day(date)
        .map(|slot| {
            let hourly = read_hourly_edges(data_dir, slot)?;
            log::info!("{} - done", slot.hour);
            Ok(hourly)
        })
        .collect()
}
