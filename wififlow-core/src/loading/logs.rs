//! Discovery and parsing of raw per-device detection logs

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;

use super::parser::{csv_reader, parse_timestamp};
use super::raw_types::RawDetection;
use crate::{Error, model::DetectionEvent};

/// Lists `<raw_logs_dir>/<prefix>*/*.csv` in sorted path order
///
/// # Errors
///
/// Returns an error if a directory cannot be listed
pub fn discover_log_files(raw_logs_dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for device_dir in read_dir_sorted(raw_logs_dir)? {
        let matches_prefix = device_dir
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(prefix));
        if !matches_prefix || !device_dir.is_dir() {
            continue;
        }
        files.extend(
            read_dir_sorted(&device_dir)?
                .into_iter()
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "csv")),
        );
    }
    files.sort();
    Ok(files)
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut paths = std::fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| Error::io(dir, e))?;
    paths.sort();
    Ok(paths)
}

/// Day encoded in a log file name.
///
/// The name is split on `_`; tokens 2, 3 and 4 are year, month and day,
/// e.g. `wifi_logs_2022_12_01.csv`.
///
/// # Errors
///
/// Returns [`Error::InvalidFileName`] if the tokens are missing or do not
/// form a valid date
pub fn date_from_file_name(path: &Path) -> Result<NaiveDate, Error> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let invalid = || Error::InvalidFileName {
        name: name.to_string(),
    };

    let stem = name.strip_suffix(".csv").unwrap_or(name);
    let parts: Vec<&str> = stem.split('_').collect();
    let token = |idx: usize| -> Result<u32, Error> {
        parts
            .get(idx)
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or_else(invalid)
    };

    let year = i32::try_from(token(2)?).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, token(3)?, token(4)?).ok_or_else(invalid)
}

/// Reads every detection of a raw log file.
///
/// # Errors
///
/// Fails on the first unreadable row or malformed timestamp, naming the
/// file and row
pub fn read_detections(path: &Path) -> Result<Vec<DetectionEvent>, Error> {
    let mut reader = csv_reader(path)?;
    let mut events = Vec::new();

    for (idx, record) in reader.deserialize::<RawDetection>().enumerate() {
        let raw = record.map_err(|e| Error::csv(path, e))?;
        // header is row 1
        let row = idx + 2;
        let timestamp = parse_timestamp(&raw.tm).map_err(|source| Error::Timestamp {
            path: path.to_path_buf(),
            row,
            value: raw.tm.clone(),
            source,
        })?;
        events.push(DetectionEvent {
            user: raw.user_mac,
            router_id: raw.router_id,
            timestamp,
        });
    }

    debug!("Read {} detections from {}", events.len(), path.display());
    Ok(events)
}
